//! Aggregation algorithms and report queries
//!
//! `aggregation` holds the generic building blocks (ordered grouping,
//! means, stable maximum, joining); `queries` holds the nine report
//! queries built from them; `bands` classifies salaries into bands.

pub mod aggregation;
pub mod bands;
pub mod queries;

pub use aggregation::{group_by, join_names, max_by_first, mean, sorted_distinct};
pub use bands::classify;
pub use queries::GroupEntry;
