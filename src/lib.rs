//! A Rust library for in-memory employee reporting: filtering, grouping,
//! sorting and summarizing a fixed list of employee records.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// Re-export the most common types for easier use
pub use collections::EmployeeCollection;
pub use config::{OutputFormat, ReportConfig, SalaryBand};
pub use error::{ReportError, Result};
pub use models::{Employee, sample_employees};
pub use report::{EmployeeReport, ReportRunner};
