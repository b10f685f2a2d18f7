//! Domain models for the employee report
//!
//! This module contains the employee record and the sample dataset
//! the report binary runs over.

pub mod employee;
pub mod sample;

// Re-export commonly used types
pub use employee::{Employee, Skills};
pub use sample::sample_employees;
