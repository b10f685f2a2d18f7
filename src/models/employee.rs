//! Employee entity model
//!
//! An `Employee` is an immutable record: once built, none of its fields change.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use smallvec::SmallVec;

use crate::utils::format_amount;

/// Skill list, inline for the usual handful of entries
pub type Skills = SmallVec<[String; 4]>;

/// A single employee record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    name: String,
    department: String,
    salary: f64,
    start_date: NaiveDate,
    skills: Skills,
}

impl Employee {
    /// Create a new employee record
    #[must_use]
    pub fn new<S: AsRef<str>>(
        name: &str,
        department: &str,
        salary: f64,
        start_date: NaiveDate,
        skills: &[S],
    ) -> Self {
        Self {
            name: name.to_string(),
            department: department.to_string(),
            salary,
            start_date,
            skills: skills.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    #[must_use]
    pub fn salary(&self) -> f64 {
        self.salary
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, ${})",
            self.name,
            self.department,
            format_amount(self.salary)
        )
    }
}
