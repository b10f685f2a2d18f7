//! Report runner
//!
//! Runs every query over one employee collection, collects the results into an
//! [`EmployeeReport`] and writes it out in the configured format.

pub mod text;

use std::io::Write;
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::algorithm::GroupEntry;
use crate::algorithm::queries;
use crate::collections::EmployeeCollection;
use crate::config::{OutputFormat, ReportConfig};
use crate::error::Result;
use crate::models::Employee;
use crate::utils::{log_operation_complete, log_operation_start};

/// Results of every report query, in print order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeReport {
    /// Employees above the high-earner threshold
    pub high_earners: Vec<Employee>,
    /// Sorted distinct department names
    pub departments: Vec<String>,
    /// Sum of all salaries
    pub total_payroll: f64,
    /// Mean salary per department
    pub average_salary_by_department: Vec<GroupEntry<f64>>,
    /// Sorted distinct skills
    pub skills: Vec<String>,
    /// Number of top earners requested
    pub top_earner_count: usize,
    /// Names of the best paid employees
    pub top_earners: Vec<String>,
    /// Member names per department
    pub department_roster: Vec<GroupEntry<Vec<String>>>,
    /// Member names per salary band
    pub salary_bands: Vec<GroupEntry<Vec<String>>>,
    /// Best paid employee per department
    pub top_talent: Vec<GroupEntry<Option<String>>>,
}

/// Runs the report queries with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct ReportRunner {
    config: ReportConfig,
}

impl ReportRunner {
    /// Create a runner after validating its configuration
    pub fn new(config: ReportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run every query over the collection
    #[must_use]
    pub fn build(&self, collection: &EmployeeCollection) -> EmployeeReport {
        let config = &self.config;
        let report = EmployeeReport {
            high_earners: queries::high_earners(collection, config.high_earner_threshold)
                .into_iter()
                .cloned()
                .collect(),
            departments: queries::distinct_departments(collection),
            total_payroll: queries::total_payroll(collection),
            average_salary_by_department: queries::average_salary_by_department(collection),
            skills: queries::skill_inventory(collection),
            top_earner_count: config.top_earner_count,
            top_earners: queries::top_earners(collection, config.top_earner_count),
            department_roster: queries::department_roster(collection),
            salary_bands: queries::salary_bands(collection, &config.salary_bands),
            top_talent: queries::top_talent_by_department(collection),
        };
        debug!(
            "Built report with {} departments and {} bands",
            report.departments.len(),
            report.salary_bands.len()
        );
        report
    }

    /// Write a built report in the configured output format
    pub fn render<W: Write>(&self, report: &EmployeeReport, writer: &mut W) -> Result<()> {
        match self.config.output_format {
            OutputFormat::Text => text::write_text(report, writer)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, report)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Build and render the report in one go
    pub fn run<W: Write>(&self, collection: &EmployeeCollection, writer: &mut W) -> Result<()> {
        log_operation_start("Running employee report over", "employee dataset");
        let start = Instant::now();

        let report = self.build(collection);
        self.render(&report, writer)?;

        log_operation_complete(
            "reported",
            "employee dataset",
            collection.len(),
            Some(start.elapsed()),
        );
        Ok(())
    }
}
