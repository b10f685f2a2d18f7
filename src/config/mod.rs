//! Configuration for the employee report.

use std::fmt;

use serde::Serialize;

use crate::error::{ReportError, Result};

/// A named salary range with an inclusive upper bound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBand {
    /// Label printed in the band report
    pub label: String,
    /// Inclusive upper bound, `None` for the open-ended top band
    pub upper_bound: Option<f64>,
}

impl SalaryBand {
    /// Create a band with an inclusive upper bound
    #[must_use]
    pub fn up_to(label: &str, upper_bound: f64) -> Self {
        Self {
            label: label.to_string(),
            upper_bound: Some(upper_bound),
        }
    }

    /// Create the open-ended top band
    #[must_use]
    pub fn open(label: &str) -> Self {
        Self {
            label: label.to_string(),
            upper_bound: None,
        }
    }

    /// Whether a salary falls at or below this band's upper bound
    #[must_use]
    pub fn admits(&self, salary: f64) -> bool {
        self.upper_bound.is_none_or(|bound| salary <= bound)
    }
}

/// How the rendered report is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text sections, one result per line
    #[default]
    Text,
    /// A single pretty-printed JSON document
    Json,
}

/// Configuration for the `ReportRunner`
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Salaries strictly above this are high earners
    pub high_earner_threshold: f64,
    /// How many names the top-earners report lists
    pub top_earner_count: usize,
    /// Salary bands in ascending order
    pub salary_bands: Vec<SalaryBand>,
    /// Output format for the rendered report
    pub output_format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_earner_threshold: 75_000.0,
            top_earner_count: 3,
            salary_bands: vec![
                SalaryBand::up_to("0-50k", 50_000.0),
                SalaryBand::up_to("50k-80k", 80_000.0),
                SalaryBand::open("80k+"),
            ],
            output_format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    /// Check that the band list partitions every non-negative salary
    pub fn validate(&self) -> Result<()> {
        let Some(last) = self.salary_bands.last() else {
            return Err(ReportError::config("at least one salary band is required"));
        };
        if last.upper_bound.is_some() {
            return Err(ReportError::config(format!(
                "last salary band {:?} must be open-ended",
                last.label
            )));
        }

        let bounds: Vec<f64> = self
            .salary_bands
            .iter()
            .filter_map(|band| band.upper_bound)
            .collect();
        if bounds.len() + 1 != self.salary_bands.len() {
            return Err(ReportError::config(
                "only the last salary band may be open-ended",
            ));
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ReportError::config(
                "salary band bounds must be strictly ascending",
            ));
        }
        if !self.high_earner_threshold.is_finite() {
            return Err(ReportError::config("high earner threshold must be finite"));
        }
        Ok(())
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Configuration:")?;
        writeln!(f, "  High Earner Threshold: {}", self.high_earner_threshold)?;
        writeln!(f, "  Top Earner Count: {}", self.top_earner_count)?;
        for band in &self.salary_bands {
            match band.upper_bound {
                Some(bound) => writeln!(f, "  Band {}: <= {bound}", band.label)?,
                None => writeln!(f, "  Band {}: unbounded", band.label)?,
            }
        }
        writeln!(f, "  Output Format: {:?}", self.output_format)
    }
}
