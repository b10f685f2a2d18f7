//! Salary band classification

use crate::config::SalaryBand;

/// Find the first band whose inclusive upper bound admits the salary
///
/// Bands are checked in order, so with ascending bounds a salary lands in
/// the lowest band that covers it. Returns `None` only when the list is
/// empty or the last band is bounded below the salary.
#[must_use]
pub fn classify(bands: &[SalaryBand], salary: f64) -> Option<&SalaryBand> {
    bands.iter().find(|band| band.admits(salary))
}
