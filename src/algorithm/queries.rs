//! The report queries
//!
//! Each query is a pure function of the employee collection. None of them
//! can fail, and none depends on another's result.

use log::debug;
use serde::Serialize;

use crate::algorithm::aggregation::{group_by, max_by_first, mean, sorted_distinct};
use crate::algorithm::bands::classify;
use crate::collections::EmployeeCollection;
use crate::config::SalaryBand;
use crate::models::Employee;

/// One line of a grouped report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupEntry<V> {
    /// Department or band label
    pub key: String,
    /// Aggregated value for the group
    pub value: V,
}

impl<V> GroupEntry<V> {
    fn new(key: &str, value: V) -> Self {
        Self {
            key: key.to_string(),
            value,
        }
    }
}

fn names(members: &[&Employee]) -> Vec<String> {
    members.iter().map(|e| e.name().to_string()).collect()
}

/// Employees earning strictly more than `threshold`, in list order
#[must_use]
pub fn high_earners(collection: &EmployeeCollection, threshold: f64) -> Vec<&Employee> {
    let earners = collection.filter(|e| e.salary() > threshold);
    debug!("High earners above {threshold}: {}", earners.len());
    earners
}

/// Department names, deduplicated and sorted
#[must_use]
pub fn distinct_departments(collection: &EmployeeCollection) -> Vec<String> {
    sorted_distinct(collection.iter().map(Employee::department))
}

/// Sum of all salaries
#[must_use]
pub fn total_payroll(collection: &EmployeeCollection) -> f64 {
    collection
        .iter()
        .map(Employee::salary)
        .fold(0.0, |total, salary| total + salary)
}

/// Mean salary for each department, in first-encounter order
#[must_use]
pub fn average_salary_by_department(collection: &EmployeeCollection) -> Vec<GroupEntry<f64>> {
    collection
        .by_department()
        .into_iter()
        .filter_map(|(department, members)| {
            mean(members.iter().map(|e| e.salary()))
                .map(|average| GroupEntry::new(department, average))
        })
        .collect()
}

/// Every skill held by anyone, deduplicated and sorted
#[must_use]
pub fn skill_inventory(collection: &EmployeeCollection) -> Vec<String> {
    let skills = sorted_distinct(
        collection
            .iter()
            .flat_map(|e| e.skills().iter().map(String::as_str)),
    );
    debug!("Skill inventory holds {} skills", skills.len());
    skills
}

/// Names of the `count` best paid employees, highest first
///
/// Ties keep list order. Returns fewer names when the collection is smaller
/// than `count`.
#[must_use]
pub fn top_earners(collection: &EmployeeCollection, count: usize) -> Vec<String> {
    let mut ranked: Vec<&Employee> = collection.iter().collect();
    ranked.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
    ranked
        .into_iter()
        .take(count)
        .map(|e| e.name().to_string())
        .collect()
}

/// Member names for each department, in list order
#[must_use]
pub fn department_roster(collection: &EmployeeCollection) -> Vec<GroupEntry<Vec<String>>> {
    collection
        .by_department()
        .into_iter()
        .map(|(department, members)| GroupEntry::new(department, names(&members)))
        .collect()
}

/// Member names for each salary band, bands in definition order
///
/// Bands without members are left out. A salary no band admits is skipped
/// with a warning.
#[must_use]
pub fn salary_bands(
    collection: &EmployeeCollection,
    bands: &[SalaryBand],
) -> Vec<GroupEntry<Vec<String>>> {
    let classified: Vec<(usize, &Employee)> = collection
        .iter()
        .filter_map(|employee| {
            let position = classify(bands, employee.salary())
                .and_then(|band| bands.iter().position(|b| std::ptr::eq(b, band)));
            if position.is_none() {
                log::warn!(
                    "No salary band admits {} ({})",
                    employee.name(),
                    employee.salary()
                );
            }
            position.map(|p| (p, employee))
        })
        .collect();

    bands
        .iter()
        .enumerate()
        .filter_map(|(position, band)| {
            let members: Vec<String> = classified
                .iter()
                .filter(|(p, _)| *p == position)
                .map(|(_, e)| e.name().to_string())
                .collect();
            (!members.is_empty()).then(|| GroupEntry::new(&band.label, members))
        })
        .collect()
}

/// Best paid employee per department, first in list order wins ties
///
/// `None` marks a department without members, which grouping never yields
/// for a non-empty collection.
#[must_use]
pub fn top_talent_by_department(
    collection: &EmployeeCollection,
) -> Vec<GroupEntry<Option<String>>> {
    group_by(collection.as_slice(), Employee::department)
        .into_iter()
        .map(|(department, members)| {
            let best = max_by_first(members.iter().copied(), Employee::salary);
            GroupEntry::new(department, best.map(|e| e.name().to_string()))
        })
        .collect()
}
