//! Employee collection
//!
//! An ordered, read-only collection of employees. List order is the order
//! records were supplied in, and every query that reports "original order"
//! relies on it.

use std::slice;

use log::debug;
use rustc_hash::FxHashSet;

use crate::algorithm::aggregation::group_by;
use crate::error::{ReportError, Result};
use crate::models::Employee;

/// Validated, immutable list of employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeCollection {
    employees: Vec<Employee>,
}

impl EmployeeCollection {
    /// Create a collection, validating every record
    ///
    /// Names must be non-empty and unique, departments non-empty and
    /// salaries finite and non-negative.
    pub fn new(employees: Vec<Employee>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for employee in &employees {
            validate_employee(employee)?;
            if !seen.insert(employee.name()) {
                return Err(ReportError::invalid_employee(
                    employee.name(),
                    "duplicate name",
                ));
            }
        }
        debug!("Validated {} employee records", employees.len());
        Ok(Self { employees })
    }

    /// Collection over the built-in sample dataset
    pub fn sample() -> Result<Self> {
        Self::new(crate::models::sample_employees())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate in original list order
    pub fn iter(&self) -> slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    /// Find employees matching a predicate, in list order
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<&Employee>
    where
        F: Fn(&Employee) -> bool,
    {
        self.employees.iter().filter(|e| predicate(e)).collect()
    }

    /// Look up an employee by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name() == name)
    }

    /// Group employees by department, departments in first-encounter order
    #[must_use]
    pub fn by_department(&self) -> Vec<(&str, Vec<&Employee>)> {
        group_by(&self.employees, Employee::department)
    }
}

impl<'a> IntoIterator for &'a EmployeeCollection {
    type Item = &'a Employee;
    type IntoIter = slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_employee(employee: &Employee) -> Result<()> {
    if employee.name().trim().is_empty() {
        return Err(ReportError::invalid_employee(employee.name(), "name is empty"));
    }
    if employee.department().trim().is_empty() {
        return Err(ReportError::invalid_employee(
            employee.name(),
            "department is empty",
        ));
    }
    let salary = employee.salary();
    if !salary.is_finite() || salary < 0.0 {
        return Err(ReportError::invalid_employee(
            employee.name(),
            format!("salary {salary} is not a finite non-negative amount"),
        ));
    }
    Ok(())
}
