//! The fixed sample dataset reported on by the binary.

use chrono::NaiveDate;

use crate::models::Employee;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The seven sample employees, in report order
#[must_use]
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new("Alice", "Engineering", 85_000.0, date(2018, 3, 10), &["Java", "Spring"]),
        Employee::new("Bob", "HR", 55_000.0, date(2016, 7, 1), &["Communication", "Recruitment"]),
        Employee::new("Charlie", "Engineering", 92_000.0, date(2019, 1, 5), &["Java", "Docker"]),
        Employee::new("Diana", "Sales", 48_000.0, date(2020, 5, 15), &["Negotiation", "CRM"]),
        Employee::new("Ethan", "Sales", 76_000.0, date(2017, 9, 23), &["CRM", "Analytics"]),
        Employee::new("Fiona", "Marketing", 69_000.0, date(2021, 2, 28), &["SEO", "Content"]),
        Employee::new(
            "George",
            "Engineering",
            105_000.0,
            date(2015, 6, 30),
            &["Java", "Kubernetes", "AWS"],
        ),
    ]
}
