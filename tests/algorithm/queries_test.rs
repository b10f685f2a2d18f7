//! Tests for the report queries over the sample dataset

use staff_report::algorithm::GroupEntry;
use staff_report::algorithm::queries;
use staff_report::{Employee, EmployeeCollection, ReportConfig};

fn sample() -> EmployeeCollection {
    EmployeeCollection::sample().unwrap()
}

fn entry<V>(key: &str, value: V) -> GroupEntry<V> {
    GroupEntry {
        key: key.to_string(),
        value,
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_high_earners() {
    let collection = sample();
    let earners: Vec<&str> = queries::high_earners(&collection, 75_000.0)
        .into_iter()
        .map(Employee::name)
        .collect();
    assert_eq!(earners, ["Alice", "Charlie", "Ethan", "George"]);
}

#[test]
fn test_distinct_departments() {
    assert_eq!(
        queries::distinct_departments(&sample()),
        ["Engineering", "HR", "Marketing", "Sales"]
    );
}

#[test]
fn test_total_payroll() {
    assert_eq!(queries::total_payroll(&sample()), 530_000.0);
}

#[test]
fn test_average_salary_by_department() {
    assert_eq!(
        queries::average_salary_by_department(&sample()),
        [
            entry("Engineering", 94_000.0),
            entry("HR", 55_000.0),
            entry("Sales", 62_000.0),
            entry("Marketing", 69_000.0),
        ]
    );
}

#[test]
fn test_skill_inventory() {
    let skills = queries::skill_inventory(&sample());
    assert_eq!(skills.len(), 12);
    assert_eq!(skills[..3], ["AWS", "Analytics", "CRM"]);
    // Java is held by three people but listed once
    assert_eq!(skills.iter().filter(|s| *s == "Java").count(), 1);
}

#[test]
fn test_top_earners() {
    assert_eq!(
        queries::top_earners(&sample(), 3),
        ["George", "Charlie", "Alice"]
    );
}

#[test]
fn test_department_roster() {
    assert_eq!(
        queries::department_roster(&sample()),
        [
            entry("Engineering", names(&["Alice", "Charlie", "George"])),
            entry("HR", names(&["Bob"])),
            entry("Sales", names(&["Diana", "Ethan"])),
            entry("Marketing", names(&["Fiona"])),
        ]
    );
}

#[test]
fn test_salary_bands() {
    let config = ReportConfig::default();
    assert_eq!(
        queries::salary_bands(&sample(), &config.salary_bands),
        [
            entry("0-50k", names(&["Diana"])),
            entry("50k-80k", names(&["Bob", "Ethan", "Fiona"])),
            entry("80k+", names(&["Alice", "Charlie", "George"])),
        ]
    );
}

#[test]
fn test_top_talent_by_department() {
    let talent: Vec<(String, Option<String>)> = queries::top_talent_by_department(&sample())
        .into_iter()
        .map(|e| (e.key, e.value))
        .collect();
    assert_eq!(
        talent,
        [
            ("Engineering".to_string(), Some("George".to_string())),
            ("HR".to_string(), Some("Bob".to_string())),
            ("Sales".to_string(), Some("Ethan".to_string())),
            ("Marketing".to_string(), Some("Fiona".to_string())),
        ]
    );
}

#[test]
fn test_average_matches_roster_salaries() {
    let collection = sample();
    let averages = queries::average_salary_by_department(&collection);
    let roster = queries::department_roster(&collection);
    assert_eq!(averages.len(), roster.len());

    for (average, members) in averages.iter().zip(&roster) {
        assert_eq!(average.key, members.key);
        let total: f64 = members
            .value
            .iter()
            .map(|name| collection.get(name).unwrap().salary())
            .sum();
        let expected = total / members.value.len() as f64;
        assert!((expected - average.value).abs() < 1e-9);
    }
}

#[test]
fn test_top_talent_is_in_roster() {
    let collection = sample();
    let roster = queries::department_roster(&collection);
    for talent in queries::top_talent_by_department(&collection) {
        let members = &roster.iter().find(|r| r.key == talent.key).unwrap().value;
        let name = talent.value.unwrap();
        assert!(members.contains(&name));
        let best = collection.get(&name).unwrap().salary();
        assert!(
            members
                .iter()
                .all(|m| collection.get(m).unwrap().salary() <= best)
        );
    }
}
