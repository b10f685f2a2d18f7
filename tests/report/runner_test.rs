//! Tests for the report runner's rendered output

use staff_report::{EmployeeCollection, ReportConfig, ReportRunner};

const EXPECTED: &str = include_str!("../fixtures/sample_report.txt");

fn render() -> String {
    let runner = ReportRunner::new(ReportConfig::default()).unwrap();
    let collection = EmployeeCollection::sample().unwrap();
    let mut out = Vec::new();
    runner.run(&collection, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_sample_report_text() {
    assert_eq!(render(), EXPECTED);
}

#[test]
fn test_report_is_idempotent() {
    assert_eq!(render().as_bytes(), render().as_bytes());
}

#[test]
fn test_section_headers_in_order() {
    let text = render();
    let headers = [
        "Challenge Set A:",
        "Departments:",
        "Total Payroll: $",
        "Challenge Set B:",
        "Average Salary by Department:",
        "Skills Inventory:",
        "Top 3 Earners:",
        "Challenge Set C:",
        "Department Report:",
        "Salary Bands:",
        "Top Talent Per Department:",
    ];
    let positions: Vec<usize> = headers.iter().map(|h| text.find(h).unwrap()).collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_build_twice_equal() {
    let runner = ReportRunner::default();
    let collection = EmployeeCollection::sample().unwrap();
    assert_eq!(runner.build(&collection), runner.build(&collection));
}
