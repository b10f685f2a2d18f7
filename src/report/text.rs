//! Plain text rendering of an employee report.

use std::io::{self, Write};

use crate::algorithm::join_names;
use crate::report::EmployeeReport;
use crate::utils::format_amount;

/// Write the report as headed sections separated by blank lines
pub fn write_text<W: Write>(report: &EmployeeReport, w: &mut W) -> io::Result<()> {
    writeln!(w, "Challenge Set A:")?;
    for employee in &report.high_earners {
        writeln!(w, "{employee}")?;
    }

    writeln!(w, "\nDepartments:")?;
    for department in &report.departments {
        writeln!(w, "{department}")?;
    }

    writeln!(w, "\nTotal Payroll: ${}", format_amount(report.total_payroll))?;

    writeln!(w, "\nChallenge Set B:")?;
    writeln!(w, "Average Salary by Department:")?;
    for entry in &report.average_salary_by_department {
        writeln!(w, "{}: ${}", entry.key, format_amount(entry.value))?;
    }

    writeln!(w, "\nSkills Inventory:")?;
    for skill in &report.skills {
        writeln!(w, "{skill}")?;
    }

    writeln!(w, "\nTop {} Earners:", report.top_earner_count)?;
    for name in &report.top_earners {
        writeln!(w, "{name}")?;
    }

    writeln!(w, "\nChallenge Set C:")?;
    writeln!(w, "Department Report:")?;
    for entry in &report.department_roster {
        writeln!(w, "{}: {}", entry.key, join_names(&entry.value))?;
    }

    writeln!(w, "\nSalary Bands:")?;
    for entry in &report.salary_bands {
        writeln!(w, "{}: {}", entry.key, join_names(&entry.value))?;
    }

    writeln!(w, "\nTop Talent Per Department:")?;
    for entry in &report.top_talent {
        writeln!(w, "{}: {}", entry.key, entry.value.as_deref().unwrap_or("None"))?;
    }

    Ok(())
}
