use std::io;

use log::debug;
use staff_report::{EmployeeCollection, ReportConfig, ReportRunner};

fn main() -> anyhow::Result<()> {
    // Setup logging; only warnings by default so stdout carries just the report
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ReportConfig::default();
    debug!("{config}");

    let runner = ReportRunner::new(config)?;
    let collection = EmployeeCollection::sample()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    runner.run(&collection, &mut handle)?;

    Ok(())
}
