//! Utility functions for formatting and logging.

pub mod logging;

pub use logging::{log_operation_complete, log_operation_start};

/// Render a monetary amount the way the report prints it
///
/// Whole amounts keep one decimal place (`85000.0`); anything else uses the
/// shortest representation that round-trips (`62500.5`).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        format!("{amount}")
    }
}
