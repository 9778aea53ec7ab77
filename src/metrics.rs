//! Pure formatting and ratio helpers behind every dashboard figure.
//! Nothing here touches egui, so the math stays testable on its own.

mod error;
mod format;
mod ratio;

pub use error::MetricError;
pub use format::{
    format_exponential, format_fixed, format_hours, format_minutes_approx, format_percent,
    format_thousands, format_time,
};
pub use ratio::{ZeroRatioPolicy, improvement_percent, percentage};
