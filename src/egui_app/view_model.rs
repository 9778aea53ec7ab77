//! Convert dashboard records into display-ready view structs.
//!
//! Every figure shown on screen is formatted here so the egui panels only
//! lay out strings, badge variants and bar fractions.

mod badge;
mod dataset;
mod evaluation;
mod training;

pub use badge::{Badge, BadgeVariant, CompletionState, badge_for_status_label};
pub use dataset::{BucketView, DatasetView, Fact, StatCard, dataset_view};
pub use evaluation::{
    BarTone, ComparisonRow, DomainRow, ErrorReduction, ErrorShare, EvaluationView,
    evaluation_view,
};
pub use training::{
    LogLine, LossBar, TrainingControl, TrainingView, header_indicator, training_progress,
    training_view,
};

pub(crate) fn fraction_of_percent(percent: f64) -> f32 {
    (percent / 100.0).clamp(0.0, 1.0) as f32
}
