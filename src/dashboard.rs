//! Immutable records the dashboard views are built from.
//!
//! The records are plain values. [`DashboardData::sample`] supplies the
//! built-in research figures, and [`snapshot`] loads the same shape from JSON.

mod dataset;
mod evaluation;
mod sample;
pub mod snapshot;
mod training;

pub use dataset::{AudioQuality, DatasetData, DatasetStats, DurationBucket, SpeakerSummary, Tone};
pub use evaluation::{
    DomainPerformance, ErrorBreakdown, EvaluationData, SampleTranscription, WerResult,
};
pub use training::{
    Hyperparameters, LogLevel, LossPoint, TrainingData, TrainingLogEntry, TrainingMetrics,
    TrainingStatus,
};

use serde::{Deserialize, Serialize};

use crate::metrics::MetricError;

/// All records shown across the three dashboard sections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub dataset: DatasetData,
    pub training: TrainingData,
    pub evaluation: EvaluationData,
}

impl DashboardData {
    /// Validate every record, returning the first violated invariant.
    pub fn validate(&self) -> Result<(), MetricError> {
        self.dataset.validate()?;
        self.training.validate()?;
        self.evaluation.validate()
    }
}

pub(crate) fn ensure(
    condition: bool,
    field: impl Into<String>,
    reason: impl Into<String>,
) -> Result<(), MetricError> {
    if condition {
        Ok(())
    } else {
        Err(MetricError::invalid(field, reason))
    }
}

pub(crate) fn ensure_non_negative(field: impl Into<String>, value: f64) -> Result<(), MetricError> {
    ensure(
        value.is_finite() && value >= 0.0,
        field,
        format!("{value} is not a non-negative finite number"),
    )
}
