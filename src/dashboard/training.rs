use serde::{Deserialize, Serialize};

use super::{ensure, ensure_non_negative};
use crate::metrics::MetricError;

/// Lifecycle label reported by the training run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Idle,
    Training,
    Paused,
    Completed,
}

impl TrainingStatus {
    pub const ALL: [TrainingStatus; 4] =
        [Self::Idle, Self::Training, Self::Paused, Self::Completed];

    /// Lowercase wire label, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Training => "training",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    /// Parse a status label case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(label))
    }
}

/// Snapshot of the fine-tuning run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub epoch: u32,
    pub total_epochs: u32,
    pub loss: f64,
    pub learning_rate: f64,
    /// Seconds since training started.
    pub time_elapsed: f64,
    /// Seconds the run is expected to continue.
    pub estimated_time_remaining: f64,
    pub status: TrainingStatus,
}

impl TrainingMetrics {
    /// Check the record against its invariants.
    pub fn validate(&self) -> Result<(), MetricError> {
        ensure(
            self.total_epochs > 0,
            "training.total_epochs",
            "must be greater than zero",
        )?;
        ensure(
            self.epoch <= self.total_epochs,
            "training.epoch",
            format!("epoch {} exceeds {} total epochs", self.epoch, self.total_epochs),
        )?;
        ensure_non_negative("training.loss", self.loss)?;
        ensure(
            self.learning_rate.is_finite() && self.learning_rate > 0.0,
            "training.learning_rate",
            "must be a positive finite number",
        )?;
        ensure_non_negative("training.time_elapsed", self.time_elapsed)?;
        ensure_non_negative(
            "training.estimated_time_remaining",
            self.estimated_time_remaining,
        )
    }
}

/// One point of the train/validation loss curve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LossPoint {
    pub epoch: u32,
    pub loss: f64,
    pub val_loss: f64,
}

/// Fixed training configuration shown on the hyperparameters tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    pub batch_size: u32,
    pub learning_rate: f64,
    pub optimizer: String,
    pub scheduler: String,
    pub warmup_steps: u32,
    pub max_length: u32,
}

/// Colour family of a training log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Progress,
    Info,
    Checkpoint,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingLogEntry {
    pub timestamp: String,
    pub message: String,
    pub level: LogLevel,
}

/// Everything the training dashboard displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingData {
    /// Name of the model being fine-tuned.
    pub model: String,
    pub metrics: TrainingMetrics,
    pub loss_curve: Vec<LossPoint>,
    pub hyperparameters: Hyperparameters,
    pub logs: Vec<TrainingLogEntry>,
}

impl TrainingData {
    pub fn validate(&self) -> Result<(), MetricError> {
        self.metrics.validate()?;
        for (idx, point) in self.loss_curve.iter().enumerate() {
            ensure_non_negative(&format!("training.loss_curve[{idx}].loss"), point.loss)?;
            ensure_non_negative(
                &format!("training.loss_curve[{idx}].val_loss"),
                point.val_loss,
            )?;
        }
        ensure(
            self.hyperparameters.batch_size > 0,
            "training.hyperparameters.batch_size",
            "must be greater than zero",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> TrainingMetrics {
        TrainingMetrics {
            epoch: 5,
            total_epochs: 10,
            loss: 0.85,
            learning_rate: 1e-5,
            time_elapsed: 18000.0,
            estimated_time_remaining: 18000.0,
            status: TrainingStatus::Training,
        }
    }

    #[test]
    fn parses_status_labels() {
        assert_eq!(TrainingStatus::parse("paused"), Some(TrainingStatus::Paused));
        assert_eq!(TrainingStatus::parse(" COMPLETED "), Some(TrainingStatus::Completed));
        assert_eq!(TrainingStatus::parse("exploded"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&TrainingStatus::Training).unwrap();
        assert_eq!(json, "\"training\"");
    }

    #[test]
    fn rejects_zero_total_epochs() {
        let invalid = TrainingMetrics {
            epoch: 0,
            total_epochs: 0,
            ..metrics()
        };
        let err = invalid.validate().unwrap_err();
        assert!(err.to_string().contains("training.total_epochs"));
    }

    #[test]
    fn rejects_epoch_past_total() {
        let invalid = TrainingMetrics {
            epoch: 11,
            ..metrics()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        let invalid = TrainingMetrics {
            learning_rate: 0.0,
            ..metrics()
        };
        assert!(invalid.validate().is_err());
        assert!(metrics().validate().is_ok());
    }
}
