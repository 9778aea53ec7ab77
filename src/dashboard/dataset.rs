use serde::{Deserialize, Serialize};

use super::{ensure, ensure_non_negative};
use crate::metrics::MetricError;

/// Aggregate counts for the recording corpus.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_recordings: u64,
    /// Seconds of audio across all recordings.
    pub total_duration: f64,
    pub unique_speakers: u64,
    /// Mean recording length in seconds.
    pub avg_duration: f64,
    /// Recordings that finished preprocessing.
    pub processed_count: u64,
}

impl DatasetStats {
    /// Check the record against its invariants.
    pub fn validate(&self) -> Result<(), MetricError> {
        ensure_non_negative("dataset.total_duration", self.total_duration)?;
        ensure_non_negative("dataset.avg_duration", self.avg_duration)?;
        ensure(
            self.processed_count <= self.total_recordings,
            "dataset.processed_count",
            format!(
                "{} processed exceeds {} total recordings",
                self.processed_count, self.total_recordings
            ),
        )
    }
}

/// Colour family used for a duration bucket count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Info,
    Warning,
    Destructive,
}

/// Recording count within a duration range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DurationBucket {
    pub label: String,
    pub count: u64,
    pub tone: Tone,
}

/// A labelled speaker statistic, e.g. "Gender distribution".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSummary {
    pub label: String,
    pub value: String,
}

/// Recording format facts shown on the audio quality tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioQuality {
    pub sample_rate_khz: u32,
    pub bit_depth: u32,
    pub snr_min_db: u32,
    pub snr_max_db: u32,
    pub format: String,
}

impl AudioQuality {
    pub fn validate(&self) -> Result<(), MetricError> {
        ensure(
            self.snr_min_db <= self.snr_max_db,
            "dataset.quality.snr",
            format!(
                "minimum {} dB is above maximum {} dB",
                self.snr_min_db, self.snr_max_db
            ),
        )
    }
}

/// Everything the dataset overview displays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DatasetData {
    pub stats: DatasetStats,
    pub duration_buckets: Vec<DurationBucket>,
    pub speakers: Vec<SpeakerSummary>,
    pub quality: AudioQuality,
}

impl DatasetData {
    pub fn validate(&self) -> Result<(), MetricError> {
        self.stats.validate()?;
        self.quality.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DatasetStats {
        DatasetStats {
            total_recordings: 10,
            total_duration: 42.0,
            unique_speakers: 2,
            avg_duration: 4.2,
            processed_count: 10,
        }
    }

    #[test]
    fn accepts_fully_processed_dataset() {
        assert!(stats().validate().is_ok());
    }

    #[test]
    fn rejects_processed_above_total() {
        let err = DatasetStats {
            processed_count: 11,
            ..stats()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            MetricError::InvalidMetric { ref field, .. } if field == "dataset.processed_count"
        ));
    }

    #[test]
    fn rejects_negative_duration() {
        let invalid = DatasetStats {
            total_duration: -1.0,
            ..stats()
        };
        assert!(invalid.validate().is_err());
    }
}
