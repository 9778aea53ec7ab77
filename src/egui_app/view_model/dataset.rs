use super::{Badge, CompletionState, fraction_of_percent};
use crate::dashboard::{DatasetData, SpeakerSummary, Tone};
use crate::metrics::{
    self, MetricError, ZeroRatioPolicy, format_fixed, format_hours, format_minutes_approx,
    format_thousands,
};

/// Headline figure with a caption underneath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
}

/// Labelled value in a fact grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketView {
    pub label: String,
    pub count: String,
    pub tone: Tone,
}

/// Display model for the dataset overview section.
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetView {
    pub cards: Vec<StatCard>,
    /// e.g. `8500 / 8500 files processed`.
    pub processed_line: String,
    pub processed_badge: Badge,
    pub completion: CompletionState,
    /// Progress bar fill, 0.0-1.0.
    pub processed_fraction: f32,
    pub buckets: Vec<BucketView>,
    pub speakers: Vec<SpeakerSummary>,
    pub quality: Vec<Fact>,
}

/// Build the dataset overview from validated records.
pub fn dataset_view(
    data: &DatasetData,
    policy: ZeroRatioPolicy,
) -> Result<DatasetView, MetricError> {
    data.validate()?;
    let stats = &data.stats;
    let processed = policy.resolve(metrics::percentage(
        stats.processed_count as f64,
        stats.total_recordings as f64,
    ))?;
    let fully_processed =
        stats.total_recordings > 0 && stats.processed_count == stats.total_recordings;
    let completion = if fully_processed {
        CompletionState::Complete
    } else {
        CompletionState::InProgress
    };

    let cards = vec![
        StatCard {
            title: "Total Recordings",
            value: format_thousands(stats.total_recordings),
            caption: "Audio files ready for training".to_string(),
        },
        StatCard {
            title: "Total Duration",
            value: format_hours(stats.total_duration),
            caption: format_minutes_approx(stats.total_duration),
        },
        StatCard {
            title: "Unique Speakers",
            value: stats.unique_speakers.to_string(),
            caption: "Diverse voice profiles".to_string(),
        },
        StatCard {
            title: "Avg Duration",
            value: format!("{}s", format_fixed(stats.avg_duration, 1)),
            caption: "Per recording".to_string(),
        },
    ];

    let quality = &data.quality;
    Ok(DatasetView {
        cards,
        processed_line: format!(
            "{} / {} files processed",
            stats.processed_count, stats.total_recordings
        ),
        processed_badge: Badge::new(format!("{}%", format_fixed(processed, 1)), completion.badge()),
        completion,
        processed_fraction: fraction_of_percent(processed),
        buckets: data
            .duration_buckets
            .iter()
            .map(|bucket| BucketView {
                label: bucket.label.clone(),
                count: format_thousands(bucket.count),
                tone: bucket.tone,
            })
            .collect(),
        speakers: data.speakers.clone(),
        quality: vec![
            Fact {
                label: "Sample Rate",
                value: format!("{} kHz", quality.sample_rate_khz),
            },
            Fact {
                label: "Bit Depth",
                value: format!("{}-bit", quality.bit_depth),
            },
            Fact {
                label: "SNR Range",
                value: format!("{}-{} dB", quality.snr_min_db, quality.snr_max_db),
            },
            Fact {
                label: "Format",
                value: quality.format.clone(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardData;
    use crate::egui_app::view_model::BadgeVariant;

    fn sample() -> DatasetData {
        DashboardData::sample().dataset
    }

    #[test]
    fn fully_processed_dataset_is_complete() {
        let view = dataset_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.processed_badge.label, "100.0%");
        assert_eq!(view.completion, CompletionState::Complete);
        assert_eq!(view.processed_badge.variant, BadgeVariant::Default);
        assert_eq!(view.processed_fraction, 1.0);
        assert_eq!(view.processed_line, "8500 / 8500 files processed");
    }

    #[test]
    fn cards_format_headline_figures() {
        let view = dataset_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        let values: Vec<_> = view
            .cards
            .iter()
            .map(|card| (card.value.as_str(), card.caption.as_str()))
            .collect();
        assert_eq!(values[0], ("8,500", "Audio files ready for training"));
        assert_eq!(values[1], ("10.0h", "~600 minutes"));
        assert_eq!(values[2].0, "125");
        assert_eq!(values[3], ("4.2s", "Per recording"));
    }

    #[test]
    fn partial_processing_is_in_progress() {
        let mut data = sample();
        data.stats.processed_count = 4250;
        let view = dataset_view(&data, ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.processed_badge.label, "50.0%");
        assert_eq!(view.completion, CompletionState::InProgress);
        assert_eq!(view.processed_badge.variant, BadgeVariant::Secondary);
    }

    #[test]
    fn empty_dataset_follows_zero_policy() {
        let mut data = sample();
        data.stats.total_recordings = 0;
        data.stats.processed_count = 0;
        assert!(matches!(
            dataset_view(&data, ZeroRatioPolicy::Error),
            Err(MetricError::DivisionByZero { .. })
        ));
        let view = dataset_view(&data, ZeroRatioPolicy::Zero).unwrap();
        assert_eq!(view.processed_badge.label, "0.0%");
        assert_eq!(view.completion, CompletionState::InProgress);
    }

    #[test]
    fn rejects_processed_above_total() {
        let mut data = sample();
        data.stats.processed_count = 9000;
        assert!(matches!(
            dataset_view(&data, ZeroRatioPolicy::Zero),
            Err(MetricError::InvalidMetric { .. })
        ));
    }

    #[test]
    fn quality_and_buckets_are_listed() {
        let view = dataset_view(&sample(), ZeroRatioPolicy::Error).unwrap();
        assert_eq!(view.buckets[0].count, "2,456");
        assert_eq!(view.buckets[3].tone, Tone::Destructive);
        let quality: Vec<_> = view.quality.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(quality, vec!["16 kHz", "16-bit", "15-45 dB", "WAV"]);
    }
}
