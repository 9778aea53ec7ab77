//! End-to-end checks of the sample dashboard through the public view-model API.

use asrdash::dashboard::{DashboardData, TrainingStatus};
use asrdash::egui_app::view_model::{
    BadgeVariant, CompletionState, TrainingControl, badge_for_status_label, dataset_view,
    evaluation_view, training_view,
};
use asrdash::metrics::{ZeroRatioPolicy, format_time, improvement_percent, percentage};

#[test]
fn formatter_reference_values() {
    assert_eq!(format_time(0.0), "0h 0m");
    assert_eq!(format_time(3661.0), "1h 1m");
    assert_eq!(format_time(18000.0), "5h 0m");
    assert_eq!(percentage(8500.0, 8500.0).unwrap(), 100.0);
    assert_eq!(percentage(0.0, 8500.0).unwrap(), 0.0);
    assert!((improvement_percent(24.8, 18.6).unwrap() - 25.0).abs() < 0.1);
}

#[test]
fn fully_processed_dataset_shows_complete_badge() {
    let data = DashboardData::sample();
    assert_eq!(data.dataset.stats.total_recordings, 8500);
    assert_eq!(data.dataset.stats.processed_count, 8500);
    let view = dataset_view(&data.dataset, ZeroRatioPolicy::Error).unwrap();
    assert_eq!(view.processed_badge.label, "100.0%");
    assert_eq!(view.completion, CompletionState::Complete);
    assert_ne!(view.processed_badge.variant, CompletionState::InProgress.badge());
}

#[test]
fn status_mapping_is_total() {
    for status in TrainingStatus::ALL {
        let variant = badge_for_status_label(status.as_str());
        assert_eq!(variant, status.badge());
    }
    assert_eq!(badge_for_status_label("warming-up"), BadgeVariant::Secondary);
}

#[test]
fn paused_run_offers_resume() {
    let mut data = DashboardData::sample();
    data.training.metrics.status = TrainingStatus::Paused;
    let view = training_view(&data.training, ZeroRatioPolicy::Error).unwrap();
    assert_eq!(view.status_badge.label, "PAUSED");
    assert_eq!(view.status_badge.variant, BadgeVariant::Warning);
    assert_eq!(view.control, TrainingControl::Resume);
}

#[test]
fn extra_candidate_row_can_take_best() {
    let mut data = DashboardData::sample();
    let mut candidate = data.evaluation.results[1].clone();
    candidate.model = "Whisper-medium (Fine-tuned)".to_string();
    candidate.wer = 12.4;
    data.evaluation.results.push(candidate);
    let view = evaluation_view(&data.evaluation, ZeroRatioPolicy::Error).unwrap();
    assert_eq!(view.cards[0].value, "12.4%");
    assert_eq!(view.rows[1].status.label, "Candidate");
    assert_eq!(view.rows[2].status.label, "Best");
    assert_eq!(view.cards[1].value, "-50.0%");
}
