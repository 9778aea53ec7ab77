//! Owns dashboard data, settings and tab state for the egui renderer.

use crate::config::{self, AppSettings};
use crate::dashboard::{DashboardData, TrainingStatus, snapshot};
use crate::egui_app::state::{
    DatasetTab, EvaluationTab, Section, Tab, TabState, TrainingTab, UiState,
};
use crate::egui_app::view_model::{self, DatasetView, EvaluationView, TrainingControl, TrainingView};
use crate::metrics::MetricError;

/// View models derived once from immutable data.
#[derive(Clone, Debug)]
pub struct DashboardViews {
    pub dataset: Result<DatasetView, MetricError>,
    pub training: Result<TrainingView, MetricError>,
    pub evaluation: Result<EvaluationView, MetricError>,
}

impl DashboardViews {
    pub fn build(data: &DashboardData, settings: &AppSettings) -> Self {
        let policy = settings.display.zero_ratio;
        Self {
            dataset: view_model::dataset_view(&data.dataset, policy),
            training: view_model::training_view(&data.training, policy),
            evaluation: view_model::evaluation_view(&data.evaluation, policy),
        }
    }
}

/// Coordinates the renderer with the dashboard records.
pub struct DashboardController {
    pub ui: UiState,
    views: DashboardViews,
    status: TrainingStatus,
    /// Startup problem worth showing above the dashboard.
    notice: Option<String>,
}

impl DashboardController {
    pub fn new(data: DashboardData, settings: AppSettings) -> Self {
        let views = DashboardViews::build(&data, &settings);
        for (section, error) in [
            ("dataset", views.dataset.as_ref().err()),
            ("training", views.training.as_ref().err()),
            ("evaluation", views.evaluation.as_ref().err()),
        ] {
            if let Some(error) = error {
                tracing::warn!(section, %error, "View model unavailable");
            }
        }
        Self {
            ui: UiState::starting_at(settings.display.initial_section),
            views,
            status: data.training.metrics.status,
            notice: None,
        }
    }

    /// Load settings and data from disk, falling back to defaults and the
    /// built-in sample when either is unusable.
    pub fn load() -> Self {
        let mut notices = Vec::new();
        let settings = config::load_or_default().unwrap_or_else(|err| {
            tracing::warn!(%err, "Using default settings");
            notices.push(format!("Settings unavailable, using defaults: {err}"));
            AppSettings::default()
        });
        let data = match snapshot_path(&settings) {
            Some(path) => snapshot::load_from_path(&path).unwrap_or_else(|err| {
                tracing::warn!(%err, "Falling back to sample data");
                notices.push(format!("Snapshot not loaded, showing sample data: {err}"));
                DashboardData::sample()
            }),
            None => DashboardData::sample(),
        };
        let mut controller = Self::new(data, settings);
        if !notices.is_empty() {
            controller.notice = Some(notices.join("\n"));
        }
        controller
    }

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn training_status(&self) -> TrainingStatus {
        self.status
    }

    pub fn select_section(&mut self, section: Section) {
        select_logged(&mut self.ui.section, section);
    }

    pub fn select_dataset_tab(&mut self, tab: DatasetTab) {
        select_logged(&mut self.ui.dataset, tab);
    }

    pub fn select_training_tab(&mut self, tab: TrainingTab) {
        select_logged(&mut self.ui.training, tab);
    }

    pub fn select_evaluation_tab(&mut self, tab: EvaluationTab) {
        select_logged(&mut self.ui.evaluation, tab);
    }

    /// Run controls are display-only; the request is logged and dropped.
    pub fn request_training_control(&mut self, control: TrainingControl) {
        tracing::info!(
            control = control.label(),
            status = self.status.as_str(),
            "Training control requested; no training backend is attached"
        );
    }

    /// Export buttons are display-only.
    pub fn request_export(&mut self, what: &'static str) {
        tracing::info!(what, "Export requested; exporting is not available");
    }
}

fn select_logged<T: Tab>(state: &mut TabState<T>, tab: T) {
    if state.select(tab) {
        tracing::debug!(tab = tab.label(), "Tab selected");
    }
}

fn snapshot_path(settings: &AppSettings) -> Option<std::path::PathBuf> {
    let config_dir = config::config_path()
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_default();
    settings.data.snapshot_path_in(&config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::ZeroRatioPolicy;

    #[test]
    fn starts_on_configured_section() {
        let mut settings = AppSettings::default();
        settings.display.initial_section = Section::Training;
        let controller = DashboardController::new(DashboardData::sample(), settings);
        assert_eq!(controller.ui.section.selected(), Section::Training);
        assert_eq!(controller.training_status(), TrainingStatus::Training);
    }

    #[test]
    fn sample_views_all_build() {
        let controller = DashboardController::new(DashboardData::sample(), AppSettings::default());
        let views = controller.views();
        assert!(views.dataset.is_ok());
        assert!(views.training.is_ok());
        assert!(views.evaluation.is_ok());
        assert!(controller.notice().is_none());
    }

    #[test]
    fn one_broken_section_leaves_others_intact() {
        let mut data = DashboardData::sample();
        data.training.metrics.total_epochs = 0;
        data.training.metrics.epoch = 0;
        let views = DashboardViews::build(&data, &AppSettings::default());
        assert!(views.dataset.is_ok());
        assert!(matches!(
            views.training,
            Err(MetricError::InvalidMetric { .. })
        ));
        assert!(views.evaluation.is_ok());
    }

    #[test]
    fn zero_policy_reaches_view_models() {
        let mut data = DashboardData::sample();
        data.dataset.stats.total_recordings = 0;
        data.dataset.stats.processed_count = 0;
        let mut settings = AppSettings::default();
        assert!(DashboardViews::build(&data, &settings).dataset.is_err());
        settings.display.zero_ratio = ZeroRatioPolicy::Zero;
        assert!(DashboardViews::build(&data, &settings).dataset.is_ok());
    }

    #[test]
    fn tab_selection_is_idempotent() {
        let mut controller =
            DashboardController::new(DashboardData::sample(), AppSettings::default());
        controller.select_evaluation_tab(EvaluationTab::Errors);
        controller.select_evaluation_tab(EvaluationTab::Errors);
        assert_eq!(controller.ui.evaluation.selected(), EvaluationTab::Errors);
        controller.select_section(Section::Evaluation);
        assert_eq!(controller.ui.section.selected(), Section::Evaluation);
        assert_eq!(controller.ui.dataset.selected(), DatasetTab::Distribution);
    }
}
