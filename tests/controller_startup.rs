mod support;

use asrdash::app_dirs::APP_DIR_NAME;
use asrdash::config::{self, AppSettings, CONFIG_FILE_NAME};
use asrdash::dashboard::{DashboardData, TrainingStatus, snapshot};
use asrdash::egui_app::controller::DashboardController;
use asrdash::egui_app::state::Section;
use support::asrdash_env::AsrdashEnvGuard;

#[test]
fn first_launch_uses_sample_and_writes_config() {
    let temp = tempfile::tempdir().unwrap();
    let _env = AsrdashEnvGuard::set_config_home(temp.path().to_path_buf());

    let controller = DashboardController::load();
    assert!(controller.notice().is_none());
    assert_eq!(controller.ui.section.selected(), Section::Dataset);
    assert!(controller.views().dataset.is_ok());
    assert!(temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME).is_file());
}

#[test]
fn configured_snapshot_replaces_sample() {
    let temp = tempfile::tempdir().unwrap();
    let _env = AsrdashEnvGuard::set_config_home(temp.path().to_path_buf());
    let app_dir = temp.path().join(APP_DIR_NAME);

    let mut data = DashboardData::sample();
    data.training.metrics.status = TrainingStatus::Completed;
    data.training.metrics.epoch = 10;
    std::fs::create_dir_all(&app_dir).unwrap();
    snapshot::save_to_path(&data, &app_dir.join("run.json")).unwrap();

    let mut settings = AppSettings::default();
    settings.display.initial_section = Section::Training;
    settings.data.snapshot_path = Some("run.json".into());
    config::save_to_path(&settings, &app_dir.join(CONFIG_FILE_NAME)).unwrap();

    let controller = DashboardController::load();
    assert!(controller.notice().is_none());
    assert_eq!(controller.training_status(), TrainingStatus::Completed);
    assert_eq!(controller.ui.section.selected(), Section::Training);
    let training = controller.views().training.as_ref().unwrap();
    assert_eq!(training.progress_badge.label, "100.0%");
}

#[test]
fn broken_snapshot_falls_back_with_notice() {
    let temp = tempfile::tempdir().unwrap();
    let _env = AsrdashEnvGuard::set_config_home(temp.path().to_path_buf());
    let app_dir = temp.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join("run.json"), "{ not json").unwrap();
    let mut settings = AppSettings::default();
    settings.data.snapshot_path = Some("run.json".into());
    config::save_to_path(&settings, &app_dir.join(CONFIG_FILE_NAME)).unwrap();

    let mut controller = DashboardController::load();
    let notice = controller.notice().unwrap().to_string();
    assert!(notice.contains("showing sample data"), "{notice}");
    assert_eq!(controller.training_status(), TrainingStatus::Training);
    controller.dismiss_notice();
    assert!(controller.notice().is_none());
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let _env = AsrdashEnvGuard::set_config_home(temp.path().to_path_buf());
    let app_dir = temp.path().join(APP_DIR_NAME);
    std::fs::create_dir_all(&app_dir).unwrap();
    std::fs::write(app_dir.join(CONFIG_FILE_NAME), "display = [").unwrap();

    let controller = DashboardController::load();
    assert!(controller.notice().unwrap().contains("using defaults"));
    assert_eq!(controller.ui.section.selected(), Section::Dataset);
}
