//! Library exports for the dashboard binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// Immutable dashboard records and JSON snapshots.
pub mod dashboard;
/// Tab shell, view models and egui renderer.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Pure formatting and ratio helpers.
pub mod metrics;
