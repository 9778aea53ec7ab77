use eframe::egui::{self, Align, Layout, ProgressBar, RichText, Sense, Ui, vec2};

use super::{EguiApp, style, widgets};
use crate::egui_app::state::TrainingTab;
use crate::egui_app::view_model::{BadgeVariant, StatCard, TrainingControl, TrainingView};

const LOSS_CHART_HEIGHT: f32 = 80.0;

impl EguiApp {
    pub(super) fn render_training(&mut self, ui: &mut Ui) {
        let view = self.controller.views().training.clone();
        let mut requested = None;
        widgets::section_heading(
            ui,
            "Whisper Fine-tuning",
            "Training progress and performance metrics",
            |ui| {
                if ui
                    .add(widgets::action_button("Stop", BadgeVariant::Destructive))
                    .clicked()
                {
                    tracing::info!("Stop requested; no training backend is attached");
                }
                if let Ok(view) = &view {
                    let control = view.control;
                    if ui
                        .add(widgets::action_button(control.label(), control.variant()))
                        .on_hover_text(control_hint(control))
                        .clicked()
                    {
                        requested = Some(control);
                    }
                }
                if ui.button("Config").clicked() {
                    self.controller.select_training_tab(TrainingTab::Hyperparameters);
                }
            },
        );
        if let Some(control) = requested {
            self.controller.request_training_control(control);
        }

        let view = match view {
            Ok(view) => view,
            Err(err) => {
                widgets::view_error(ui, "Training dashboard", &err);
                return;
            }
        };
        render_cards(ui, &view);
        ui.add_space(12.0);
        render_progress(ui, &view);
        ui.add_space(12.0);

        if let Some(tab) = widgets::tab_bar(ui, &self.controller.ui.training) {
            self.controller.select_training_tab(tab);
        }
        match self.controller.ui.training.selected() {
            TrainingTab::Loss => render_loss(ui, &view),
            TrainingTab::Hyperparameters => {
                widgets::titled_card(ui, "Training Configuration", |ui| {
                    widgets::fact_grid(ui, "training_hyperparameters", &view.hyperparameters);
                })
            }
            TrainingTab::Logs => render_logs(ui, &view),
        }
    }
}

fn render_cards(ui: &mut Ui, view: &TrainingView) {
    let palette = style::palette();
    ui.columns(view.cards.len() + 1, |columns| {
        widgets::card(&mut columns[0], |ui| {
            ui.label(RichText::new("Status").size(13.0).strong());
            widgets::badge(ui, &view.status_badge);
            ui.label(RichText::new(&view.model_caption).size(11.0).color(palette.text_muted));
        });
        for (column, stat) in columns[1..].iter_mut().zip(&view.cards) {
            widgets::stat_card(column, stat);
        }
    });
}

fn render_progress(ui: &mut Ui, view: &TrainingView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Training Progress", |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&view.epoch_line).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                widgets::badge(ui, &view.progress_badge);
            });
        });
        ui.add(ProgressBar::new(view.progress_fraction).desired_width(ui.available_width()));
        ui.horizontal(|ui| {
            ui.label(RichText::new(&view.elapsed_line).color(palette.text_muted));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&view.remaining_line).color(palette.text_muted));
            });
        });
    });
}

fn render_loss(ui: &mut Ui, view: &TrainingView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Training & Validation Loss", |ui| {
        if let Some((train, val)) = &view.latest_losses {
            let latest = [
                StatCard {
                    title: "Training Loss",
                    value: train.clone(),
                    caption: String::new(),
                },
                StatCard {
                    title: "Validation Loss",
                    value: val.clone(),
                    caption: String::new(),
                },
            ];
            ui.columns(2, |columns| {
                for (column, stat) in columns.iter_mut().zip(&latest) {
                    column.label(RichText::new(stat.title).size(13.0).strong());
                    column.label(RichText::new(&stat.value).size(24.0).strong());
                }
            });
            ui.add_space(8.0);
        }
        ui.label(RichText::new("Loss progression over epochs:").color(palette.text_muted));
        if view.loss_bars.is_empty() {
            return;
        }
        let slot = ui.available_width() / view.loss_bars.len() as f32;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for bar in &view.loss_bars {
                ui.allocate_ui_with_layout(
                    vec2(slot, LOSS_CHART_HEIGHT + 18.0),
                    Layout::bottom_up(Align::Center),
                    |ui| {
                        ui.label(
                            RichText::new(&bar.epoch_label)
                                .size(11.0)
                                .color(palette.text_muted),
                        );
                        let (rect, _) = ui.allocate_exact_size(
                            vec2(slot * 0.8, bar.height.min(LOSS_CHART_HEIGHT)),
                            Sense::hover(),
                        );
                        ui.painter().rect_filled(
                            rect,
                            egui::CornerRadius::same(2),
                            palette.accent_neural,
                        );
                    },
                );
            }
        });
    });
}

fn render_logs(ui: &mut Ui, view: &TrainingView) {
    widgets::titled_card(ui, "Recent Training Logs", |ui| {
        for line in &view.logs {
            ui.label(
                RichText::new(&line.text)
                    .monospace()
                    .color(style::log_color(line.level)),
            );
        }
    });
}

fn control_hint(control: TrainingControl) -> &'static str {
    match control {
        TrainingControl::Pause => "Pause the current run",
        TrainingControl::Resume => "Resume the paused run",
        TrainingControl::Start => "Start a new run",
    }
}
