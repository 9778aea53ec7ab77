use eframe::egui::{ProgressBar, RichText, Ui};

use super::{EguiApp, style, widgets};
use crate::egui_app::state::DatasetTab;
use crate::egui_app::view_model::DatasetView;

impl EguiApp {
    pub(super) fn render_dataset(&mut self, ui: &mut Ui) {
        let mut export_clicked = false;
        widgets::section_heading(
            ui,
            "Hindi ASR Dataset",
            "Training data overview and preprocessing status",
            |ui| {
                export_clicked = ui.button("Export Preprocessed Data").clicked();
            },
        );
        if export_clicked {
            self.controller.request_export("preprocessed dataset");
        }

        let view = match &self.controller.views().dataset {
            Ok(view) => view.clone(),
            Err(err) => {
                widgets::view_error(ui, "Dataset overview", err);
                return;
            }
        };
        widgets::stat_cards(ui, &view.cards);
        ui.add_space(12.0);
        render_progress(ui, &view);
        ui.add_space(12.0);

        if let Some(tab) = widgets::tab_bar(ui, &self.controller.ui.dataset) {
            self.controller.select_dataset_tab(tab);
        }
        match self.controller.ui.dataset.selected() {
            DatasetTab::Distribution => render_distribution(ui, &view),
            DatasetTab::Speakers => render_speakers(ui, &view),
            DatasetTab::Quality => widgets::titled_card(ui, "Audio Quality Metrics", |ui| {
                widgets::fact_grid(ui, "dataset_quality", &view.quality);
            }),
        }
    }
}

fn render_progress(ui: &mut Ui, view: &DatasetView) {
    widgets::titled_card(ui, "Preprocessing Progress", |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&view.processed_line).strong());
            ui.with_layout(
                eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                |ui| widgets::badge(ui, &view.processed_badge),
            );
        });
        ui.add(ProgressBar::new(view.processed_fraction).desired_width(ui.available_width()));
    });
}

fn render_distribution(ui: &mut Ui, view: &DatasetView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Audio Duration Distribution", |ui| {
        if view.buckets.is_empty() {
            ui.label(RichText::new("No duration buckets").color(palette.text_muted));
            return;
        }
        ui.columns(view.buckets.len(), |columns| {
            for (column, bucket) in columns.iter_mut().zip(&view.buckets) {
                column.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(&bucket.count)
                            .size(24.0)
                            .strong()
                            .color(style::tone_color(bucket.tone)),
                    );
                    ui.label(RichText::new(&bucket.label).color(palette.text_muted));
                });
            }
        });
    });
}

fn render_speakers(ui: &mut Ui, view: &DatasetView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Speaker Contribution", |ui| {
        for speaker in &view.speakers {
            ui.horizontal(|ui| {
                ui.label(&speaker.label);
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| ui.label(RichText::new(&speaker.value).color(palette.text_muted)),
                );
            });
        }
    });
}
