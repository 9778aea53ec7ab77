use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::{EguiApp, style, widgets};
use crate::egui_app::state::EvaluationTab;
use crate::egui_app::view_model::EvaluationView;

const DOMAIN_BAR_HEIGHT: f32 = 14.0;
const ERROR_BAR_HEIGHT: f32 = 10.0;

impl EguiApp {
    pub(super) fn render_evaluation(&mut self, ui: &mut Ui) {
        let view = match &self.controller.views().evaluation {
            Ok(view) => view.clone(),
            Err(err) => {
                widgets::section_heading(ui, "Evaluation Results", "", |_| {});
                widgets::view_error(ui, "Evaluation results", err);
                return;
            }
        };
        let mut export_clicked = false;
        widgets::section_heading(ui, "Evaluation Results", &view.subtitle, |ui| {
            export_clicked = ui.button("Export Results").clicked();
        });
        if export_clicked {
            self.controller.request_export("evaluation results");
        }

        widgets::stat_cards(ui, &view.cards);
        ui.add_space(12.0);
        render_comparison(ui, &view);
        ui.add_space(12.0);

        if let Some(tab) = widgets::tab_bar(ui, &self.controller.ui.evaluation) {
            self.controller.select_evaluation_tab(tab);
        }
        match self.controller.ui.evaluation.selected() {
            EvaluationTab::Domain => render_domains(ui, &view),
            EvaluationTab::Errors => render_errors(ui, &view),
            EvaluationTab::Examples => render_samples(ui, &view),
        }
    }
}

fn render_comparison(ui: &mut Ui, view: &EvaluationView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Model Comparison Summary", |ui| {
        egui::Grid::new("evaluation_comparison")
            .num_columns(6)
            .spacing([28.0, 10.0])
            .striped(true)
            .show(ui, |ui| {
                for header in ["Model", "WER (%)", "CER (%)", "BLEU", "Test Duration", "Status"] {
                    ui.label(RichText::new(header).color(palette.text_muted));
                }
                ui.end_row();
                for row in &view.rows {
                    ui.label(RichText::new(&row.model).strong());
                    widgets::badge(ui, &row.wer);
                    ui.label(&row.cer);
                    ui.label(&row.bleu);
                    ui.label(&row.duration);
                    widgets::badge(ui, &row.status);
                    ui.end_row();
                }
            });
    });
}

fn render_domains(ui: &mut Ui, view: &EvaluationView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Performance by Domain", |ui| {
        for domain in &view.domains {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&domain.domain).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(&domain.finetuned_label).color(palette.success));
                    ui.label(RichText::new(&domain.baseline_label).color(palette.text_muted));
                });
            });
            let half = (ui.available_width() - 8.0).max(0.0) / 2.0;
            ui.horizontal(|ui| {
                widgets::fill_bar(
                    ui,
                    domain.baseline_fraction,
                    half,
                    DOMAIN_BAR_HEIGHT,
                    palette.text_muted,
                );
                widgets::fill_bar(
                    ui,
                    domain.finetuned_fraction,
                    half,
                    DOMAIN_BAR_HEIGHT,
                    palette.accent_neural,
                );
            });
            ui.add_space(10.0);
        }
    });
}

fn render_errors(ui: &mut Ui, view: &EvaluationView) {
    let palette = style::palette();
    ui.columns(2, |columns| {
        widgets::titled_card(&mut columns[0], "Error Type Distribution", |ui| {
            for share in &view.error_shares {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&share.category).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&share.share_label).color(palette.text_muted));
                    });
                });
                let width = ui.available_width();
                widgets::fill_bar(
                    ui,
                    share.fraction,
                    width,
                    ERROR_BAR_HEIGHT,
                    style::bar_color(share.tone),
                );
                ui.add_space(8.0);
            }
        });
        widgets::titled_card(&mut columns[1], "Error Reduction by Type", |ui| {
            for reduction in &view.error_reductions {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&reduction.category).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        widgets::badge(ui, &reduction.badge);
                        ui.label(RichText::new(&reduction.counts).color(palette.text_muted));
                    });
                });
                ui.add_space(6.0);
            }
        });
    });
}

fn render_samples(ui: &mut Ui, view: &EvaluationView) {
    let palette = style::palette();
    widgets::titled_card(ui, "Sample Transcription Comparisons", |ui| {
        for (idx, sample) in view.samples.iter().enumerate() {
            ui.label(RichText::new(format!("Sample {}", idx + 1)).strong());
            for (label, text, color) in [
                ("Reference:", &sample.reference, palette.text_primary),
                ("Baseline:", &sample.baseline, palette.text_primary),
                ("Fine-tuned:", &sample.finetuned, palette.success),
            ] {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(label).strong().color(color));
                    ui.label(text);
                });
            }
            ui.add_space(12.0);
        }
    });
}
