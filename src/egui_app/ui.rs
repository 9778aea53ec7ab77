//! egui renderer for the research dashboard.

mod dataset_panel;
mod evaluation_panel;
pub mod style;
mod training_panel;
mod widgets;

use eframe::egui::{self, Align, Frame, Layout, Margin, RichText, ScrollArea, Sense, vec2};

use crate::egui_app::controller::DashboardController;
use crate::egui_app::state::Section;
use crate::egui_app::view_model;

/// Minimum window size that keeps the four-card rows readable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);
/// Window and header title.
pub const APP_TITLE: &str = "Hindi ASR Research Dashboard";

/// Renders the dashboard from the controller's view models.
pub struct EguiApp {
    controller: DashboardController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: DashboardController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        let (indicator, variant) = view_model::header_indicator(self.controller.training_status());
        let (dot_color, _) = style::badge_colors(variant);
        egui::TopBottomPanel::top("header")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::card_stroke())
                    .inner_margin(Margin::symmetric(24, 12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(APP_TITLE).size(20.0).strong());
                        ui.label(
                            RichText::new("Whisper Fine-tuning & Evaluation Platform")
                                .size(11.0)
                                .color(palette.text_muted),
                        );
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(indicator).color(palette.text_muted));
                        let (rect, _) = ui.allocate_exact_size(vec2(8.0, 8.0), Sense::hover());
                        ui.painter().circle_filled(rect.center(), 4.0, dot_color);
                    });
                });
            });
    }

    fn render_notice(&mut self, ui: &mut egui::Ui) {
        let Some(notice) = self.controller.notice().map(str::to_owned) else {
            return;
        };
        let palette = style::palette();
        let mut dismissed = false;
        widgets::card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(notice).color(palette.warning));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    dismissed = ui.button("Dismiss").clicked();
                });
            });
        });
        if dismissed {
            self.controller.dismiss_notice();
        }
        ui.add_space(12.0);
    }

    fn render_body(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(Frame::new().inner_margin(Margin::symmetric(24, 16)))
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.render_notice(ui);
                        if let Some(section) = widgets::tab_bar(ui, &self.controller.ui.section) {
                            self.controller.select_section(section);
                        }
                        ui.add_space(8.0);
                        match self.controller.ui.section.selected() {
                            Section::Dataset => self.render_dataset(ui),
                            Section::Training => self.render_training(ui),
                            Section::Evaluation => self.render_evaluation(ui),
                        }
                    });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_header(ctx);
        self.render_body(ctx);
    }
}
