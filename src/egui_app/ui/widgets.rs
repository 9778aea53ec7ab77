use eframe::egui::{
    self, Button, CornerRadius, Frame, Margin, RichText, Sense, Stroke, Ui, vec2,
};

use super::style;
use crate::egui_app::state::{Tab, TabState};
use crate::egui_app::view_model::{Badge, BadgeVariant, Fact, StatCard};
use crate::metrics::MetricError;

const CARD_RADIUS: u8 = 8;
const BAR_RADIUS: u8 = 3;

/// Bordered card surface.
pub(super) fn card<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    let palette = style::palette();
    Frame::new()
        .fill(palette.bg_card)
        .stroke(style::card_stroke())
        .corner_radius(CornerRadius::same(CARD_RADIUS))
        .inner_margin(Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub(super) fn titled_card<R>(
    ui: &mut Ui,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    card(ui, |ui| {
        ui.label(RichText::new(title).size(17.0).strong());
        ui.add_space(8.0);
        add_contents(ui)
    })
}

/// Section title with a muted subtitle, and optional right-aligned actions.
pub(super) fn section_heading(
    ui: &mut Ui,
    title: &str,
    subtitle: &str,
    actions: impl FnOnce(&mut Ui),
) {
    let palette = style::palette();
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(26.0).strong());
            ui.label(RichText::new(subtitle).color(palette.text_muted));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), actions);
    });
    ui.add_space(12.0);
}

pub(super) fn badge(ui: &mut Ui, badge: &Badge) {
    let (fill, text) = style::badge_colors(badge.variant);
    let stroke = if badge.variant == BadgeVariant::Outline {
        style::card_stroke()
    } else {
        Stroke::NONE
    };
    Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(&badge.label).size(12.0).strong().color(text));
        });
}

/// Button tinted like a badge of the same variant.
pub(super) fn action_button(label: &str, variant: BadgeVariant) -> Button<'_> {
    let (fill, text) = style::badge_colors(variant);
    Button::new(RichText::new(label).color(text)).fill(fill)
}

pub(super) fn stat_cards(ui: &mut Ui, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(cards) {
            stat_card(column, stat);
        }
    });
}

pub(super) fn stat_card(ui: &mut Ui, stat: &StatCard) {
    let palette = style::palette();
    card(ui, |ui| {
        ui.label(RichText::new(stat.title).size(13.0).strong());
        ui.label(RichText::new(&stat.value).size(24.0).strong());
        ui.label(RichText::new(&stat.caption).size(11.0).color(palette.text_muted));
    });
}

/// Row of tab buttons; returns the clicked tab when it differs from the selection.
pub(super) fn tab_bar<T: Tab>(ui: &mut Ui, state: &TabState<T>) -> Option<T> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for &tab in T::ALL {
            if ui.selectable_label(state.is_selected(tab), tab.label()).clicked()
                && !state.is_selected(tab)
            {
                clicked = Some(tab);
            }
        }
    });
    ui.add_space(8.0);
    clicked
}

/// Horizontal bar filled to `fraction` of `width`.
pub(super) fn fill_bar(ui: &mut Ui, fraction: f32, width: f32, height: f32, color: egui::Color32) {
    let palette = style::palette();
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());
    let radius = CornerRadius::same(BAR_RADIUS);
    ui.painter().rect_filled(rect, radius, palette.bg_muted);
    let mut filled = rect;
    filled.set_width(width * fraction.clamp(0.0, 1.0));
    ui.painter().rect_filled(filled, radius, color);
}

pub(super) fn fact_grid(ui: &mut Ui, id: &str, facts: &[Fact]) {
    let palette = style::palette();
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([48.0, 12.0])
        .show(ui, |ui| {
            for (idx, fact) in facts.iter().enumerate() {
                ui.vertical(|ui| {
                    ui.label(RichText::new(fact.label).size(13.0).color(palette.text_muted));
                    ui.label(RichText::new(&fact.value).size(20.0).strong());
                });
                if idx % 2 == 1 {
                    ui.end_row();
                }
            }
        });
}

/// Shown in place of a section whose records failed validation.
pub(super) fn view_error(ui: &mut Ui, section: &str, error: &MetricError) {
    let palette = style::palette();
    card(ui, |ui| {
        ui.label(
            RichText::new(format!("{section} unavailable"))
                .size(17.0)
                .strong()
                .color(palette.destructive),
        );
        ui.label(error.to_string());
    });
}
