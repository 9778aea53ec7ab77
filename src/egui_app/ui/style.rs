use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::dashboard::{LogLevel, Tone};
use crate::egui_app::view_model::{BadgeVariant, BarTone};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_card: Color32,
    pub bg_muted: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_neural: Color32,
    pub info: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub destructive: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(11, 13, 18),
        bg_secondary: Color32::from_rgb(17, 20, 27),
        bg_card: Color32::from_rgb(24, 28, 37),
        bg_muted: Color32::from_rgb(38, 43, 55),
        panel_outline: Color32::from_rgb(46, 52, 66),
        text_primary: Color32::from_rgb(226, 230, 238),
        text_muted: Color32::from_rgb(140, 148, 163),
        accent_neural: Color32::from_rgb(139, 92, 246),
        info: Color32::from_rgb(56, 189, 248),
        warning: Color32::from_rgb(245, 158, 11),
        success: Color32::from_rgb(34, 197, 94),
        destructive: Color32::from_rgb(239, 68, 68),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_card;
    visuals.warn_fg_color = palette.warning;
    visuals.error_fg_color = palette.destructive;
    visuals.selection.bg_fill = palette.accent_neural;
    visuals.selection.stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.noninteractive.bg_fill = palette.bg_card;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_muted;
    vis.weak_bg_fill = palette.bg_muted;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_stroke() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Fill and text colours for a badge.
pub fn badge_colors(variant: BadgeVariant) -> (Color32, Color32) {
    let palette = palette();
    match variant {
        BadgeVariant::Default => (palette.accent_neural, Color32::WHITE),
        BadgeVariant::Secondary => (palette.bg_muted, palette.text_primary),
        BadgeVariant::Success => (palette.success, Color32::BLACK),
        BadgeVariant::Warning => (palette.warning, Color32::BLACK),
        BadgeVariant::Outline => (Color32::TRANSPARENT, palette.text_primary),
        BadgeVariant::Destructive => (palette.destructive, Color32::WHITE),
    }
}

pub fn tone_color(tone: Tone) -> Color32 {
    let palette = palette();
    match tone {
        Tone::Success => palette.success,
        Tone::Info => palette.info,
        Tone::Warning => palette.warning,
        Tone::Destructive => palette.destructive,
    }
}

pub fn bar_color(tone: BarTone) -> Color32 {
    let palette = palette();
    match tone {
        BarTone::Primary => palette.accent_neural,
        BarTone::Success => palette.success,
        BarTone::Warning => palette.warning,
    }
}

pub fn log_color(level: LogLevel) -> Color32 {
    let palette = palette();
    match level {
        LogLevel::Progress => palette.success,
        LogLevel::Info => palette.text_muted,
        LogLevel::Checkpoint => palette.info,
        LogLevel::Warning => palette.warning,
    }
}
