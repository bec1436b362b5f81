use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub const BG_PANEL: Color32 = Color32::from_rgb(5, 5, 7);
pub const BG_OVERLAY: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
pub const BG_WIDGET: Color32 = Color32::from_rgb(15, 15, 20);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(25, 25, 35);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(168, 168, 171);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(107, 107, 112);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(220, 220, 225);

// matches the wireframe line color
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(230, 210, 40);
pub const ACCENT_RED: Color32 = Color32::from_rgb(200, 60, 60);

pub fn apply_theme(ctx: &egui::Context) {
    let mut style = Style::default();
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_rounding = Rounding::same(6.0);
    visuals.error_fg_color = ACCENT_RED;

    let widgets = &mut visuals.widgets;
    widgets.inactive.bg_fill = BG_WIDGET;
    widgets.inactive.weak_bg_fill = BG_WIDGET;
    widgets.inactive.rounding = Rounding::same(4.0);
    widgets.hovered.bg_fill = BG_WIDGET_HOVER;
    widgets.hovered.weak_bg_fill = BG_WIDGET_HOVER;
    widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_YELLOW);
    widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_BRIGHT);
    widgets.hovered.rounding = Rounding::same(4.0);
    widgets.active.bg_stroke = Stroke::new(2.0, ACCENT_YELLOW);
    widgets.active.fg_stroke = Stroke::new(1.0, TEXT_BRIGHT);
    widgets.active.rounding = Rounding::same(4.0);

    visuals.selection = egui::style::Selection {
        bg_fill: ACCENT_YELLOW.gamma_multiply(0.4),
        stroke: Stroke::new(1.0, ACCENT_YELLOW),
    };

    style.visuals = visuals;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
