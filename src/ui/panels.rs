use egui::{Color32, Context, RichText, Ui};

use crate::renderer::StripMode;
use crate::ui::state::{HudState, SurfaceInfo};
use crate::ui::theme::*;

#[derive(Default)]
pub struct HudActions {
    pub reset_view: bool,
    pub strip_mode: Option<StripMode>,
}

pub fn draw_hud(ctx: &Context, state: &mut HudState) -> HudActions {
    let mut actions = HudActions::default();

    egui::Area::new(egui::Id::new("surface_hud"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_OVERLAY)
                .rounding(6.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Elliptic Supertoroid").color(TEXT_BRIGHT).strong());
                    ui.add_space(8.0);

                    if let Some(info) = &state.surface {
                        surface_stats(ui, info);
                        ui.add_space(8.0);
                    }

                    section_header(ui, "POLYLINES");
                    for mode in [StripMode::Independent, StripMode::Continuous] {
                        if ui
                            .radio_value(&mut state.strip_mode, mode, mode.label())
                            .changed()
                        {
                            actions.strip_mode = Some(mode);
                        }
                    }
                    ui.add_space(8.0);

                    if ui.button("Reset view").clicked() {
                        actions.reset_view = true;
                    }
                });
        });

    actions
}

fn surface_stats(ui: &mut Ui, info: &SurfaceInfo) {
    section_header(ui, "SURFACE");
    ui.label(mono(format!(
        "a {:.2}  b {:.2}  c {:.2}  d {:.2}",
        info.shape.a(),
        info.shape.b(),
        info.shape.c(),
        info.shape.d()
    )));
    ui.label(mono(format!("grid {} x {}", info.u_segments, info.v_segments)));
    ui.label(mono(format!("t-polylines {} vertices", info.t_vertices)));
    ui.label(mono(format!("v-polylines {} vertices", info.v_vertices)));
}

pub fn draw_help_overlay(ctx: &Context, dragging: bool) {
    let hint = if dragging {
        "Rotating..."
    } else {
        "LMB+Drag - Rotate | R - Reset | H - Hide panel | Esc - Quit"
    };

    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(BG_OVERLAY)
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.label(mono(hint).color(TEXT_MUTED));
                });
        });
}

/// Replaces the drawing surface with a plain message after a failed setup.
pub fn draw_failure(ctx: &Context, message: &str) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(Color32::BLACK).inner_margin(24.0))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new(message).color(ACCENT_RED).size(15.0));
            });
        });
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn mono(text: impl Into<String>) -> RichText {
    RichText::new(text).monospace().size(12.0)
}
