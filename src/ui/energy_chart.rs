//! Energy bar chart: kinetic, gravitational, elastic, heat, and the
//! reference total from the start of the run.

use eframe::egui;
use glam::Vec2;

use crate::energy::EnergyBreakdown;

/// Scene-space position of the chart (top of the axis).
const ORIGIN: Vec2 = Vec2::new(50.0, 210.0);
const BAR_WIDTH: f32 = 30.0;
const MAX_BAR_HEIGHT: f32 = 330.0;
/// Full-scale energy for the axis, joules.
const MAX_ENERGY: f32 = 3000.0;
const TICK_STEP: f32 = 250.0;

/// Display-only multiplier for the elastic bar. The stored elastic energy is
/// tiny next to the others at this scene scale; this keeps the bar readable
/// on the shared axis. It is not part of the physics and the core never
/// applies it.
const ELASTIC_DISPLAY_SCALE: f32 = 200.0;

const KINETIC_COLOR: egui::Color32 = egui::Color32::RED;
const GRAVITATIONAL_COLOR: egui::Color32 = egui::Color32::BLUE;
const ELASTIC_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 128, 0);
const HEAT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 165, 0);
const TOTAL_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);
const AXIS_COLOR: egui::Color32 = egui::Color32::BLACK;

pub(crate) fn draw_energy_chart(
    painter: &egui::Painter,
    rect: egui::Rect,
    energies: &EnergyBreakdown,
    heat: f64,
    reference_total: f64,
) {
    let at = |p: Vec2| rect.min + egui::vec2(ORIGIN.x + p.x, ORIGIN.y + p.y);
    let scale = MAX_BAR_HEIGHT / MAX_ENERGY;

    let bar = |x: f32, value: f32, color: egui::Color32, label: &str| {
        let height = (value * scale).clamp(0.0, MAX_BAR_HEIGHT);
        painter.rect_filled(
            egui::Rect::from_min_size(
                at(Vec2::new(x, MAX_BAR_HEIGHT - height)),
                egui::vec2(BAR_WIDTH, height),
            ),
            0.0,
            color,
        );
        painter.text(
            at(Vec2::new(x + 3.0, MAX_BAR_HEIGHT + 15.0)),
            egui::Align2::LEFT_BOTTOM,
            label,
            egui::FontId::proportional(12.0),
            AXIS_COLOR,
        );
    };

    bar(0.0, energies.kinetic as f32, KINETIC_COLOR, "KE");
    bar(60.0, energies.gravitational as f32, GRAVITATIONAL_COLOR, "PE(grav)");
    bar(
        120.0,
        energies.elastic as f32 * ELASTIC_DISPLAY_SCALE,
        ELASTIC_COLOR,
        "PE(elas)",
    );
    bar(180.0, heat as f32, HEAT_COLOR, "Heat");
    bar(240.0, reference_total as f32, TOTAL_COLOR, "Total");

    // Axis with tick marks every 250 J.
    let axis_stroke = egui::Stroke::new(1.0, AXIS_COLOR);
    painter.line_segment(
        [at(Vec2::new(-20.0, 0.0)), at(Vec2::new(-20.0, MAX_BAR_HEIGHT))],
        axis_stroke,
    );
    let mut value = 0.0;
    while value <= MAX_ENERGY {
        let y = MAX_BAR_HEIGHT - value * scale;
        painter.line_segment(
            [at(Vec2::new(-25.0, y)), at(Vec2::new(-15.0, y))],
            axis_stroke,
        );
        painter.text(
            at(Vec2::new(-45.0, y)),
            egui::Align2::RIGHT_CENTER,
            format!("{}", value as i32),
            egui::FontId::proportional(10.0),
            AXIS_COLOR,
        );
        value += TICK_STEP;
    }
}
