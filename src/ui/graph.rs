//! Displacement-vs-time plot over the bounded history.

use eframe::egui;
use glam::Vec2;

use crate::history::{DisplacementHistory, HISTORY_CAPACITY};

/// Scene-space position of the plot origin (bottom-left corner of the axes).
const ORIGIN: Vec2 = Vec2::new(430.0, 490.0);
/// Plot area: 250 wide (one full history), 100 tall.
const WIDTH: f32 = 250.0;
const HEIGHT: f32 = 100.0;
/// Displacement range mapped onto the vertical axis, scene units.
const DISPLACEMENT_SPAN: f32 = 200.0;

const AXIS_COLOR: egui::Color32 = egui::Color32::BLACK;
const CURVE_COLOR: egui::Color32 = egui::Color32::BLUE;

pub(crate) fn draw_displacement_graph(
    painter: &egui::Painter,
    rect: egui::Rect,
    history: &DisplacementHistory,
) {
    let at = |p: Vec2| rect.min + egui::vec2(ORIGIN.x + p.x, ORIGIN.y + p.y);
    let axis_stroke = egui::Stroke::new(0.5, AXIS_COLOR);

    // Axes.
    painter.line_segment([at(Vec2::ZERO), at(Vec2::new(0.0, -HEIGHT))], axis_stroke);
    painter.line_segment([at(Vec2::ZERO), at(Vec2::new(WIDTH, 0.0))], axis_stroke);

    // Vertical ticks, labeled from -200 at the top to +200 at the bottom
    // (positive displacement is downward).
    let mut y = -HEIGHT;
    while y <= 0.0 {
        painter.line_segment([at(Vec2::new(-5.0, y)), at(Vec2::new(5.0, y))], axis_stroke);
        let value = y / HEIGHT * 2.0 * DISPLACEMENT_SPAN + DISPLACEMENT_SPAN;
        painter.text(
            at(Vec2::new(-30.0, y)),
            egui::Align2::LEFT_CENTER,
            format!("{}", value.round() as i32),
            egui::FontId::proportional(11.0),
            AXIS_COLOR,
        );
        y += 25.0;
    }

    // The curve, oldest sample at the left edge.
    let points: Vec<egui::Pos2> = history
        .iter()
        .enumerate()
        .map(|(i, offset)| {
            let x = i as f32 / HISTORY_CAPACITY as f32 * WIDTH;
            let clamped = (offset as f32).clamp(-DISPLACEMENT_SPAN, DISPLACEMENT_SPAN);
            let y = (clamped + DISPLACEMENT_SPAN) * (HEIGHT / (2.0 * DISPLACEMENT_SPAN)) - HEIGHT;
            at(Vec2::new(x, y))
        })
        .collect();
    if points.len() > 1 {
        painter.add(egui::Shape::line(points, egui::Stroke::new(1.0, CURVE_COLOR)));
    }

    // Labels.
    painter.text(
        at(Vec2::new(70.0, -HEIGHT - 10.0)),
        egui::Align2::LEFT_BOTTOM,
        "Displacement vs Time",
        egui::FontId::proportional(11.0),
        AXIS_COLOR,
    );
    painter.text(
        at(Vec2::new(100.0, 30.0)),
        egui::Align2::LEFT_BOTTOM,
        "Time (frames)",
        egui::FontId::proportional(11.0),
        AXIS_COLOR,
    );

    // Rotated vertical-axis label.
    let galley = painter.layout_no_wrap(
        "Displacement (px)".to_owned(),
        egui::FontId::proportional(11.0),
        AXIS_COLOR,
    );
    let mut shape = egui::epaint::TextShape::new(at(Vec2::new(-40.0, -10.0)), galley, AXIS_COLOR);
    shape.angle = -std::f32::consts::FRAC_PI_2;
    painter.add(shape);
}
