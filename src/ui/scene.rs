//! The apparatus canvas: base, spring, mass, and the per-mode overlays.
//!
//! Geometry matches the physics module's scene constants one to one, so the
//! painted positions and the energy bookkeeping always agree.

use eframe::egui;
use glam::Vec2;

use crate::context::SimulationContext;
use crate::physics::{
    mass_center_y, mass_top_y, ANCHOR_X, ANCHOR_Y, MASS_SIZE, REST_LENGTH,
};
use crate::ui::{energy_chart, graph, DisplayMode};

/// Canvas size in scene units (one unit = one point).
pub const SCENE_SIZE: egui::Vec2 = egui::Vec2::new(700.0, 600.0);

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(129, 177, 214);
const BASE_FILL: egui::Color32 = egui::Color32::from_rgb(105, 105, 105);
const MASS_FILL: egui::Color32 = egui::Color32::from_rgb(200, 200, 200);
const SPRING_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(141, 141, 141, 200);
const VELOCITY_COLOR: egui::Color32 = egui::Color32::BLUE;
const ACCELERATION_COLOR: egui::Color32 = egui::Color32::RED;
const STOPPED_COLOR: egui::Color32 = egui::Color32::from_rgb(200, 50, 50);
const HINT_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 200, 0);
const DELTA_REST_COLOR: egui::Color32 = egui::Color32::from_rgb(139, 69, 19);
const DELTA_ARROW_COLOR: egui::Color32 = egui::Color32::from_rgb(128, 0, 128);

/// Minimum |velocity| / |acceleration| before the arrows draw.
const VELOCITY_ARROW_THRESHOLD: f32 = 0.25;
const ACCELERATION_ARROW_THRESHOLD: f32 = 0.05;
/// Scene units of arrow length per unit of velocity / acceleration.
const VELOCITY_ARROW_SCALE: f32 = 10.0;
const ACCELERATION_ARROW_SCALE: f32 = 100.0;

/// Paint the whole scene and return its rect for pointer hit-testing.
pub fn render_scene(
    ui: &mut egui::Ui,
    sim: &SimulationContext,
    mode: DisplayMode,
    hint_frames: u32,
) -> egui::Rect {
    let (rect, _response) = ui.allocate_exact_size(SCENE_SIZE, egui::Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, BACKGROUND);

    let equilibrium = sim.equilibrium();
    let offset = sim.state().offset;
    let mass_x = ANCHOR_X as f32;
    let mass_top = mass_top_y(offset, equilibrium) as f32;
    let mass_center = mass_center_y(offset, equilibrium) as f32;

    draw_base(&painter, rect);
    draw_spring(&painter, rect, mass_top);
    draw_mass(&painter, rect, mass_x, mass_center);

    if !sim.is_running() {
        painter.text(
            at(rect, Vec2::new(350.0, 550.0)),
            egui::Align2::CENTER_CENTER,
            "stopped",
            egui::FontId::proportional(30.0),
            STOPPED_COLOR,
        );
    }

    if hint_frames > 0 {
        let alpha = (hint_frames * 2).min(255) as u8;
        painter.circle_filled(
            at(rect, Vec2::new(mass_x, mass_center)),
            15.0,
            egui::Color32::from_rgba_unmultiplied(
                HINT_COLOR.r(),
                HINT_COLOR.g(),
                HINT_COLOR.b(),
                alpha,
            ),
        );
    }

    if mode != DisplayMode::Beginner {
        graph::draw_displacement_graph(&painter, rect, sim.history());
        draw_motion_arrows(&painter, rect, sim, mass_x, mass_center);
    }
    if mode == DisplayMode::Advanced {
        energy_chart::draw_energy_chart(
            &painter,
            rect,
            &sim.energies(),
            sim.energy().cumulative_heat(),
            sim.energy().reference_total(),
        );
        draw_displacement_arrow(&painter, rect, equilibrium as f32, mass_x, mass_top);
    }

    rect
}

/// Scene coordinates to screen position.
fn at(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(p.x, p.y)
}

fn scene_rect(rect: egui::Rect, top_left: Vec2, size: Vec2) -> egui::Rect {
    egui::Rect::from_min_size(at(rect, top_left), egui::vec2(size.x, size.y))
}

fn outlined_rect(painter: &egui::Painter, r: egui::Rect, fill: egui::Color32, stroke_width: f32) {
    painter.rect_filled(r, 0.0, fill);
    painter.rect_stroke(
        r,
        0.0,
        egui::Stroke::new(stroke_width, egui::Color32::BLACK),
        egui::StrokeKind::Middle,
    );
}

/// Fixed top block and stub the spring hangs from.
fn draw_base(painter: &egui::Painter, rect: egui::Rect) {
    let x = ANCHOR_X as f32;
    outlined_rect(
        painter,
        scene_rect(rect, Vec2::new(x - 50.0, 0.0), Vec2::new(100.0, 20.0)),
        BASE_FILL,
        2.0,
    );
    outlined_rect(
        painter,
        scene_rect(rect, Vec2::new(x - 10.0, 20.0), Vec2::new(20.0, 30.0)),
        BASE_FILL,
        2.0,
    );
    // Unstroked cover over the seam between the two.
    painter.rect_filled(
        scene_rect(rect, Vec2::new(x - 9.0, 13.0), Vec2::new(18.0, 30.0)),
        0.0,
        BASE_FILL,
    );
}

/// The spring as a translucent column from the anchor down to the mass.
fn draw_spring(painter: &egui::Painter, rect: egui::Rect, mass_top: f32) {
    let height = (mass_top - ANCHOR_Y as f32).clamp(30.0, 400.0);
    outlined_rect(
        painter,
        scene_rect(
            rect,
            Vec2::new(ANCHOR_X as f32 - 25.0, ANCHOR_Y as f32),
            Vec2::new(50.0, height),
        ),
        SPRING_FILL,
        2.0,
    );
}

/// Hook plus block.
fn draw_mass(painter: &egui::Painter, rect: egui::Rect, x: f32, center_y: f32) {
    painter.rect_filled(
        scene_rect(rect, Vec2::new(x - 5.0, center_y - 20.0), Vec2::new(10.0, 20.0)),
        0.0,
        egui::Color32::BLACK,
    );
    let size = MASS_SIZE as f32;
    outlined_rect(
        painter,
        scene_rect(rect, Vec2::new(x - size / 2.0, center_y), Vec2::new(size, size)),
        MASS_FILL,
        2.0,
    );
}

/// A vertical arrow: shaft, triangular head, label beside the tip.
fn vertical_arrow(
    painter: &egui::Painter,
    rect: egui::Rect,
    from: Vec2,
    length: f32,
    color: egui::Color32,
    label: &str,
) {
    let tip = from + Vec2::new(0.0, length);
    painter.line_segment(
        [at(rect, from), at(rect, tip)],
        egui::Stroke::new(3.0, color),
    );

    let head = 10.0 * length.signum();
    painter.add(egui::Shape::convex_polygon(
        vec![
            at(rect, tip + Vec2::new(-5.0, 0.0)),
            at(rect, tip + Vec2::new(5.0, 0.0)),
            at(rect, tip + Vec2::new(0.0, head)),
        ],
        color,
        egui::Stroke::NONE,
    ));

    painter.text(
        at(rect, tip + Vec2::new(10.0, 0.0)),
        egui::Align2::LEFT_CENTER,
        label,
        egui::FontId::proportional(14.0),
        color,
    );
}

/// Velocity (blue) and acceleration (red) vectors from the mass center.
fn draw_motion_arrows(
    painter: &egui::Painter,
    rect: egui::Rect,
    sim: &SimulationContext,
    x: f32,
    center_y: f32,
) {
    let origin = Vec2::new(x, center_y);
    let velocity = sim.state().velocity as f32;
    let acceleration = sim.acceleration() as f32;

    if velocity.abs() > VELOCITY_ARROW_THRESHOLD {
        vertical_arrow(
            painter,
            rect,
            origin,
            velocity * VELOCITY_ARROW_SCALE,
            VELOCITY_COLOR,
            "Velocity",
        );
    }
    if acceleration.abs() > ACCELERATION_ARROW_THRESHOLD {
        vertical_arrow(
            painter,
            rect,
            origin,
            acceleration * ACCELERATION_ARROW_SCALE,
            ACCELERATION_COLOR,
            "Acceleration",
        );
    }
}

/// Δx marker: the equilibrium rest line and an arrow down to the mass.
fn draw_displacement_arrow(
    painter: &egui::Painter,
    rect: egui::Rect,
    equilibrium: f32,
    x: f32,
    mass_top: f32,
) {
    let rest_y = (ANCHOR_Y + REST_LENGTH) as f32 + equilibrium;

    painter.line_segment(
        [
            at(rect, Vec2::new(x + 60.0, rest_y)),
            at(rect, Vec2::new(x + 100.0, rest_y)),
        ],
        egui::Stroke::new(2.0, DELTA_REST_COLOR),
    );
    painter.line_segment(
        [
            at(rect, Vec2::new(x + 80.0, rest_y)),
            at(rect, Vec2::new(x + 80.0, mass_top)),
        ],
        egui::Stroke::new(3.0, DELTA_ARROW_COLOR),
    );
    painter.text(
        at(rect, Vec2::new(x + 90.0, (rest_y + mass_top) / 2.0)),
        egui::Align2::LEFT_CENTER,
        "Δx",
        egui::FontId::proportional(14.0),
        DELTA_ARROW_COLOR,
    );
}
