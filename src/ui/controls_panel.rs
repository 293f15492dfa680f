//! Side panel with the parameter sliders and the display-mode selector.

use eframe::egui;

use crate::physics::{Parameters, DAMPING_RANGE, MASS_RANGE, STIFFNESS_RANGE};
use crate::ui::DisplayMode;

pub fn render_controls_panel(ui: &mut egui::Ui, params: &mut Parameters, mode: &mut DisplayMode) {
    ui.heading("Parameters");

    ui.add(
        egui::Slider::new(&mut params.mass, MASS_RANGE)
            .step_by(0.1)
            .text("Mass (kg)"),
    );
    ui.add(
        egui::Slider::new(&mut params.stiffness, STIFFNESS_RANGE)
            .step_by(0.01)
            .text("k (N/m)"),
    );
    ui.add(
        egui::Slider::new(&mut params.damping, DAMPING_RANGE)
            .step_by(0.001)
            .text("Damping"),
    );

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Display Mode");

    ui.horizontal_wrapped(|ui| {
        for candidate in [
            DisplayMode::Beginner,
            DisplayMode::Intermediate,
            DisplayMode::Advanced,
        ] {
            ui.selectable_value(mode, candidate, candidate.label());
        }
    });

    ui.add_space(8.0);
    ui.separator();

    ui.label("Press SPACE to start/stop");
    ui.label("Drag the weight to set initial position");
    ui.label(
        egui::RichText::new("Velocity and acceleration arrows appear in Intermediate; the energy chart in Advanced.")
            .small()
            .weak(),
    );
}
