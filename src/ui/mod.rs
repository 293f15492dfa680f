//! UI modules: the controls panel and the painted canvas views.

mod controls_panel;
mod energy_chart;
mod graph;
mod scene;

pub use controls_panel::render_controls_panel;
pub use scene::{render_scene, SCENE_SIZE};

/// How much of the instrumentation is drawn.
///
/// Beginner shows just the apparatus; Intermediate adds the displacement
/// graph and motion vectors; Advanced adds the energy chart and the Δx
/// arrow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Beginner => "Beginner",
            DisplayMode::Intermediate => "Intermediate",
            DisplayMode::Advanced => "Advanced",
        }
    }
}
