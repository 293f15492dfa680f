//! # Springlab
//!
//! Interactive educational visualization of a damped spring-mass oscillator.
//!
//! Sliders set the mass, spring stiffness, and damping; the canvas shows the
//! spring and hanging mass with velocity/acceleration vectors, a
//! displacement-time graph, and an energy bar chart. Space starts and stops
//! the simulation; while stopped the mass can be dragged to a new starting
//! position.
//!
//! ## Structure
//!
//! The semantic core is small and UI-free:
//!
//! - [`physics`] — oscillator state, parameters, and the fixed-step
//!   integrator (semi-implicit Euler with per-tick multiplicative damping).
//! - [`energy`] — instantaneous kinetic/elastic/gravitational breakdown and
//!   the run-scoped heat account.
//! - [`history`] — the bounded displacement ring behind the time plot.
//! - [`context`] — [`SimulationContext`], one owned record of all session
//!   state, advanced via [`SimulationContext::tick`].
//! - [`clock`] — converts wall time into whole 60 Hz ticks.
//!
//! The rest is the eframe host: [`app`] wires input sampling and layout,
//! [`ui`] holds the painted panels, [`config`] the JSON parameter presets.

pub mod app;
pub mod clock;
pub mod config;
pub mod context;
pub mod energy;
pub mod error;
pub mod history;
pub mod physics;
pub mod ui;

pub use app::SpringLabApp;
pub use clock::TickClock;
pub use config::SimConfig;
pub use context::{SimulationContext, TickInput};
pub use energy::{breakdown, EnergyAccount, EnergyBreakdown};
pub use error::ConfigError;
pub use history::DisplacementHistory;
pub use physics::{advance, equilibrium_offset, OscillatorState, Parameters, Step};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::clock::{TickClock, TICK_RATE};
    pub use crate::config::SimConfig;
    pub use crate::context::{SimulationContext, TickInput};
    pub use crate::energy::{breakdown, EnergyAccount, EnergyBreakdown};
    pub use crate::history::{DisplacementHistory, HISTORY_CAPACITY};
    pub use crate::physics::{
        advance, equilibrium_offset, OscillatorState, Parameters, Step,
    };
    pub use crate::ui::DisplayMode;
}
