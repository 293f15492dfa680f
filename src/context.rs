//! The simulation context: all mutable state of a session, driven tick by
//! tick from sampled input.
//!
//! Everything the sketch keeps as process globals lives here as one owned
//! record. Each tick processes, in order: reset, the run toggle, the
//! equilibrium recompute, then either one integrator step (running) or the
//! drag write (stopped). The integrator step and the drag write are mutually
//! exclusive by construction, gated on the running flag.

use crate::energy::{breakdown, EnergyAccount, EnergyBreakdown};
use crate::history::DisplacementHistory;
use crate::physics::{
    self, advance, equilibrium_offset, OscillatorState, Parameters, ANCHOR_Y, DRAG_MAX_Y,
    DRAG_MIN_Y, REST_LENGTH,
};

/// Input for one simulation tick, sampled once per frame by the host.
///
/// `run_toggle`, `reset`, and `drag_started` are edge events and only set on
/// the first tick of a frame; `dragging` and `pointer_y` are level state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Space was pressed this frame.
    pub run_toggle: bool,
    /// Reset was requested this frame (key or button).
    pub reset: bool,
    /// The pointer went down on the mass this frame (only produced while
    /// stopped).
    pub drag_started: bool,
    /// The pointer button is still held.
    pub dragging: bool,
    /// Pointer y in scene coordinates, read only while dragging.
    pub pointer_y: f64,
}

impl TickInput {
    /// The same input with the edge events consumed, for the catch-up ticks
    /// after the first one in a frame.
    pub fn edges_consumed(&self) -> Self {
        Self {
            run_toggle: false,
            reset: false,
            drag_started: false,
            ..*self
        }
    }
}

/// All state of one simulation session.
pub struct SimulationContext {
    /// Current slider values; the UI writes these, the core only reads.
    pub params: Parameters,
    state: OscillatorState,
    equilibrium: f64,
    energy: EnergyAccount,
    history: DisplacementHistory,
    running: bool,
    dragging: bool,
}

impl SimulationContext {
    /// A fresh session: default parameters, mass seated at equilibrium,
    /// stopped.
    pub fn new() -> Self {
        let params = Parameters::default();
        Self {
            equilibrium: equilibrium_offset(&params),
            params,
            state: OscillatorState::at_rest(),
            energy: EnergyAccount::new(),
            history: DisplacementHistory::new(),
            running: false,
            dragging: false,
        }
    }

    /// Reinitialize everything: default parameters, rest state, zeroed
    /// energy account, empty history, stopped.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self, input: &TickInput) {
        if input.reset {
            self.reset();
            return;
        }

        if input.run_toggle {
            if self.running {
                self.running = false;
                // Velocity is defined only while running.
                self.state.velocity = 0.0;
            } else {
                self.energy.start_run(&breakdown(&self.state, &self.params));
                self.running = true;
            }
        }

        // Recompute the sag every tick so slider motion shifts the rest line
        // immediately.
        self.equilibrium = equilibrium_offset(&self.params);

        if self.running {
            let step = advance(self.state, &self.params);
            self.energy.accumulate_heat(
                step.velocity_before_damping,
                step.state.velocity,
                self.params.mass,
            );
            self.state = step.state;
            self.history.push(self.state.offset);
        } else {
            if input.drag_started {
                self.dragging = true;
                self.history.clear();
            }
            if !input.dragging {
                self.dragging = false;
            }
            if self.dragging {
                let top = input.pointer_y.clamp(DRAG_MIN_Y, DRAG_MAX_Y);
                self.state.offset = top - (ANCHOR_Y + REST_LENGTH + self.equilibrium);
                self.state.velocity = 0.0;
            }
        }
    }

    pub fn state(&self) -> &OscillatorState {
        &self.state
    }

    /// Current static sag, scene units.
    pub fn equilibrium(&self) -> f64 {
        self.equilibrium
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn energy(&self) -> &EnergyAccount {
        &self.energy
    }

    pub fn history(&self) -> &DisplacementHistory {
        &self.history
    }

    /// Instantaneous energy breakdown for the current state.
    pub fn energies(&self) -> EnergyBreakdown {
        breakdown(&self.state, &self.params)
    }

    /// Instantaneous acceleration, for the vector overlay.
    pub fn acceleration(&self) -> f64 {
        physics::acceleration(&self.state, &self.params)
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new()
    }
}
