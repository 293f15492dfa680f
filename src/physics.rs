//! The oscillator core: state, parameters, and the fixed-step integrator.
//!
//! The simulation advances in unit ticks (one tick = one 60 Hz frame).
//! Damping is modeled as a multiplicative velocity retention per tick rather
//! than a continuous drag term: a single parameter in (0, 1) that is
//! numerically stable over the whole slider range.
//!
//! All lengths are in scene units (one unit = one pixel of the rendered
//! scene); [`PIXELS_PER_METER`] converts to meters where real-world energies
//! are needed.

/// Scene-unit to meter conversion (40 px = 1 m).
pub const PIXELS_PER_METER: f64 = 40.0;

/// Real gravitational acceleration, used for gravitational potential energy.
pub const GRAVITY: f64 = 9.81;

/// Small "simulation gravity" in scene units used only for the static sag of
/// the spring under the hanging mass, sized so the equilibrium shift stays
/// reasonable over the slider ranges.
pub const SIM_GRAVITY: f64 = 0.6;

/// Floor applied to stiffness before dividing, so the equilibrium computation
/// can never divide by zero.
pub const STIFFNESS_FLOOR: f64 = 1e-4;

/// Upper bound on the static sag, in scene units.
pub const MAX_EQUILIBRIUM_STRETCH: f64 = 350.0;

// Scene geometry shared by the energy bookkeeping and the renderer.
pub const ANCHOR_X: f64 = 350.0;
pub const ANCHOR_Y: f64 = 50.0;
/// Natural (unstretched) spring length, scene units.
pub const REST_LENGTH: f64 = 200.0;
/// Side length of the square mass block.
pub const MASS_SIZE: f64 = 40.0;
/// Reference line for gravitational potential energy (height is measured
/// upward from here).
pub const ENERGY_REFERENCE_Y: f64 = 500.0;
/// The mass center never renders above this line.
pub const MIN_MASS_CENTER_Y: f64 = 100.0;
/// Vertical range the mass top edge may be dragged to.
pub const DRAG_MIN_Y: f64 = ANCHOR_Y + 40.0;
pub const DRAG_MAX_Y: f64 = 450.0;

/// Slider ranges for the physical parameters.
pub const MASS_RANGE: std::ops::RangeInclusive<f64> = 5.0..=15.0;
pub const STIFFNESS_RANGE: std::ops::RangeInclusive<f64> = 0.05..=0.1;
pub const DAMPING_RANGE: std::ops::RangeInclusive<f64> = 0.9..=0.999;

/// Physical parameters, read from the sliders each tick.
///
/// The core never mutates these and never validates them beyond the
/// stiffness floor; the sliders constrain them at the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Mass of the hanging block, kg.
    pub mass: f64,
    /// Spring constant, N/m.
    pub stiffness: f64,
    /// Per-tick velocity retention factor.
    pub damping: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            mass: 5.0,
            stiffness: 0.1,
            damping: 0.995,
        }
    }
}

impl Parameters {
    fn is_finite(&self) -> bool {
        self.mass.is_finite() && self.stiffness.is_finite() && self.damping.is_finite()
    }
}

/// Instantaneous state of the oscillating mass.
///
/// `offset` is the displacement from the equilibrium rest line (positive =
/// below it); `velocity` is its rate of change per tick. While the simulation
/// is stopped, `velocity` is held at zero and `offset` may be written by
/// dragging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OscillatorState {
    pub offset: f64,
    pub velocity: f64,
}

impl OscillatorState {
    /// The rest configuration: seated on the equilibrium line, not moving.
    pub fn at_rest() -> Self {
        Self::default()
    }

    fn is_finite(&self) -> bool {
        self.offset.is_finite() && self.velocity.is_finite()
    }
}

/// Result of one integrator step.
///
/// Carries the pre-damping velocity alongside the new state so the energy
/// tracker can account for the damping loss of this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: OscillatorState,
    pub velocity_before_damping: f64,
}

/// Static sag of the spring under the hanging mass, in scene units.
///
/// Recomputed every tick so slider changes take effect immediately. The
/// stiffness denominator is floored and the result clamped to
/// `[0, MAX_EQUILIBRIUM_STRETCH]`.
pub fn equilibrium_offset(params: &Parameters) -> f64 {
    let stretch = params.mass * SIM_GRAVITY / params.stiffness.max(STIFFNESS_FLOOR);
    stretch.clamp(0.0, MAX_EQUILIBRIUM_STRETCH)
}

/// Advance the oscillator by one unit tick.
///
/// Semi-implicit Euler with the stretch measured relative to the equilibrium
/// line: the restoring force is Hooke's law about the sagged rest position,
/// acceleration is applied for one tick, damping multiplies the velocity, and
/// the damped velocity moves the offset.
///
/// Non-finite inputs freeze the step: the prior state is returned unchanged
/// (with `velocity_before_damping` equal to the prior velocity, so no heat
/// accrues) rather than letting a NaN reach the renderer.
pub fn advance(state: OscillatorState, params: &Parameters) -> Step {
    if !state.is_finite() || !params.is_finite() {
        return Step {
            state,
            velocity_before_damping: state.velocity,
        };
    }

    let force = -params.stiffness * state.offset;
    let acceleration = force / params.mass;
    let velocity_before_damping = state.velocity + acceleration;
    let velocity = velocity_before_damping * params.damping;

    Step {
        state: OscillatorState {
            offset: state.offset + velocity,
            velocity,
        },
        velocity_before_damping,
    }
}

/// Instantaneous acceleration for the current state, used by the vector
/// overlay. Same expression the integrator uses.
pub fn acceleration(state: &OscillatorState, params: &Parameters) -> f64 {
    -params.stiffness * state.offset / params.mass
}

/// Scene-space y of the mass block's top edge.
pub fn mass_top_y(offset: f64, equilibrium: f64) -> f64 {
    ANCHOR_Y + REST_LENGTH + equilibrium + offset
}

/// Scene-space y of the mass block's center, floored at
/// [`MIN_MASS_CENTER_Y`].
pub fn mass_center_y(offset: f64, equilibrium: f64) -> f64 {
    (mass_top_y(offset, equilibrium) + MASS_SIZE / 2.0).max(MIN_MASS_CENTER_Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_step_worked_example() {
        // m=5, k=0.1, damping=0.995, offset=100, v=0:
        // acc = -0.1*100/5 = -2, v_before = -2, v_after = -1.99,
        // offset' = 98.01.
        let params = Parameters {
            mass: 5.0,
            stiffness: 0.1,
            damping: 0.995,
        };
        let state = OscillatorState {
            offset: 100.0,
            velocity: 0.0,
        };

        let step = advance(state, &params);
        assert!(approx(step.velocity_before_damping, -2.0));
        assert!(approx(step.state.velocity, -1.99));
        assert!(approx(step.state.offset, 98.01));
    }

    #[test]
    fn test_damped_run_decays_to_rest() {
        let params = Parameters {
            mass: 10.0,
            stiffness: 0.08,
            damping: 0.99,
        };
        let mut state = OscillatorState {
            offset: 100.0,
            velocity: 0.0,
        };

        for _ in 0..5000 {
            state = advance(state, &params).state;
        }

        assert!(state.velocity.abs() < 1e-3);
        assert!(state.offset.abs() < 1e-1);
    }

    #[test]
    fn test_undamped_run_keeps_energy_bounded() {
        // damping = 1 is outside the slider range but must not dissipate:
        // the pre- and post-damping velocities coincide and the mechanical
        // energy only wobbles within the integrator's bounded error.
        let params = Parameters {
            mass: 5.0,
            stiffness: 0.1,
            damping: 1.0,
        };
        let mut state = OscillatorState {
            offset: 100.0,
            velocity: 0.0,
        };
        let energy = |s: &OscillatorState| {
            0.5 * params.mass * s.velocity * s.velocity
                + 0.5 * params.stiffness * s.offset * s.offset
        };
        let initial = energy(&state);

        for _ in 0..10_000 {
            let step = advance(state, &params);
            assert_eq!(step.velocity_before_damping, step.state.velocity);
            state = step.state;
            let e = energy(&state);
            assert!((e - initial).abs() / initial < 0.2, "energy drifted: {e}");
        }
    }

    #[test]
    fn test_equilibrium_offset() {
        let params = Parameters::default();
        // 5 * 0.6 / 0.1 = 30
        assert!(approx(equilibrium_offset(&params), 30.0));

        // Near-zero stiffness hits the floor and then the clamp.
        let degenerate = Parameters {
            stiffness: 0.0,
            ..Parameters::default()
        };
        assert_eq!(equilibrium_offset(&degenerate), MAX_EQUILIBRIUM_STRETCH);
    }

    #[test]
    fn test_non_finite_input_freezes() {
        let params = Parameters::default();
        let state = OscillatorState {
            offset: f64::NAN,
            velocity: 1.0,
        };
        let step = advance(state, &params);
        assert!(step.state.offset.is_nan());
        assert_eq!(step.state.velocity, 1.0);
        assert_eq!(step.velocity_before_damping, 1.0);

        let bad_params = Parameters {
            mass: f64::INFINITY,
            ..Parameters::default()
        };
        let ok_state = OscillatorState {
            offset: 50.0,
            velocity: 2.0,
        };
        let step = advance(ok_state, &bad_params);
        assert_eq!(step.state, ok_state);
    }

    #[test]
    fn test_mass_center_floor() {
        // Way above the scene: the displayed center clamps at the floor.
        assert_eq!(mass_center_y(-1000.0, 0.0), MIN_MASS_CENTER_Y);
        // Normal position: top + half the block.
        assert!(approx(mass_center_y(0.0, 30.0), 50.0 + 200.0 + 30.0 + 20.0));
    }
}
