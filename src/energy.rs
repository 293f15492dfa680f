//! Energy bookkeeping: instantaneous breakdown and the heat account.
//!
//! The breakdown is a pure function of state and parameters. The account
//! carries the run-scoped values: the total-energy reference snapshot taken
//! when a run starts, and the heat accumulated from damping since then.
//!
//! Elastic potential is returned unscaled; the bar chart applies its own
//! display factor.

use crate::physics::{
    equilibrium_offset, mass_center_y, OscillatorState, Parameters, ENERGY_REFERENCE_Y, GRAVITY,
    PIXELS_PER_METER,
};

/// Instantaneous mechanical energies, in joules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyBreakdown {
    /// Kinetic energy of the moving mass.
    pub kinetic: f64,
    /// Elastic potential stored in the spring, measured from its natural
    /// rest length.
    pub elastic: f64,
    /// Gravitational potential relative to the fixed reference line.
    pub gravitational: f64,
}

impl EnergyBreakdown {
    pub fn total(&self) -> f64 {
        self.kinetic + self.elastic + self.gravitational
    }
}

/// Compute the instantaneous energy breakdown.
///
/// The elastic stretch is the full extension past the natural rest length
/// (static sag plus the dynamic offset), converted to meters before
/// squaring. Gravitational height is measured upward from the reference
/// line using the same length scale.
pub fn breakdown(state: &OscillatorState, params: &Parameters) -> EnergyBreakdown {
    let equilibrium = equilibrium_offset(params);

    let kinetic = 0.5 * params.mass * state.velocity * state.velocity;

    let stretch_m = (equilibrium + state.offset) / PIXELS_PER_METER;
    let elastic = 0.5 * params.stiffness * stretch_m * stretch_m;

    let height_m = (ENERGY_REFERENCE_Y - mass_center_y(state.offset, equilibrium)) / PIXELS_PER_METER;
    let gravitational = params.mass * GRAVITY * height_m;

    EnergyBreakdown {
        kinetic,
        elastic,
        gravitational,
    }
}

/// Run-scoped energy account.
///
/// `reference_total` is the KE+PEe+PEg snapshot from the instant the
/// simulation last went from stopped to running; `cumulative_heat` is the
/// energy dissipated by damping since that instant. Both are zeroed by
/// [`EnergyAccount::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnergyAccount {
    reference_total: f64,
    cumulative_heat: f64,
}

impl EnergyAccount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the stopped-to-running transition: snapshot the reference
    /// total and restart the heat accumulator.
    pub fn start_run(&mut self, energies: &EnergyBreakdown) {
        self.reference_total = energies.total();
        self.cumulative_heat = 0.0;
    }

    /// Add this tick's damping loss.
    ///
    /// The delta is clamped to be non-negative before accumulation: damping
    /// never adds energy, and any negative artifact from floating point is
    /// discarded rather than subtracted.
    pub fn accumulate_heat(&mut self, velocity_before: f64, velocity_after: f64, mass: f64) {
        let delta =
            0.5 * mass * (velocity_before * velocity_before - velocity_after * velocity_after);
        self.cumulative_heat += delta.max(0.0);
    }

    /// Zero both the reference snapshot and the heat accumulator.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn reference_total(&self) -> f64 {
        self.reference_total
    }

    pub fn cumulative_heat(&self) -> f64 {
        self.cumulative_heat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_breakdown_at_rest() {
        let params = Parameters::default();
        let state = OscillatorState::at_rest();
        let e = breakdown(&state, &params);

        assert_eq!(e.kinetic, 0.0);
        // Sag is 30 px = 0.75 m; PEe = 0.5 * 0.1 * 0.75^2.
        assert!(approx(e.elastic, 0.5 * 0.1 * 0.75 * 0.75));
        // Center sits at 50 + 200 + 30 + 20 = 300; height = 200 px = 5 m.
        assert!(approx(e.gravitational, 5.0 * GRAVITY * 5.0));
        assert!(approx(e.total(), e.kinetic + e.elastic + e.gravitational));
    }

    #[test]
    fn test_kinetic_term() {
        let params = Parameters::default();
        let state = OscillatorState {
            offset: 0.0,
            velocity: 3.0,
        };
        let e = breakdown(&state, &params);
        assert!(approx(e.kinetic, 0.5 * 5.0 * 9.0));
    }

    #[test]
    fn test_heat_accumulation() {
        let mut account = EnergyAccount::new();
        // Matches the integrator's first step of the worked example.
        account.accumulate_heat(-2.0, -1.99, 5.0);
        assert!(approx(account.cumulative_heat(), 0.09975));

        // Monotone: a second loss only adds.
        account.accumulate_heat(-1.0, -0.9, 5.0);
        assert!(account.cumulative_heat() > 0.09975);
    }

    #[test]
    fn test_heat_never_negative() {
        let mut account = EnergyAccount::new();
        // Post-damping velocity larger in magnitude: delta would be
        // negative, must be discarded.
        account.accumulate_heat(1.0, 1.5, 5.0);
        assert_eq!(account.cumulative_heat(), 0.0);
    }

    #[test]
    fn test_start_run_and_reset() {
        let params = Parameters::default();
        let state = OscillatorState {
            offset: 100.0,
            velocity: 0.0,
        };
        let e = breakdown(&state, &params);

        let mut account = EnergyAccount::new();
        account.accumulate_heat(-2.0, -1.99, 5.0);
        account.start_run(&e);
        assert!(approx(account.reference_total(), e.total()));
        assert_eq!(account.cumulative_heat(), 0.0);

        account.accumulate_heat(-2.0, -1.99, 5.0);
        account.reset();
        assert_eq!(account.reference_total(), 0.0);
        assert_eq!(account.cumulative_heat(), 0.0);
    }
}
