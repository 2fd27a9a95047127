//! Simulation driver
//!
//! Owns the system, the force set, and the run parameters; orchestrates
//! the per-step cycle (integrate, measure energy, record history) and
//! bundles the outcome into a [`SimulationResult`].

use log::{debug, info};

use crate::error::ConfigError;
use crate::simulation::energy::{self, EnergySample};
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Outcome of a completed run: the final system (each body carrying its
/// full position history) and the energy time series. Both histories
/// have exactly `steps + 1` entries, the extra one being the initial
/// state before any stepping.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub system: System,
    pub energy_history: Vec<EnergySample>,
}

impl SimulationResult {
    /// Relative drift of total energy: |E_final - E_0| / |E_0|.
    pub fn relative_energy_drift(&self) -> f64 {
        let first = self.energy_history.first().map(|e| e.total).unwrap_or(0.0);
        let last = self.energy_history.last().map(|e| e.total).unwrap_or(0.0);
        if first.abs() > 0.0 {
            (last - first).abs() / first.abs()
        } else {
            (last - first).abs()
        }
    }
}

/// A fully configured run: validated parameters, the body system, and
/// the active force set. The driver exclusively owns all body state for
/// the run's duration.
pub struct Simulation {
    pub system: System,
    pub forces: ForceSet,
    pub parameters: Parameters,
}

impl Simulation {
    /// Bundle a system with forces and parameters, rejecting invalid
    /// parameters before any stepping can begin.
    pub fn new(
        system: System,
        forces: ForceSet,
        parameters: Parameters,
    ) -> Result<Self, ConfigError> {
        parameters.validate()?;
        Ok(Self {
            system,
            forces,
            parameters,
        })
    }

    /// Run the simulation to completion.
    ///
    /// Records the initial energy triple and positions first, then for
    /// each step: velocity-Verlet advance, energy measurement, position
    /// history append. Deterministic: identical inputs give bit-for-bit
    /// identical output.
    pub fn run(mut self) -> SimulationResult {
        let Parameters { dt, steps, G: g } = self.parameters;

        info!(
            "starting run: {} bodies, dt={}, steps={}, G={}",
            self.system.bodies.len(),
            dt,
            steps,
            g
        );

        // Prime forces at the initial positions so the first Verlet step
        // has a valid a_n, and record the step-0 state.
        self.forces.accumulate_forces(&mut self.system);

        let mut energy_history = Vec::with_capacity(steps as usize + 1);
        energy_history.push(energy::measure(&self.system, g));
        for b in self.system.bodies.iter_mut() {
            b.history.push(b.x);
        }

        for step in 1..=steps {
            verlet_step(&mut self.system, &self.forces, dt);
            energy_history.push(energy::measure(&self.system, g));
            for b in self.system.bodies.iter_mut() {
                b.history.push(b.x);
            }

            if step % 1000 == 0 {
                debug!(
                    "step {step}/{steps}: t={:.6}, E={:.9}",
                    self.system.t,
                    energy_history.last().map(|e| e.total).unwrap_or(0.0)
                );
            }
        }

        let result = SimulationResult {
            system: self.system,
            energy_history,
        };
        info!(
            "run complete: t={:.6}, relative energy drift {:.3e}",
            result.system.t,
            result.relative_energy_drift()
        );
        result
    }
}
