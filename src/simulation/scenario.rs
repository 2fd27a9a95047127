//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! bundle: numerical parameters (`Parameters`), system state (`System`
//! with bodies at t = 0), and the active force set (`ForceSet` with
//! Newtonian gravity registered).

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::ConfigError;
use crate::simulation::driver::Simulation;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyInit, NVec2, System};

fn body_init(index: usize, bc: &BodyConfig) -> Result<BodyInit, ConfigError> {
    if bc.x.len() != 2 || bc.v.len() != 2 {
        return Err(ConfigError::BadDimension { index });
    }
    Ok(BodyInit {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        name: bc.name.clone(),
    })
}

/// Build a ready-to-run [`Simulation`] from a scenario configuration,
/// optionally substituting the body list (e.g. bodies loaded from CSV).
///
/// All configuration errors (non-positive mass or dt, empty body set,
/// zero steps, wrong vector dimension) surface here, before stepping.
pub fn build_simulation(
    cfg: &ScenarioConfig,
    bodies_override: Option<Vec<BodyInit>>,
) -> Result<Simulation, ConfigError> {
    let initial = match bodies_override {
        Some(inits) => inits,
        None => cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| body_init(i, bc))
            .collect::<Result<Vec<_>, _>>()?,
    };

    // Initial system state: bodies at t = 0
    let system = System::new(initial)?;

    let parameters = Parameters {
        dt: cfg.parameters.dt,
        steps: cfg.parameters.steps,
        G: cfg.parameters.G,
    };

    // Forces: register direct Newtonian gravity
    let forces = ForceSet::new().with(NewtonianGravity { G: parameters.G });

    Simulation::new(system, forces, parameters)
}
