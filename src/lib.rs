pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::states::{Body, BodyInit, NVec2, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::{euler_step, verlet_step};
pub use simulation::energy::{kinetic_energy, measure, potential_energy, EnergySample};
pub use simulation::driver::{Simulation, SimulationResult};
pub use simulation::scenario::build_simulation;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
pub use configuration::loader::{load_bodies_csv, parse_bodies_csv};

pub use error::ConfigError;
