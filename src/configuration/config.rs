//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example two-body scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   dt: 0.001             # fixed step size
//!   steps: 10000          # number of integration steps
//!   G: 1.0                # gravitational constant
//!
//! bodies:
//!   - x: [ -0.5, 0.0 ]
//!     v: [  0.0, -0.5 ]
//!     m: 1.0
//!     name: alpha         # optional
//!   - x: [  0.5, 0.0 ]
//!     v: [  0.0, 0.5 ]
//!     m: 1.0
//! ```
//!
//! The engine maps this configuration into its internal runtime
//! representation; validation (positive masses, positive dt, non-empty
//! body set) happens there, not during deserialization.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size
    pub steps: u64, // number of integration steps
    pub G: f64,     // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>,          // initial position [x, y] in simulation units
    pub v: Vec<f64>,          // initial velocity [vx, vy]
    pub m: f64,               // mass of the body
    pub name: Option<String>, // optional label, carried through to the output
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // bodies that define the initial state of the system
}
