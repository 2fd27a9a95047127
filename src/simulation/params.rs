//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size `dt` and step count,
//! - the gravitational constant `G`
//!
//! The parameters are supplied by the caller (CLI or scenario file);
//! nothing here reads the environment or global configuration.

use crate::error::ConfigError;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // time step size
    pub steps: u64, // number of integration steps
    pub G: f64, // gravitational constant
}

impl Parameters {
    /// Reject non-positive `dt` or a zero step count before any stepping begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt > 0.0) {
            return Err(ConfigError::NonPositiveDt { dt: self.dt });
        }
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        Ok(())
    }
}
