//! Error taxonomy for the simulator.
//!
//! Only configuration can fail: once a run starts it progresses
//! deterministically to completion. Coincident bodies are a documented
//! numerical policy (zero mutual force and potential), not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("body {index} has non-positive mass {mass}")]
    NonPositiveMass { index: usize, mass: f64 },

    #[error("time step must be positive, got {dt}")]
    NonPositiveDt { dt: f64 },

    #[error("step count must be positive")]
    ZeroSteps,

    #[error("body set is empty")]
    EmptyBodySet,

    #[error("body {index}: position and velocity must each have exactly 2 components")]
    BadDimension { index: usize },

    #[error("bodies file line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
