//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `BodyInit` — initial-state record handed in by an external loader
//! - `Body` — runtime state (position, velocity, force accumulator, mass, identity, history)
//! - `System` — ordered body list plus elapsed step count and time `t`
//!
//! Body identities are assigned from a local sequence when the system is
//! built, never from shared global state.

use nalgebra::Vector2;

use crate::error::ConfigError;

pub type NVec2 = Vector2<f64>;

/// Initial state for one body, as supplied by an external loader
/// (YAML scenario, CSV file, or constructed directly in tests).
#[derive(Debug, Clone)]
pub struct BodyInit {
    pub x: NVec2, // initial position
    pub v: NVec2, // initial velocity
    pub m: f64, // mass
    pub name: Option<String>, // optional label
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub force: NVec2, // net force accumulator, recomputed every step, never carried across steps
    pub m: f64, // mass, always > 0
    pub id: u32, // stable identity, assigned at system construction, immutable
    pub name: Option<String>, // optional label
    pub history: Vec<NVec2>, // past positions, append-only, one entry per completed step plus the initial one
}

impl Body {
    fn from_init(id: u32, init: BodyInit) -> Self {
        Self {
            x: init.x,
            v: init.v,
            force: NVec2::zeros(),
            m: init.m,
            id,
            name: init.name,
            history: Vec::new(),
        }
    }

    /// Current acceleration `force / m`.
    pub fn accel(&self) -> NVec2 {
        self.force / self.m
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // insertion order is the canonical iteration order
    pub t: f64, // time, always elapsed_steps * dt
    pub elapsed_steps: u64, // completed integration steps
}

impl System {
    /// Build a system from initial body records.
    ///
    /// Rejects an empty body set and any non-positive mass up front;
    /// ids are assigned 1, 2, ... in insertion order.
    pub fn new(initial: Vec<BodyInit>) -> Result<Self, ConfigError> {
        if initial.is_empty() {
            return Err(ConfigError::EmptyBodySet);
        }
        for (index, init) in initial.iter().enumerate() {
            if init.m <= 0.0 {
                return Err(ConfigError::NonPositiveMass { index, mass: init.m });
            }
        }

        let bodies = initial
            .into_iter()
            .enumerate()
            .map(|(i, init)| Body::from_init(i as u32 + 1, init))
            .collect();

        Ok(Self {
            bodies,
            t: 0.0,
            elapsed_steps: 0,
        })
    }
}
