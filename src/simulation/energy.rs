//! Energy diagnostics for the N-body system
//!
//! Pure measurement of instantaneous kinetic, potential, and total
//! mechanical energy from the current body states. Long-run drift of
//! the total is the correctness signal for the integrator.

use crate::simulation::states::System;

/// One energy measurement at a point in simulation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    pub t: f64, // simulation time of the measurement
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64, // kinetic + potential
}

/// Total kinetic energy: sum over bodies of 0.5 * m * |v|^2.
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Total gravitational potential energy.
///
/// Sums `-G * m_i * m_j / r_ij` over each unordered pair exactly once.
/// Pairs at exactly zero separation contribute zero, matching the force
/// evaluator's singularity policy.
pub fn potential_energy(sys: &System, g: f64) -> f64 {
    let n = sys.bodies.len();
    let mut total = 0.0;

    for i in 0..n {
        for j in (i + 1)..n {
            let r = (sys.bodies[j].x - sys.bodies[i].x).norm();
            if r == 0.0 {
                continue;
            }
            total -= g * sys.bodies[i].m * sys.bodies[j].m / r;
        }
    }

    total
}

/// Measure kinetic, potential, and total energy at the system's current
/// time. Reads body state only, mutates nothing.
pub fn measure(sys: &System, g: f64) -> EnergySample {
    let kinetic = kinetic_energy(sys);
    let potential = potential_energy(sys, g);
    EnergySample {
        t: sys.t,
        kinetic,
        potential,
        total: kinetic + potential,
    }
}
