//! Fixed-step time integrators for the N-body system
//!
//! Provides velocity-Verlet (the production integrator) and a plain
//! explicit-Euler step kept only as a known-inferior comparison path.
//! Both advance positions, velocities, and `sys.t` in-place and are
//! driven by a [`ForceSet`].

use super::forces::ForceSet;
use super::states::{NVec2, System};

/// Advance the system by one step of velocity-Verlet.
///
/// Expects every body's `force` to already hold the net force at the
/// current positions (the driver primes it before the first step; each
/// step leaves it fresh for the next). The update runs in whole-set
/// phases so no body ever sees a partially updated position:
///
/// 1. record `a_n = force / m` for every body,
/// 2. `x_n+1 = x_n + v_n * dt + 0.5 * a_n * dt^2` for every body,
/// 3. recompute all forces at the new positions,
/// 4. `v_n+1 = v_n + 0.5 * (a_n + a_n+1) * dt` for every body.
///
/// Velocity-Verlet is symplectic: long-run total-energy error stays a
/// bounded oscillation instead of a secular drift.
pub fn verlet_step(sys: &mut System, forces: &ForceSet, dt: f64) {
    let n = sys.bodies.len();
    let half_dt = 0.5 * dt;

    // a_n from the forces already on the bodies
    let mut a_old = vec![NVec2::zeros(); n];
    for (a, b) in a_old.iter_mut().zip(sys.bodies.iter()) {
        *a = b.accel();
    }

    // Drift: x_n+1 = x_n + v_n dt + 1/2 a_n dt^2
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.x += dt * b.v + half_dt * dt * *a;
    }

    // a_n+1 at the new positions
    forces.accumulate_forces(sys);

    // Kick: v_n+1 = v_n + 1/2 (a_n + a_n+1) dt
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * (*a + b.accel());
    }

    sys.elapsed_steps += 1;
    sys.t = sys.elapsed_steps as f64 * dt;
}

/// Advance the system by one step of plain explicit Euler.
///
/// Not symplectic: total energy drifts secularly with step count, so
/// this is rejected for production runs and kept only for comparison
/// against [`verlet_step`]. Same force-priming contract as Verlet.
pub fn euler_step(sys: &mut System, forces: &ForceSet, dt: f64) {
    let n = sys.bodies.len();

    let mut a = vec![NVec2::zeros(); n];
    for (ai, b) in a.iter_mut().zip(sys.bodies.iter()) {
        *ai = b.accel();
    }

    // x_n+1 = x_n + v_n dt, then v_n+1 = v_n + a_n dt
    for (b, ai) in sys.bodies.iter_mut().zip(a.iter()) {
        b.x += dt * b.v;
        b.v += dt * *ai;
    }

    // Leave forces fresh at the new positions for the next step
    forces.accumulate_forces(sys);

    sys.elapsed_steps += 1;
    sys.t = sys.elapsed_steps as f64 * dt;
}
