//! Force contributors for the n-body engine
//!
//! Defines the [`Force`] trait and [`ForceSet`], plus direct pairwise
//! Newtonian gravity. Forces are accumulated into each body's `force`
//! field in place; nothing here touches positions or velocities.

use crate::simulation::states::{NVec2, System};

/// Collection of force terms (gravity, and whatever else gets added).
/// Each term implements [`Force`] and their contributions are summed
/// into every body's `force` accumulator.
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute net forces for all bodies in `sys`.
    ///
    /// Every body's `force` is zeroed first, then each term adds its
    /// contribution, so afterwards `force` holds the net sum at the
    /// positions currently in `sys`.
    pub fn accumulate_forces(&self, sys: &mut System) {
        for b in sys.bodies.iter_mut() {
            b.force = NVec2::zeros();
        }
        for term in &self.terms {
            term.add_forces(sys);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`].
/// Implementations add their contribution into each body's `force` field.
pub trait Force {
    fn add_forces(&self, sys: &mut System);
}

/// Direct pairwise Newtonian gravity, exact O(n^2) summation.
///
/// Coincident bodies (`r == 0`, exact float equality) contribute zero
/// mutual force. That is the documented singularity policy: no epsilon
/// softening, since softening changes the physics the conservation
/// tests check against.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn add_forces(&self, sys: &mut System) {
        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j. The pair
        // contribution is equal in magnitude and opposite in direction,
        // so it is computed once and applied to both bodies.
        for i in 0..n {
            let xi = sys.bodies[i].x;
            let mi = sys.bodies[i].m;

            for j in (i + 1)..n {
                let xj = sys.bodies[j].x;
                let mj = sys.bodies[j].m;

                // Displacement from i to j: i is pulled along +r, j along -r
                let r_vec = xj - xi;
                let r2 = r_vec.dot(&r_vec);
                if r2 == 0.0 {
                    // Coincident positions: skip the pair entirely
                    continue;
                }

                let r = r2.sqrt();

                // F = G * m_i * m_j / r^2 along the unit vector r_vec / r,
                // folded into a single coefficient G * m_i * m_j / r^3
                let coef = self.G * mi * mj / (r2 * r);

                sys.bodies[i].force += coef * r_vec;
                sys.bodies[j].force -= coef * r_vec;
            }
        }
    }
}
