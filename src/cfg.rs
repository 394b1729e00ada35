#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{CONVERGENCE_THRESHOLD, MAX_ITERATIONS};

fn default_max_iterations() -> usize {
    MAX_ITERATIONS
}

fn default_convergence_threshold() -> f64 {
    CONVERGENCE_THRESHOLD
}

/// Geodesic [Solver](crate::prelude::Solver) configuration.
/// Both parameters trade answer quality for bounded latency:
/// the defaults match the reference Vincenty implementation.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximal number of longitude refinements.
    /// Solving attempts that did not converge within this budget
    /// return a NaN distance.
    #[cfg_attr(feature = "serde", serde(default = "default_max_iterations"))]
    pub max_iterations: usize,
    /// Convergence criterion on the longitude update, in radians.
    #[cfg_attr(feature = "serde", serde(default = "default_convergence_threshold"))]
    pub convergence_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            convergence_threshold: default_convergence_threshold(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated iteration budget
    pub fn with_max_iterations(&self, max_iterations: usize) -> Self {
        let mut s = *self;
        s.max_iterations = max_iterations;
        s
    }

    /// Copies and returns [Config] with updated convergence threshold (radians)
    pub fn with_convergence_threshold(&self, threshold: f64) -> Self {
        let mut s = *self;
        s.convergence_threshold = threshold;
        s
    }
}
