//! Vincenty's inverse geodesic on the WGS84 ellipsoid:
//! ellipsoidal distance and azimuths between two geodetic points.
#![allow(clippy::many_single_char_names)]

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    cfg::Config,
    constants::{EARTH_FLATTENING_WGS84, EARTH_SEMI_MAJOR_AXIS_WGS84, EARTH_SEMI_MINOR_AXIS_WGS84},
};

/// Geodesic [Solution]
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Ellipsoidal distance in meters.
    /// NaN when the solver did not converge: always check [Solution::is_valid].
    pub distance: f64,
    /// Initial azimuth from true north, in radians within [-π, π].
    /// None for coincident points, when the solver did not converge, or was not requested.
    pub initial_bearing: Option<f64>,
    /// Final azimuth from true north, in radians within [-π, π].
    pub final_bearing: Option<f64>,
}

/// Converts an azimuth in radians to compass degrees, within [0, 360[
fn compass_degrees(azimuth: f64) -> f64 {
    azimuth.to_degrees().rem_euclid(360.0)
}

impl Solution {
    fn coincident() -> Self {
        Self {
            distance: 0.0,
            initial_bearing: None,
            final_bearing: None,
        }
    }

    fn diverged() -> Self {
        Self {
            distance: f64::NAN,
            initial_bearing: None,
            final_bearing: None,
        }
    }

    /// Returns false when the solver did not converge
    pub fn is_valid(&self) -> bool {
        !self.distance.is_nan()
    }

    /// Initial bearing in compass degrees [0, 360[
    pub fn initial_bearing_deg(&self) -> Option<f64> {
        self.initial_bearing.map(compass_degrees)
    }

    /// Final bearing in compass degrees [0, 360[
    pub fn final_bearing_deg(&self) -> Option<f64> {
        self.final_bearing.map(compass_degrees)
    }
}

/// Vincenty inverse geodesic [Solver].
/// Iterates on the longitude difference over the auxiliary sphere
/// until it converges, or the iteration budget is exhausted.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Solver {
    cfg: Config,
}

impl Solver {
    /// Builds a new [Solver] from this [Config]
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Solves the geodesic between two points given in decimal degrees.
    /// Returns the distance in meters with initial and final bearings.
    pub fn solve(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Solution {
        self.inverse(lat1, lon1, lat2, lon2, true)
    }

    /// Ellipsoidal distance in meters between two points given in decimal degrees.
    /// NaN if the solver did not converge.
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        self.inverse(lat1, lon1, lat2, lon2, false).distance
    }

    fn inverse(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64, bearings: bool) -> Solution {
        let a = EARTH_SEMI_MAJOR_AXIS_WGS84;
        let b = EARTH_SEMI_MINOR_AXIS_WGS84;
        let f = EARTH_FLATTENING_WGS84;

        let l = (lon2 - lon1).to_radians();

        // reduced latitudes
        let u1 = ((1.0 - f) * lat1.to_radians().tan()).atan();
        let u2 = ((1.0 - f) * lat2.to_radians().tan()).atan();

        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;

        for ith in 0..self.cfg.max_iterations {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let sin_sigma = ((cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
                + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                    * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda))
                .sqrt();

            if sin_sigma == 0.0 {
                return Solution::coincident();
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;

            let mut cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;

            // equatorial line: cos²α = 0
            if cos_2sigma_m.is_nan() {
                cos_2sigma_m = 0.0;
            }

            let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

            let previous = lambda;

            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (2.0 * cos_2sigma_m * cos_2sigma_m - 1.0)));

            let dlambda = (lambda - previous).abs();
            trace!("(i={}) lambda={} |dlambda|={:e}", ith, lambda, dlambda);

            if dlambda > self.cfg.convergence_threshold {
                continue;
            }

            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);

            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));

            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            let distance = b * big_a * (sigma - delta_sigma);

            if !bearings {
                return Solution {
                    distance,
                    initial_bearing: None,
                    final_bearing: None,
                };
            }

            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let initial_bearing =
                (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

            let final_bearing =
                (cos_u1 * sin_lambda).atan2(cos_u1 * sin_u2 * cos_lambda - sin_u1 * cos_u2);

            return Solution {
                distance,
                initial_bearing: Some(initial_bearing),
                final_bearing: Some(final_bearing),
            };
        }

        debug!(
            "({}, {}) -> ({}, {}): no convergence after {} iterations",
            lat1, lon1, lat2, lon2, self.cfg.max_iterations
        );

        Solution::diverged()
    }
}

/// Distance in meters between two points given in decimal degrees,
/// using the default [Solver]. NaN if the solver did not converge.
pub fn earth_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    Solver::default().distance(lat1, lon1, lat2, lon2)
}

/// Distance in meters and bearings in radians between two points given in decimal degrees,
/// using the default [Solver].
pub fn earth_distance_and_bearings(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Solution {
    Solver::default().solve(lat1, lon1, lat2, lon2)
}
