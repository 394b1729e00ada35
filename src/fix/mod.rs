//! Position fix record and masked merging
use bitflags::bitflags;
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geodesic::{Solution, Solver};

mod update;
pub use update::FixUpdate;

/// Fix [Mode]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Mode update not seen yet: unknown.
    #[default]
    NotSeen,
    /// No fix
    NoFix,
    /// Two dimensional fix: no altitude
    Fix2D,
    /// Three dimensional fix
    Fix3D,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotSeen => write!(f, "not-seen"),
            Self::NoFix => write!(f, "no-fix"),
            Self::Fix2D => write!(f, "2D"),
            Self::Fix3D => write!(f, "3D"),
        }
    }
}

bitflags! {
    /// Field presence mask. Declares which groups of a candidate [Fix]
    /// are meaningful and should be merged. Latitude and longitude always
    /// travel together, so do both horizontal error components.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Fields: u16 {
        const TIME = 1 << 0;
        const LATLON = 1 << 1;
        const MODE = 1 << 2;
        const ALTITUDE = 1 << 3;
        const TRACK = 1 << 4;
        const SPEED = 1 << 5;
        const CLIMB = 1 << 6;
        const TIME_ERROR = 1 << 7;
        const HORIZONTAL_ERROR = 1 << 8;
        const VERTICAL_ERROR = 1 << 9;
        const SPEED_ERROR = 1 << 10;
    }
}

/// Best current knowledge of position, velocity and time.
/// Every field is either a valid measurement or unknown (`None`, or
/// [Mode::NotSeen]). A [Fix] is never partially reset: use [Fix::clear].
///
/// [Fix] does not provide any locking: wrap it in a lock when it may be
/// merged into from several threads.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fix {
    /// Unix seconds
    pub time: Option<f64>,
    /// Fix mode, [Mode::NotSeen] when unknown
    pub mode: Mode,
    /// Latitude in decimal degrees
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Altitude in meters
    pub altitude: Option<f64>,
    /// Course over ground, in degrees from true north
    pub track: Option<f64>,
    /// Speed over ground in m/s
    pub speed: Option<f64>,
    /// Vertical speed in m/s
    pub climb: Option<f64>,
    /// Time uncertainty in seconds
    pub time_error: Option<f64>,
    /// Longitude uncertainty in meters
    pub horizontal_error_x: Option<f64>,
    /// Latitude uncertainty in meters
    pub horizontal_error_y: Option<f64>,
    /// Vertical uncertainty in meters
    pub vertical_error: Option<f64>,
    /// Speed uncertainty in m/s
    pub speed_error: Option<f64>,
    /// Vertical speed uncertainty in m/s
    pub climb_error: Option<f64>,
    /// Track uncertainty in degrees
    pub track_error: Option<f64>,
}

impl Fix {
    /// Resets every field to unknown
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if both latitude and longitude are known
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Copies the groups selected by `fields` from `from`.
    /// Other groups are left untouched, whatever their value in `from`.
    /// Source values are not validated: unknown values are merged too.
    pub fn merge(&mut self, fields: Fields, from: &Fix) {
        trace!("merging {:?}", fields);

        if fields.contains(Fields::TIME) {
            self.time = from.time;
        }
        if fields.contains(Fields::LATLON) {
            self.latitude = from.latitude;
            self.longitude = from.longitude;
        }
        if fields.contains(Fields::MODE) {
            self.mode = from.mode;
        }
        if fields.contains(Fields::ALTITUDE) {
            self.altitude = from.altitude;
        }
        if fields.contains(Fields::TRACK) {
            self.track = from.track;
        }
        if fields.contains(Fields::SPEED) {
            self.speed = from.speed;
        }
        if fields.contains(Fields::CLIMB) {
            self.climb = from.climb;
        }
        if fields.contains(Fields::TIME_ERROR) {
            self.time_error = from.time_error;
        }
        if fields.contains(Fields::HORIZONTAL_ERROR) {
            self.horizontal_error_x = from.horizontal_error_x;
            self.horizontal_error_y = from.horizontal_error_y;
        }
        if fields.contains(Fields::VERTICAL_ERROR) {
            self.vertical_error = from.vertical_error;
        }
        if fields.contains(Fields::SPEED_ERROR) {
            self.speed_error = from.speed_error;
        }
    }

    /// Merges this [FixUpdate]
    pub fn apply(&mut self, update: &FixUpdate) {
        self.merge(update.fields(), update.fix());
    }

    /// Solves the geodesic from this [Fix] to `rhs`, with default [Solver].
    /// Returns None if either position is unknown.
    pub fn geodesic(&self, rhs: &Fix) -> Option<Solution> {
        let (lat1, lon1) = (self.latitude?, self.longitude?);
        let (lat2, lon2) = (rhs.latitude?, rhs.longitude?);
        Some(Solver::default().solve(lat1, lon1, lat2, lon2))
    }

    /// Ellipsoidal distance from this [Fix] to `rhs`, in meters.
    /// Returns None if either position is unknown, NaN if the solver did not converge.
    pub fn distance_to(&self, rhs: &Fix) -> Option<f64> {
        self.geodesic(rhs).map(|solution| solution.distance)
    }
}

/// [Fix::merge] for optional records: does nothing when either is missing.
pub fn merge_fix(to: Option<&mut Fix>, fields: Fields, from: Option<&Fix>) {
    if let (Some(to), Some(from)) = (to, from) {
        to.merge(fields, from);
    }
}
