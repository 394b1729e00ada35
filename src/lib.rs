#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod error;
mod fix;
mod geodesic;
mod time;

pub mod constants;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::error::Error;
    pub use crate::fix::{merge_fix, Fields, Fix, FixUpdate, Mode};
    pub use crate::geodesic::{earth_distance, earth_distance_and_bearings, Solution, Solver};
    pub use crate::time::{
        iso8601_to_unix, timestamp, unix_to_iso8601, CalendarDate, Clock, GpsTime, SystemClock,
    };
    // re-export
    pub use hifitime::Epoch;
}

// pub export
pub use error::Error;
