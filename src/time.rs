//! Time representations: Unix seconds, UTC calendar dates,
//! ISO-8601 text and GPS week / time of week.
use hifitime::Epoch;
use log::error;

mod calendar;
mod gps;
mod iso8601;

pub use calendar::CalendarDate;
pub use gps::{Clock, GpsTime, SystemClock};
pub use iso8601::{iso8601_to_unix, unix_to_iso8601};

/// Returns the current wall clock time in Unix seconds,
/// with sub-second resolution. Returns NaN if the system clock
/// cannot be read.
pub fn timestamp() -> f64 {
    match Epoch::now() {
        Ok(now) => now.to_unix_seconds(),
        Err(e) => {
            error!("failed to read system clock: {}", e);
            f64::NAN
        },
    }
}
