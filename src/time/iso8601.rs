//! ISO-8601 UTC text representation, e.g. `2007-12-11T23:38:51.0Z`
use hifitime::Epoch;
use log::debug;
use std::str::FromStr;

use crate::{error::Error, time::calendar::CalendarDate};

/// `YYYY-MM-DDTHH:MM:SS`
const PREFIX_LEN: usize = 19;

/// Returns true if `prefix` matches the `YYYY-MM-DDTHH:MM:SS` pattern.
fn is_valid_prefix(prefix: &str) -> bool {
    prefix.len() == PREFIX_LEN
        && prefix.bytes().enumerate().all(|(i, c)| match i {
            4 | 7 => c == b'-',
            10 => c == b'T',
            13 | 16 => c == b':',
            _ => c.is_ascii_digit(),
        })
}

/// Parses the optional `.<digits>` suffix. Anything else is 0.
fn fractional_seconds(suffix: &str) -> f64 {
    let Some(digits) = suffix.strip_prefix('.') else {
        return 0.0;
    };

    let len = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if len == 0 {
        return 0.0;
    }

    format!("0.{}", &digits[..len]).parse::<f64>().unwrap_or(0.0)
}

/// Formats Unix seconds as an ISO-8601 UTC datetime with a single
/// fractional digit and a trailing `Z`: `2007-12-11T23:38:51.0Z`.
/// No timezone adjustment is performed.
/// The timestamp is rounded to the nearest tenth of a second first.
pub fn unix_to_iso8601(t: f64) -> Result<String, Error> {
    if !t.is_finite() {
        return Err(Error::InvalidTimestamp(t));
    }

    let tenths = (t * 10.0).round() as i64;
    let seconds = tenths.div_euclid(10);
    let fraction = tenths.rem_euclid(10);

    let date = CalendarDate::from_absolute_seconds(seconds);
    Ok(format!("{}.{}Z", date, fraction))
}

/// Parses an ISO-8601 UTC datetime into Unix seconds.
/// The `YYYY-MM-DDTHH:MM:SS` prefix is mandatory, it may be followed
/// by a `.<digits>` fraction of any length. Whatever follows (like the `Z` designator) is ignored.
/// A malformed fraction is interpreted as 0.
/// A leap second (`:60`) is not folded: it maps to the first second of the next minute.
pub fn iso8601_to_unix(isotime: &str) -> Result<f64, Error> {
    let invalid = || Error::InvalidIso8601(isotime.to_string());

    let prefix = isotime
        .get(..PREFIX_LEN)
        .filter(|prefix| is_valid_prefix(prefix))
        .ok_or_else(invalid)?;

    // leap second: validated as :59, then carried into the next minute
    let leap_second = prefix.ends_with(":60");

    let epoch = if leap_second {
        Epoch::from_str(&format!("{}59", &prefix[..PREFIX_LEN - 2]))
    } else {
        Epoch::from_str(prefix)
    }
    .map_err(|e| {
        debug!("\"{}\": calendar error: {}", isotime, e);
        invalid()
    })?;

    let mut date = CalendarDate::from(epoch);

    if leap_second {
        date.second = 60;
    }

    let seconds = date.to_absolute_seconds() as f64;
    Ok(seconds + fractional_seconds(&isotime[PREFIX_LEN..]))
}
