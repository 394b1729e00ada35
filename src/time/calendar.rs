//! Broken-down UTC calendar dates
use hifitime::{Epoch, Unit, UNIX_REF_EPOCH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MONTHS_PER_YEAR: i64 = 12;

/// Cumulated number of days at the start of each month, in a common year
const CUMULATED_DAYS: [i64; MONTHS_PER_YEAR as usize] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Broken-down UTC date and time, proleptic Gregorian calendar.
/// Months are counted from zero (January = 0) while days are counted from one.
/// Months past December roll over into the following years.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    /// Full year (e.g. 2007)
    pub year: i32,
    /// Month of year, 0-based
    pub month: u32,
    /// Day of month, 1-based
    pub day: u32,
    /// Hour of day
    pub hour: u32,
    /// Minutes
    pub minute: u32,
    /// Seconds
    pub second: u32,
}

/// Proleptic Gregorian leap year rule
pub(crate) fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

impl CalendarDate {
    /// Builds a new [CalendarDate]. `month` is 0-based.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Converts this UTC [CalendarDate] to seconds since the Unix epoch.
    /// No leap second is accounted for. Dates prior 1970 return negative values.
    pub fn to_absolute_seconds(&self) -> i64 {
        let month = self.month as i64;
        let year = self.year as i64 + month / MONTHS_PER_YEAR;
        let month = month % MONTHS_PER_YEAR;

        let mut days = (year - 1970) * 365 + CUMULATED_DAYS[month as usize];

        // leap days up to and including this year.
        // Floor divisions keep the count exact prior 1968.
        days += (year - 1968).div_euclid(4);
        days -= (year - 1900).div_euclid(100);
        days += (year - 1600).div_euclid(400);

        // this year's leap day is not reached yet
        if is_leap_year(year) && month < 2 {
            days -= 1;
        }

        days += self.day as i64 - 1;

        let mut seconds = days * 24 + self.hour as i64;
        seconds = seconds * 60 + self.minute as i64;
        seconds * 60 + self.second as i64
    }

    /// Breaks down seconds since the Unix epoch into a UTC [CalendarDate].
    pub fn from_absolute_seconds(seconds: i64) -> Self {
        // integer duration: f64 nanoseconds are not exact past ±4.6E9 s
        let epoch = Epoch::from_utc_duration(UNIX_REF_EPOCH.to_utc_duration() + Unit::Second * seconds);
        Self::from(epoch)
    }
}

impl From<Epoch> for CalendarDate {
    /// Breaks down this [Epoch] in UTC. Sub-second precision is dropped.
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, hour, minute, second, _) = epoch.to_gregorian_utc();
        Self {
            year,
            month: month as u32 - 1,
            day: day as u32,
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        }
    }
}

impl std::fmt::Display for CalendarDate {
    /// Formats as `YYYY-MM-DDTHH:MM:SS`
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

#[cfg(test)]
mod test {
    use super::is_leap_year;

    #[test]
    fn leap_years() {
        for year in [1600, 1968, 1972, 2000, 2004, 2400, -4] {
            assert!(is_leap_year(year), "{} is a leap year", year);
        }
        for year in [1700, 1800, 1900, 1969, 2100, 2023, -1] {
            assert!(!is_leap_year(year), "{} is not a leap year", year);
        }
    }
}
