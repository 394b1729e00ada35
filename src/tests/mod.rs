mod cfg;
mod gps;

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

/// 2026-10-16T00:00:00 UTC
pub const REFERENCE_UNIX_S: f64 = 1_792_108_800.0;

/// 1999-08-22T00:00:00 UTC
pub const FIRST_ROLLOVER_UNIX_S: f64 = 935_280_000.0;

/// 2019-04-07T00:00:00 UTC
pub const SECOND_ROLLOVER_UNIX_S: f64 = 1_554_595_200.0;
