use crate::{
    constants::{GPS_ROLLOVER_S, SECONDS_PER_WEEK},
    prelude::{Clock, GpsTime},
    tests::{init_logger, FIRST_ROLLOVER_UNIX_S, REFERENCE_UNIX_S, SECOND_ROLLOVER_UNIX_S},
};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use rstest::*;

struct FixedClock(f64);

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

#[rstest]
#[case(GpsTime::new(0, 0.0), 315_964_800.0)]
#[case(GpsTime::new(1024, 0.0), FIRST_ROLLOVER_UNIX_S)]
#[case(GpsTime::new(2048, 0.0), SECOND_ROLLOVER_UNIX_S)]
#[case(GpsTime::new(2000, 345_600.5), 1_525_910_400.5)]
fn extended_weeks(#[case] gpst: GpsTime, #[case] expected: f64) {
    if gpst.is_truncated() {
        assert_eq!(gpst.to_unix_at(FIRST_ROLLOVER_UNIX_S - 1.0), expected);
    } else {
        assert_eq!(gpst.to_unix(), expected);
        // extended weeks never depend on the reference
        assert_eq!(gpst.to_unix_at(0.0), expected);
        assert_eq!(gpst.to_unix_with(&FixedClock(f64::NAN)), expected);
    }
}

#[test]
fn truncated_weeks_anchored_on_reference() {
    init_logger();

    let gpst = GpsTime::new(100, 3_600.0);
    let expected = SECOND_ROLLOVER_UNIX_S + 100.0 * SECONDS_PER_WEEK as f64 + 3_600.0;

    assert_eq!(gpst.to_unix_at(REFERENCE_UNIX_S), expected);
    assert_eq!(gpst.to_unix_with(&FixedClock(REFERENCE_UNIX_S)), expected);

    // same week, seen from the previous rollover period
    let expected = FIRST_ROLLOVER_UNIX_S + 100.0 * SECONDS_PER_WEEK as f64 + 3_600.0;
    assert_eq!(gpst.to_unix_at(SECOND_ROLLOVER_UNIX_S - 1.0), expected);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
#[case(-1.0E19)]
fn invalid_reference_anchors_on_gps_epoch(#[case] reference: f64) {
    init_logger();

    let gpst = GpsTime::new(100, 0.0);
    let expected = 315_964_800.0 + 100.0 * SECONDS_PER_WEEK as f64;

    assert_eq!(gpst.to_unix_at(reference), expected);
    assert_eq!(gpst.to_unix_with(&FixedClock(reference)), expected);
}

#[test]
fn truncated_weeks_with_system_clock() {
    let gpst = GpsTime::new(1023, 0.5);
    let t = gpst.to_unix();

    assert!(t >= SECOND_ROLLOVER_UNIX_S, "anchored on an outdated rollover");

    let recovered = GpsTime::from_unix(t);
    assert_eq!(recovered.truncated(), gpst);
}

#[test]
fn rolled_over_week_resolves_one_period_early() {
    // receiver runs past the second rollover (week 2049 = truncated 1),
    // while the reference still lags just before it
    let actual = GpsTime::new(2049, 7_200.0);
    let truncated = actual.truncated();
    assert_eq!(truncated, GpsTime::new(1, 7_200.0));

    let resolved = truncated.to_unix_at(SECOND_ROLLOVER_UNIX_S - 3_600.0);
    assert_eq!(resolved, actual.to_unix() - GPS_ROLLOVER_S as f64);

    // a reference past the rollover resolves correctly
    let resolved = truncated.to_unix_at(SECOND_ROLLOVER_UNIX_S + 3.0 * SECONDS_PER_WEEK as f64);
    assert_eq!(resolved, actual.to_unix());
}

#[test]
fn truncation() {
    assert!(GpsTime::new(1023, 0.0).is_truncated());
    assert!(!GpsTime::new(1024, 0.0).is_truncated());
    assert_eq!(GpsTime::new(1024, 1.0).truncated(), GpsTime::new(0, 1.0));
    assert_eq!(GpsTime::new(2345, 2.0).truncated(), GpsTime::new(297, 2.0));
    assert_eq!(GpsTime::new(512, 3.0).truncated(), GpsTime::new(512, 3.0));
}

#[test]
fn from_unix() {
    assert_eq!(GpsTime::from_unix(315_964_800.0), GpsTime::new(0, 0.0));
    assert_eq!(
        GpsTime::from_unix(1_525_910_400.5),
        GpsTime::new(2000, 345_600.5)
    );

    // prior the GPS epoch: time of week keeps the sign
    assert_eq!(GpsTime::from_unix(315_964_790.0), GpsTime::new(0, -10.0));
}

#[test]
fn extended_round_trip() {
    let mut rng = SmallRng::seed_from_u64(1024);

    for _ in 0..10_000 {
        let week = rng.random_range(1024..4096);
        let tow = rng.random_range(0.0..604_800.0);

        let gpst = GpsTime::new(week, tow);
        let recovered = GpsTime::from_unix(gpst.to_unix());

        assert_eq!(recovered.week, week);
        assert!((recovered.tow - tow).abs() < 1E-6, "{} != {}", recovered.tow, tow);
    }
}

#[test]
fn truncated_round_trip() {
    let mut rng = SmallRng::seed_from_u64(10);

    for _ in 0..1_000 {
        let week = rng.random_range(0..1024);
        let tow = rng.random_range(0.0..604_800.0);

        let gpst = GpsTime::new(week, tow);
        let recovered = GpsTime::from_unix(gpst.to_unix_at(REFERENCE_UNIX_S));

        // recovered week is complete: may differ by whole rollovers
        assert_eq!(recovered.week, week + 2048);
        assert!((recovered.tow - tow).abs() < 1E-6);
    }
}
