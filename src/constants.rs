/// WGS84 Earth Frame Ellipsoid semi-major axis (meters)
pub const EARTH_SEMI_MAJOR_AXIS_WGS84: f64 = 6378137.0_f64;

/// WGS84 Earth Frame Ellipsoid semi-minor axis (meters)
pub const EARTH_SEMI_MINOR_AXIS_WGS84: f64 = 6356752.3142_f64;

/// WGS84 Earth Frame Ellipsoid inverse flattening (1/f)
pub const EARTH_INVERSE_FLATTENING_WGS84: f64 = 298.257223563_f64;

/// WGS84 Earth Frame Ellipsoid flattening
pub const EARTH_FLATTENING_WGS84: f64 = 1.0 / EARTH_INVERSE_FLATTENING_WGS84;

/// GPS epoch (1980-01-06T00:00:00 UTC), in Unix seconds
pub const GPS_EPOCH_UNIX_S: i64 = 315_964_800;

/// Seconds per GPS week
pub const SECONDS_PER_WEEK: i64 = 60 * 60 * 24 * 7;

/// Legacy GPS week counters are 10-bit wide
pub const GPS_ROLLOVER_WEEKS: i32 = 1024;

/// 10-bit week counter period, in seconds
pub const GPS_ROLLOVER_S: i64 = GPS_ROLLOVER_WEEKS as i64 * SECONDS_PER_WEEK;

/// Vincenty iteration cap. Bounds the CPU time spent on
/// (nearly) antipodal inputs, that may never converge.
pub const MAX_ITERATIONS: usize = 100;

/// Vincenty convergence threshold on the longitude update (radians)
pub const CONVERGENCE_THRESHOLD: f64 = 1.0E-12;
