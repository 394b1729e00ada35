use crate::fix::{Fields, Fix, Mode};

/// [FixUpdate] gathers the fields a report actually carries.
/// Each setter marks its group as present, so that merging
/// only overwrites what was set.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FixUpdate {
    fields: Fields,
    fix: Fix,
}

impl FixUpdate {
    /// Builds a [FixUpdate] from a candidate [Fix] and its presence mask,
    /// as produced by report decoders.
    pub fn new(fields: Fields, fix: Fix) -> Self {
        Self { fields, fix }
    }

    /// Groups this update will overwrite
    pub fn fields(&self) -> Fields {
        self.fields
    }

    /// Candidate values
    pub fn fix(&self) -> &Fix {
        &self.fix
    }

    /// Returns true if this update does not carry anything
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn with(&self, fields: Fields, set: impl FnOnce(&mut Fix)) -> Self {
        let mut s = *self;
        s.fields |= fields;
        set(&mut s.fix);
        s
    }

    /// Copies and returns [FixUpdate] with time (Unix seconds)
    pub fn with_time(&self, t: f64) -> Self {
        self.with(Fields::TIME, |fix| fix.time = Some(t))
    }

    /// Copies and returns [FixUpdate] with position in decimal degrees
    pub fn with_position(&self, latitude: f64, longitude: f64) -> Self {
        self.with(Fields::LATLON, |fix| {
            fix.latitude = Some(latitude);
            fix.longitude = Some(longitude);
        })
    }

    /// Copies and returns [FixUpdate] with fix [Mode]
    pub fn with_mode(&self, mode: Mode) -> Self {
        self.with(Fields::MODE, |fix| fix.mode = mode)
    }

    /// Copies and returns [FixUpdate] with altitude (m)
    pub fn with_altitude(&self, altitude: f64) -> Self {
        self.with(Fields::ALTITUDE, |fix| fix.altitude = Some(altitude))
    }

    /// Copies and returns [FixUpdate] with track (degrees from true north)
    pub fn with_track(&self, track: f64) -> Self {
        self.with(Fields::TRACK, |fix| fix.track = Some(track))
    }

    /// Copies and returns [FixUpdate] with speed over ground (m/s)
    pub fn with_speed(&self, speed: f64) -> Self {
        self.with(Fields::SPEED, |fix| fix.speed = Some(speed))
    }

    /// Copies and returns [FixUpdate] with vertical speed (m/s)
    pub fn with_climb(&self, climb: f64) -> Self {
        self.with(Fields::CLIMB, |fix| fix.climb = Some(climb))
    }

    /// Copies and returns [FixUpdate] with time uncertainty (s)
    pub fn with_time_error(&self, error: f64) -> Self {
        self.with(Fields::TIME_ERROR, |fix| fix.time_error = Some(error))
    }

    /// Copies and returns [FixUpdate] with both horizontal uncertainties (m)
    pub fn with_horizontal_error(&self, x: f64, y: f64) -> Self {
        self.with(Fields::HORIZONTAL_ERROR, |fix| {
            fix.horizontal_error_x = Some(x);
            fix.horizontal_error_y = Some(y);
        })
    }

    /// Copies and returns [FixUpdate] with vertical uncertainty (m)
    pub fn with_vertical_error(&self, error: f64) -> Self {
        self.with(Fields::VERTICAL_ERROR, |fix| fix.vertical_error = Some(error))
    }

    /// Copies and returns [FixUpdate] with speed uncertainty (m/s)
    pub fn with_speed_error(&self, error: f64) -> Self {
        self.with(Fields::SPEED_ERROR, |fix| fix.speed_error = Some(error))
    }

    /// Copies and returns [FixUpdate] that will reset these groups to unknown
    pub fn invalidate(&self, fields: Fields) -> Self {
        self.with(fields, |fix| fix.merge(fields, &Fix::default()))
    }
}
