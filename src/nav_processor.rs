use crate::config::NavConfig;
use crate::geodesy::{self, Point};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One raw positioning sample as delivered by the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp_ms: i64,
    pub accuracy: Option<f64>,
    pub heading: Option<f64>,
    pub speed: Option<f64>,
}

impl Fix {
    pub fn new(latitude: f64, longitude: f64, timestamp_ms: i64) -> Self {
        Fix {
            latitude,
            longitude,
            timestamp_ms,
            accuracy: None,
            heading: None,
            speed: None,
        }
    }

    pub fn point(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            bail!(
                "non-finite coordinates: lat={}, lon={}",
                self.latitude,
                self.longitude
            );
        }
        if !self.point().is_valid() {
            bail!(
                "coordinates out of range: lat={}, lon={}",
                self.latitude,
                self.longitude
            );
        }
        for (name, value) in [
            ("accuracy", self.accuracy),
            ("heading", self.heading),
            ("speed", self.speed),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    bail!("non-finite {name}: {value}");
                }
            }
        }
        Ok(())
    }
}

#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum ValueSource {
    #[default]
    #[strum(serialize = "--")]
    None,
    #[strum(serialize = "GPS")]
    Device,
    #[strum(serialize = "CALC")]
    Derived,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub last_accepted_fix: Option<Fix>,
    /// Always within [0, 360).
    pub course_over_ground_deg: f64,
    /// Never negative.
    pub speed_over_ground_kn: f64,
    pub course_source: ValueSource,
    pub speed_source: ValueSource,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            last_accepted_fix: None,
            course_over_ground_deg: 0.0,
            speed_over_ground_kn: 0.0,
            course_source: ValueSource::None,
            speed_source: ValueSource::None,
        }
    }
}

impl NavigationState {
    /// Rotation to apply to the boat marker, clockwise from north.
    pub fn marker_rotation_deg(&self) -> f64 {
        self.course_over_ground_deg
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ProcessResult {
    // first fix of a session, nothing to compare against yet
    Bootstrap = 0,
    Accepted = 1,
    // negative values are for fixes that did not become the last accepted fix.
    TooSoon = -1,
    OutOfOrder = -2,
    Invalid = -3,
}

impl From<i8> for ProcessResult {
    fn from(i: i8) -> Self {
        match i {
            0 => ProcessResult::Bootstrap,
            1 => ProcessResult::Accepted,
            -1 => ProcessResult::TooSoon,
            -2 => ProcessResult::OutOfOrder,
            -3 => ProcessResult::Invalid,
            _ => panic!("invalid `ProcessResult`"),
        }
    }
}

impl ProcessResult {
    pub fn to_int(&self) -> i8 {
        *self as i8
    }

    pub fn is_accepted(&self) -> bool {
        self.to_int() >= 0
    }
}

/// Turns a stream of fixes into course and speed over ground.
///
/// Device reported heading/speed win over values derived from two
/// consecutive fixes. Derivation only happens once enough time has passed
/// since the last accepted fix and the boat moved far enough.
pub struct NavProcessor {
    config: NavConfig,
    state: NavigationState,
}

impl NavProcessor {
    pub fn new() -> Self {
        Self::with_config(NavConfig::default())
    }

    pub fn with_config(config: NavConfig) -> Self {
        NavProcessor {
            config,
            state: NavigationState::default(),
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn current_state(&self) -> &NavigationState {
        &self.state
    }

    pub fn last_accepted_fix(&self) -> Option<&Fix> {
        self.state.last_accepted_fix.as_ref()
    }

    pub fn reset(&mut self) {
        self.state = NavigationState::default();
    }

    /// Processes one fix and returns a snapshot of the updated state.
    pub fn ingest(&mut self, fix: &Fix) -> NavigationState {
        self.process(fix);
        self.state.clone()
    }

    pub fn process(&mut self, fix: &Fix) -> ProcessResult {
        if let Err(e) = fix.validate() {
            warn!("rejected fix: {e}");
            return ProcessResult::Invalid;
        }

        let state = &mut self.state;

        let device_course = fix.heading.is_some();
        if let Some(heading) = fix.heading {
            state.course_over_ground_deg = geodesy::normalize_degrees(heading);
            state.course_source = ValueSource::Device;
        }
        // a reported speed of 0 usually means "unknown", derive it instead
        let device_speed = match fix.speed {
            Some(speed) if speed > 0.0 => {
                state.speed_over_ground_kn = geodesy::meters_per_second_to_knots(speed);
                state.speed_source = ValueSource::Device;
                true
            }
            _ => false,
        };

        let Some((last_point, last_timestamp_ms)) = state
            .last_accepted_fix
            .as_ref()
            .map(|last_fix| (last_fix.point(), last_fix.timestamp_ms))
        else {
            state.last_accepted_fix = Some(fix.clone());
            return ProcessResult::Bootstrap;
        };

        // a gap too large for i64 is discarded like a backwards jump
        let time_diff_ms = match fix.timestamp_ms.checked_sub(last_timestamp_ms) {
            Some(diff) if diff > 0 => diff,
            _ => {
                debug!(
                    "discarding out of order fix: {} <= {}",
                    fix.timestamp_ms, last_timestamp_ms
                );
                return ProcessResult::OutOfOrder;
            }
        };
        if time_diff_ms < self.config.min_interval_ms {
            debug!("discarding fix {time_diff_ms}ms after the last accepted one");
            return ProcessResult::TooSoon;
        }

        let time_diff_s = time_diff_ms as f64 / 1000.0;
        let distance_m = last_point.haversine_distance(&fix.point());

        if distance_m > self.config.min_speed_distance_m && !device_speed {
            state.speed_over_ground_kn =
                geodesy::meters_per_second_to_knots(distance_m / time_diff_s);
            state.speed_source = ValueSource::Derived;
        }

        if distance_m > self.config.min_course_distance_m && !device_course {
            state.course_over_ground_deg = last_point.initial_bearing(&fix.point());
            state.course_source = ValueSource::Derived;
        }

        state.last_accepted_fix = Some(fix.clone());
        ProcessResult::Accepted
    }
}
