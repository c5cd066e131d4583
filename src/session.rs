use crate::config::NavConfig;
use crate::geodesy::Point;
use crate::nav_processor::{Fix, NavProcessor, NavigationState, ProcessResult, ValueSource};
use crate::pin::{self, Pin, RangeBearing};
use crate::track_buffer::TrackBuffer;
use crate::utils;

/// Anything that hands out fixes one at a time, e.g. a platform location
/// watch or a recorded track.
pub trait FixSource {
    fn next_fix(&mut self) -> Option<Fix>;
}

impl<I: Iterator<Item = Fix>> FixSource for I {
    fn next_fix(&mut self) -> Option<Fix> {
        self.next()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum SignalQuality {
    #[strum(serialize = "Alta")]
    High,
    #[strum(serialize = "Media")]
    Medium,
}

/// Everything the instrument panel shows, already formatted.
#[derive(Clone, Debug, PartialEq)]
pub struct InstrumentReadout {
    pub cog_label: String,
    pub sog_label: String,
    pub course_source: ValueSource,
    pub speed_source: ValueSource,
    pub accuracy_label: Option<String>,
    pub signal_quality: Option<SignalQuality>,
    pub marker_rotation_deg: f64,
}

/// One tracking session: owns the estimator and the trail. Stopping or
/// restarting the session drops everything it learnt.
pub struct TrackingSession {
    config: NavConfig,
    processor: NavProcessor,
    track: TrackBuffer,
    boat_position: Option<Point>,
    accuracy_m: Option<f64>,
    tracking: bool,
}

impl TrackingSession {
    pub fn new(config: NavConfig) -> Self {
        TrackingSession {
            track: TrackBuffer::with_capacity(config.track_capacity),
            processor: NavProcessor::with_config(config.clone()),
            config,
            boat_position: None,
            accuracy_m: None,
            tracking: false,
        }
    }

    pub fn start(&mut self) {
        if self.tracking {
            warn!("tracking restarted while already running");
        }
        self.reset();
        self.tracking = true;
        info!("tracking started");
    }

    pub fn stop(&mut self) {
        self.reset();
        self.tracking = false;
        info!("tracking stopped");
    }

    /// Returns whether tracking is on after the toggle.
    pub fn toggle(&mut self) -> bool {
        if self.tracking {
            self.stop();
        } else {
            self.start();
        }
        self.tracking
    }

    fn reset(&mut self) {
        self.processor.reset();
        self.track.reset();
        self.accuracy_m = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Returns `None` when the session is not tracking and the fix was dropped.
    pub fn on_fix(&mut self, fix: Fix) -> Option<ProcessResult> {
        if !self.tracking {
            debug!("ignoring fix while not tracking");
            return None;
        }
        let result = self.processor.process(&fix);
        if result != ProcessResult::Invalid {
            // the trail shows every raw position, including debounced ones
            let point = fix.point();
            self.boat_position = Some(point);
            // zero or negative accuracy means the platform has no estimate
            if let Some(accuracy) = fix.accuracy.filter(|accuracy| *accuracy > 0.0) {
                self.accuracy_m = Some(accuracy);
            }
            self.track.append(point);
        }
        Some(result)
    }

    /// Handles a batch of fixes. Platforms may deliver them out of order.
    pub fn on_location_update(&mut self, mut fixes: Vec<Fix>) -> Vec<ProcessResult> {
        fixes.sort_by_key(|fix| fix.timestamp_ms);
        fixes
            .into_iter()
            .filter_map(|fix| self.on_fix(fix))
            .collect()
    }

    /// Feeds every fix from `source` and returns how many were accepted.
    pub fn drain<S: FixSource>(&mut self, source: &mut S) -> usize {
        let mut accepted = 0;
        while let Some(fix) = source.next_fix() {
            if self.on_fix(fix).is_some_and(|result| result.is_accepted()) {
                accepted += 1;
            }
        }
        accepted
    }

    pub fn current_state(&self) -> &NavigationState {
        self.processor.current_state()
    }

    pub fn track(&self) -> &TrackBuffer {
        &self.track
    }

    /// Last known position. Kept across stop/start so pins can still be ranged.
    pub fn boat_position(&self) -> Option<Point> {
        self.boat_position
    }

    pub fn range_bearing_to(&self, pin: &Pin) -> Option<RangeBearing> {
        self.boat_position
            .map(|boat| pin::range_bearing(&boat, &pin.point))
    }

    pub fn signal_quality(&self) -> Option<SignalQuality> {
        self.accuracy_m.map(|accuracy| {
            if accuracy < self.config.high_accuracy_threshold_m {
                SignalQuality::High
            } else {
                SignalQuality::Medium
            }
        })
    }

    pub fn readout(&self) -> InstrumentReadout {
        let state = self.current_state();
        InstrumentReadout {
            cog_label: utils::degrees_label(state.course_over_ground_deg),
            sog_label: utils::knots_label(state.speed_over_ground_kn),
            course_source: state.course_source,
            speed_source: state.speed_source,
            accuracy_label: self
                .accuracy_m
                .map(|accuracy| format!("{}m", accuracy.round())),
            signal_quality: self.signal_quality(),
            marker_rotation_deg: state.marker_rotation_deg(),
        }
    }
}
