//! Core data types for the step detection engine.
//!
//! This module defines the input and output contracts of the detector.
//! Design principle: types should make intent obvious. If a concept exists,
//! it gets a type. Never pass raw tuples or untyped collections across
//! boundaries.

/// A single raw accelerometer sample.
///
/// This is the minimal input contract: three-axis acceleration and a
/// monotonic timestamp. Axes may be in g or m/s²; the detector is agnostic
/// as long as units are consistent across a session.
///
/// Design note: f32 is used for on-device execution to save memory and
/// battery. Precision beyond f32 is not needed for peak detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelSample {
    /// X-axis acceleration.
    pub x: f32,
    /// Y-axis acceleration.
    pub y: f32,
    /// Z-axis acceleration.
    pub z: f32,
    /// Monotonic timestamp in milliseconds. Required for temporal ordering.
    pub timestamp_ms: u64,
}

impl AccelSample {
    /// Creates a new accelerometer sample.
    ///
    /// Assumption: timestamp_ms must be monotonically non-decreasing within
    /// a session. Samples that violate this are skipped by the detector.
    pub fn new(timestamp_ms: u64, x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            timestamp_ms,
        }
    }

    /// Euclidean norm of the three acceleration axes.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns true if all axis values are finite.
    ///
    /// Sensor glitches occasionally deliver NaN or infinite axis values;
    /// those samples must be dropped, never folded into filter state.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// A detected step, emitted once per accepted peak.
///
/// Consumers wanting only a running total can ignore these and poll the
/// detector's count; consumers wanting event-level granularity (e.g. live
/// haptic feedback) subscribe to the per-step events.
#[derive(Debug, Clone, Copy)]
pub struct StepEvent {
    /// Timestamp of the accepted peak (heel strike).
    pub timestamp_ms: u64,
    /// Interval since the previous accepted peak in milliseconds.
    pub interval_ms: u64,
    /// Smoothed step frequency at this moment (steps per second).
    pub cadence_hz: f32,
    /// Linear acceleration magnitude of the triggering peak.
    pub magnitude: f32,
}

impl StepEvent {
    pub fn new(timestamp_ms: u64, interval_ms: u64, cadence_hz: f32, magnitude: f32) -> Self {
        Self {
            timestamp_ms,
            interval_ms,
            cadence_hz,
            magnitude,
        }
    }
}

/// Gait-lock phase of the detector's state machine.
///
/// Peaks observed while `Unlocked` establish cadence but are never counted;
/// only peaks consistent with a locked cadence increment the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaitPhase {
    /// No plausible cadence established yet. Peaks fill the cadence buffer.
    Unlocked,
    /// Consecutive peak intervals matched a walking/running cadence.
    Locked,
}

/// Coarse pace classification derived from the locked cadence.
///
/// Reporting only: the detector never switches thresholds based on pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CadencePace {
    /// Inter-step intervals consistent with walking (>= 350 ms).
    Walking,
    /// Inter-step intervals consistent with running (< 350 ms).
    Running,
}

impl CadencePace {
    /// Boundary between running and walking strides, in milliseconds.
    pub const RUN_INTERVAL_MAX_MS: u64 = 350;

    /// Classify an average inter-step interval.
    pub fn from_interval_ms(avg_interval_ms: u64) -> Self {
        if avg_interval_ms < Self::RUN_INTERVAL_MAX_MS {
            CadencePace::Running
        } else {
            CadencePace::Walking
        }
    }
}
