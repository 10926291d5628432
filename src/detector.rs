//! Adaptive step detection with cadence-based gait locking.
//!
//! The detector turns a live stream of accelerometer samples into discrete
//! step events using:
//! - An exponential moving-average baseline that adapts to the resting level
//! - Peak candidates gated on absolute threshold, prominence over baseline,
//!   axis dominance, and a rising edge
//! - A two-phase state machine: peaks first establish a cadence (uncounted),
//!   then only peaks consistent with the locked cadence are counted
//! - An idle deadline that unlocks gait after a quiet period, so a resumed
//!   unrelated motion is never misread as a continuation of a prior gait
//!
//! The two-phase approach trades one to two strides of detection latency for
//! a much lower false-positive rate on non-gait motion: an isolated shock
//! never accumulates enough consistent-interval peaks to lock gait.

use log::{debug, warn};

use crate::signal::{SignalConditioner, SourceKind};
use crate::types::{AccelSample, CadencePace, GaitPhase, StepEvent};

/// Number of recent accepted-step intervals kept for cadence reporting.
const CADENCE_HISTORY: usize = 10;

/// Tuning parameters for step detection.
///
/// Defaults are the production-tuned set: balanced for both walking and
/// running on a 10-20 Hz linear-acceleration feed in units of g.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Whether samples arrive with gravity already removed.
    pub source: SourceKind,
    /// Absolute magnitude a sample must exceed to be a peak candidate.
    pub step_threshold: f32,
    /// Minimum excursion above the adaptive baseline (peak prominence).
    pub peak_prominence: f32,
    /// Minimum fraction of magnitude carried by the dominant axis.
    pub dominance_ratio: f32,
    /// Minimum time between peaks in milliseconds. Anything closer is
    /// ringing from the same impact, not a new step.
    pub min_step_interval_ms: u64,
    /// Peak window re-arms when magnitude drops below
    /// `step_threshold * reset_ratio`.
    pub reset_ratio: f32,
    /// Smoothing factor for the magnitude baseline EMA (0-1, lower = slower).
    pub baseline_alpha: f32,
    /// Lower bound of the acceptable inter-peak cadence band (ms).
    pub cadence_min_ms: u64,
    /// Upper bound of the acceptable inter-peak cadence band (ms).
    pub cadence_max_ms: u64,
    /// Maximum spread (max - min) of buffered intervals allowed for lock.
    pub cadence_jitter_ms: u64,
    /// Peak timestamps required in the cadence buffer before lock is
    /// evaluated. Two peaks allow one interval measurement.
    pub lock_buffer_size: usize,
    /// Quiet period after which gait unlocks and cadence history clears (ms).
    pub idle_timeout_ms: u64,
    /// Gravity filter coefficient, used only for `SourceKind::Raw` feeds.
    pub gravity_alpha: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Linear,
            step_threshold: 1.0,      // Balanced for walking and running
            peak_prominence: 0.3,
            dominance_ratio: 0.5,     // Lenient enough for varied movements
            min_step_interval_ms: 120, // Short enough for rapid running steps
            reset_ratio: 0.8,         // High ratio for easy peak re-arming
            baseline_alpha: 0.08,
            cadence_min_ms: 100,      // Fast running
            cadence_max_ms: 2000,     // Slow walking
            cadence_jitter_ms: 500,
            lock_buffer_size: 2,
            idle_timeout_ms: 2200,
            gravity_alpha: 0.02,      // Slow tracker so impacts survive isolation
        }
    }
}

/// Streaming step detector.
///
/// All state is session-scoped and exclusively owned: one instance per
/// detection session, mutated only by its own `process_sample`. Samples must
/// be delivered in arrival order; the peak and cadence logic is
/// order-sensitive.
pub struct StepDetector {
    config: DetectorConfig,
    conditioner: SignalConditioner,

    // Filtering state
    baseline: Option<f32>,
    prev_magnitude: f32,

    // Peak window
    in_peak: bool,

    // Gait lock
    gait_locked: bool,
    cadence_buffer: Vec<u64>,
    last_peak_ms: Option<u64>,

    // Idle handling, evaluated lazily against sample timestamps
    idle_deadline_ms: Option<u64>,

    // Ordering guard
    last_sample_ms: Option<u64>,

    // Cadence reporting
    recent_intervals: Vec<u64>,

    // Counters
    step_count: u64,
    skipped_samples: u64,
}

impl StepDetector {
    /// Create a detector with the given configuration.
    pub fn new(config: DetectorConfig) -> Self {
        let conditioner = SignalConditioner::new(config.source, config.gravity_alpha);
        Self {
            config,
            conditioner,
            baseline: None,
            prev_magnitude: 0.0,
            in_peak: false,
            gait_locked: false,
            cadence_buffer: Vec::new(),
            last_peak_ms: None,
            idle_deadline_ms: None,
            last_sample_ms: None,
            recent_intervals: Vec::with_capacity(CADENCE_HISTORY),
            step_count: 0,
            skipped_samples: 0,
        }
    }

    /// Process one sample. Returns a `StepEvent` if a step was registered
    /// this call, `None` otherwise.
    ///
    /// Never blocks; O(1) per sample. Malformed samples and samples that go
    /// backwards in time are skipped with filter state carried forward
    /// unchanged.
    pub fn process_sample(&mut self, sample: &AccelSample) -> Option<StepEvent> {
        if !sample.is_well_formed() {
            self.skipped_samples += 1;
            warn!(
                "skipping malformed sample at t={}ms (non-finite axis)",
                sample.timestamp_ms
            );
            return None;
        }
        if let Some(last) = self.last_sample_ms {
            if sample.timestamp_ms < last {
                self.skipped_samples += 1;
                warn!(
                    "skipping out-of-order sample: t={}ms < last t={}ms",
                    sample.timestamp_ms, last
                );
                return None;
            }
        }
        self.last_sample_ms = Some(sample.timestamp_ms);

        // Fire an overdue idle deadline before evaluating this sample, so a
        // motion resumed after a long quiet period starts from a clean slate.
        if let Some(deadline) = self.idle_deadline_ms {
            if sample.timestamp_ms >= deadline {
                self.handle_idle();
            }
        }

        let linear = self.conditioner.condition(sample);
        let magnitude = linear.magnitude();

        // Adaptive baseline, initialized to the first observed magnitude.
        let alpha = self.config.baseline_alpha;
        let baseline = match self.baseline {
            None => magnitude,
            Some(baseline) => alpha * magnitude + (1.0 - alpha) * baseline,
        };
        self.baseline = Some(baseline);
        let delta = magnitude - baseline;

        let dominance = linear.dominance();
        let rising = magnitude > self.prev_magnitude;

        let candidate = !self.in_peak
            && magnitude > self.config.step_threshold
            && delta > self.config.peak_prominence
            && dominance > self.config.dominance_ratio
            && rising;

        let event = if candidate {
            self.handle_candidate(sample.timestamp_ms, magnitude)
        } else {
            None
        };

        // Peak-window exit: re-arm once the excursion has decayed.
        if self.in_peak && magnitude < self.config.step_threshold * self.config.reset_ratio {
            self.in_peak = false;
        }

        self.prev_magnitude = magnitude;
        event
    }

    /// Current step count. Pure read, no side effects.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Current gait-lock phase.
    pub fn gait_phase(&self) -> GaitPhase {
        if self.gait_locked {
            GaitPhase::Locked
        } else {
            GaitPhase::Unlocked
        }
    }

    /// Smoothed step frequency over recent accepted steps, 0 if none.
    pub fn cadence_hz(&self) -> f32 {
        match self.average_interval_ms() {
            Some(avg) if avg > 0 => 1000.0 / avg as f32,
            _ => 0.0,
        }
    }

    /// Pace classification of the current cadence, `None` until gait is
    /// locked and at least one step has been counted.
    pub fn pace(&self) -> Option<CadencePace> {
        if !self.gait_locked {
            return None;
        }
        self.average_interval_ms().map(CadencePace::from_interval_ms)
    }

    /// Number of samples dropped as malformed or out of order.
    pub fn skipped_samples(&self) -> u64 {
        self.skipped_samples
    }

    /// Returns false if filter state has become non-finite.
    ///
    /// Input validation makes this unreachable in practice; the session layer
    /// checks it so a corrupted detector is stopped rather than left
    /// miscounting indefinitely.
    pub fn state_is_finite(&self) -> bool {
        self.prev_magnitude.is_finite() && self.baseline.map_or(true, |b| b.is_finite())
    }

    /// Zero the count and clear all transient detection state.
    ///
    /// Used when the caller wants to zero the counter mid-session; the
    /// sample subscription stays untouched.
    pub fn reset(&mut self) {
        self.conditioner.reset();
        self.baseline = None;
        self.prev_magnitude = 0.0;
        self.in_peak = false;
        self.gait_locked = false;
        self.cadence_buffer.clear();
        self.last_peak_ms = None;
        self.idle_deadline_ms = None;
        self.last_sample_ms = None;
        self.recent_intervals.clear();
        self.step_count = 0;
        self.skipped_samples = 0;
    }

    /// Force the idle transition now, as if the deadline had fired.
    ///
    /// Host environments driving a real timer call this through the session
    /// layer; stream-driven hosts never need it because deadlines are also
    /// evaluated against incoming sample timestamps.
    pub fn force_idle(&mut self) {
        self.handle_idle();
    }

    /// The deadline after which the detector considers itself idle, if armed.
    pub fn idle_deadline_ms(&self) -> Option<u64> {
        self.idle_deadline_ms
    }

    // =========================================================================
    // PRIVATE METHODS
    // =========================================================================

    fn handle_candidate(&mut self, now_ms: u64, magnitude: f32) -> Option<StepEvent> {
        if let Some(last_peak) = self.last_peak_ms {
            let since_last = now_ms.saturating_sub(last_peak);

            // Debounce: ringing from the same impact, not a new step.
            if since_last < self.config.min_step_interval_ms {
                debug!("peak at t={}ms discarded: {}ms since last peak", now_ms, since_last);
                return None;
            }

            if self.gait_locked {
                return self.handle_locked_peak(now_ms, since_last, magnitude);
            }
        }

        // Unlocked (or first-ever peak): establish cadence, never count.
        self.push_cadence_peak(now_ms);
        self.try_lock_gait();
        self.accept_peak(now_ms);
        None
    }

    fn handle_locked_peak(
        &mut self,
        now_ms: u64,
        since_last: u64,
        magnitude: f32,
    ) -> Option<StepEvent> {
        if since_last >= self.config.cadence_min_ms && since_last <= self.config.cadence_max_ms {
            // In-band: this is a stride at the locked cadence.
            self.step_count += 1;
            self.push_interval(since_last);
            self.accept_peak(now_ms);
            debug!("step {} at t={}ms (interval {}ms)", self.step_count, now_ms, since_last);
            Some(StepEvent::new(
                now_ms,
                since_last,
                self.cadence_hz(),
                magnitude,
            ))
        } else if since_last > self.config.cadence_max_ms {
            // Cadence break: re-learn from this peak instead of counting it.
            debug!(
                "cadence break at t={}ms: {}ms > {}ms, gait unlocked",
                now_ms, since_last, self.config.cadence_max_ms
            );
            self.gait_locked = false;
            self.cadence_buffer.clear();
            self.cadence_buffer.push(now_ms);
            self.recent_intervals.clear();
            self.accept_peak(now_ms);
            None
        } else {
            // Above debounce but below the band: too fast to be a new stride
            // at this cadence. Ignore without touching peak or gait state.
            debug!("peak at t={}ms too fast ({}ms), waiting for next", now_ms, since_last);
            None
        }
    }

    /// Record a qualifying peak: timestamp, peak window, idle re-arm.
    fn accept_peak(&mut self, now_ms: u64) {
        self.last_peak_ms = Some(now_ms);
        self.in_peak = true;
        self.idle_deadline_ms = Some(now_ms + self.config.idle_timeout_ms);
    }

    fn push_cadence_peak(&mut self, now_ms: u64) {
        self.cadence_buffer.push(now_ms);
        if self.cadence_buffer.len() > self.config.lock_buffer_size {
            self.cadence_buffer.remove(0);
        }
    }

    fn try_lock_gait(&mut self) {
        if self.cadence_buffer.len() < self.config.lock_buffer_size.max(2) {
            return;
        }

        let intervals: Vec<u64> = self
            .cadence_buffer
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect();

        let sum: u64 = intervals.iter().sum();
        let avg = sum / intervals.len() as u64;
        let min = *intervals.iter().min().unwrap_or(&0);
        let max = *intervals.iter().max().unwrap_or(&0);
        let spread = max - min;

        let cadence_ok = avg >= self.config.cadence_min_ms
            && avg <= self.config.cadence_max_ms
            && spread <= self.config.cadence_jitter_ms;

        if cadence_ok {
            self.gait_locked = true;
            debug!("gait locked: avg interval {}ms, spread {}ms", avg, spread);
        }
    }

    fn handle_idle(&mut self) {
        if self.gait_locked {
            debug!("gait unlocked: idle timeout, no peaks before deadline");
        }
        self.gait_locked = false;
        self.cadence_buffer.clear();
        self.recent_intervals.clear();
        self.in_peak = false;
        self.idle_deadline_ms = None;
    }

    fn push_interval(&mut self, interval_ms: u64) {
        self.recent_intervals.push(interval_ms);
        if self.recent_intervals.len() > CADENCE_HISTORY {
            self.recent_intervals.remove(0);
        }
    }

    fn average_interval_ms(&self) -> Option<u64> {
        if self.recent_intervals.is_empty() {
            return None;
        }
        let sum: u64 = self.recent_intervals.iter().sum();
        Some(sum / self.recent_intervals.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Band and lock parameters used by most tests: cadence [300, 1400] ms,
    /// two-peak lock, 120 ms debounce.
    fn walking_config() -> DetectorConfig {
        DetectorConfig {
            cadence_min_ms: 300,
            cadence_max_ms: 1400,
            lock_buffer_size: 2,
            min_step_interval_ms: 120,
            ..DetectorConfig::default()
        }
    }

    /// Emit a clean peak at `t`: two quiet lead-in samples, the impact, and
    /// a quiet tail that re-arms the peak window.
    fn feed_peak(detector: &mut StepDetector, t: u64, peak_mag: f32) -> Option<StepEvent> {
        detector.process_sample(&AccelSample::new(t - 60, 0.0, 0.0, 0.05));
        detector.process_sample(&AccelSample::new(t - 30, 0.0, 0.0, 0.05));
        let event = detector.process_sample(&AccelSample::new(t, 0.0, 0.0, peak_mag));
        detector.process_sample(&AccelSample::new(t + 30, 0.0, 0.0, 0.05));
        event
    }

    #[test]
    fn test_detector_creation() {
        let detector = StepDetector::new(DetectorConfig::default());
        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
        assert_eq!(detector.cadence_hz(), 0.0);
        assert!(detector.pace().is_none());
    }

    #[test]
    fn test_quiet_stream_counts_nothing() {
        let mut detector = StepDetector::new(DetectorConfig::default());
        for i in 0..200 {
            detector.process_sample(&AccelSample::new(i * 100, 0.01, 0.02, 0.05));
        }
        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
    }

    #[test]
    fn test_constant_cadence_locks_then_counts() {
        let mut detector = StepDetector::new(walking_config());

        // Peaks every 520 ms. First two establish cadence (uncounted),
        // the remaining three count.
        for i in 0..5u64 {
            feed_peak(&mut detector, 100 + i * 520, 1.6);
        }

        assert_eq!(detector.gait_phase(), GaitPhase::Locked);
        assert_eq!(detector.step_count(), 3);
        assert_eq!(detector.pace(), Some(CadencePace::Walking));
    }

    #[test]
    fn test_step_event_granularity() {
        let mut detector = StepDetector::new(walking_config());

        assert!(feed_peak(&mut detector, 100, 1.6).is_none());
        assert!(feed_peak(&mut detector, 620, 1.6).is_none()); // lock, uncounted

        let event = feed_peak(&mut detector, 1140, 1.6).expect("locked peak should count");
        assert_eq!(event.timestamp_ms, 1140);
        assert_eq!(event.interval_ms, 520);
        assert!(event.magnitude > 1.0);
    }

    #[test]
    fn test_debounced_ringing_not_counted() {
        let mut detector = StepDetector::new(walking_config());

        // Lock at 520 ms cadence, count one step.
        feed_peak(&mut detector, 100, 1.6);
        feed_peak(&mut detector, 620, 1.6);
        feed_peak(&mut detector, 1140, 1.6);
        assert_eq!(detector.step_count(), 1);

        // Ringing 80 ms after the accepted peak: below the 120 ms debounce.
        detector.process_sample(&AccelSample::new(1200, 0.0, 0.0, 0.05));
        detector.process_sample(&AccelSample::new(1220, 0.0, 0.0, 1.6));
        assert_eq!(detector.step_count(), 1);
    }

    #[test]
    fn test_too_fast_interval_ignored_without_state_change() {
        let mut detector = StepDetector::new(walking_config());

        feed_peak(&mut detector, 100, 1.6);
        feed_peak(&mut detector, 620, 1.6);
        feed_peak(&mut detector, 1140, 1.6);
        assert_eq!(detector.step_count(), 1);
        let last_deadline = detector.idle_deadline_ms();

        // 150 ms later: above the 120 ms debounce but below the 300 ms band.
        feed_peak(&mut detector, 1290, 1.6);
        assert_eq!(detector.step_count(), 1);
        assert_eq!(detector.gait_phase(), GaitPhase::Locked);
        // Peak and idle state untouched by the ignored peak.
        assert_eq!(detector.idle_deadline_ms(), last_deadline);

        // The next on-cadence peak still counts relative to t=1140.
        feed_peak(&mut detector, 1660, 1.6);
        assert_eq!(detector.step_count(), 2);
    }

    #[test]
    fn test_cadence_break_unlocks_without_counting() {
        let mut detector = StepDetector::new(DetectorConfig {
            idle_timeout_ms: 5000, // keep the lazy idle out of this scenario
            ..walking_config()
        });

        feed_peak(&mut detector, 100, 1.6);
        feed_peak(&mut detector, 620, 1.6);
        feed_peak(&mut detector, 1140, 1.6);
        assert_eq!(detector.step_count(), 1);

        // 3000 ms gap exceeds the 1400 ms band: unlock, re-learn, no count.
        feed_peak(&mut detector, 4140, 1.6);
        assert_eq!(detector.step_count(), 1);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
        assert_eq!(detector.cadence_buffer, vec![4140]);
    }

    #[test]
    fn test_isolated_shock_never_locks() {
        let mut detector = StepDetector::new(walking_config());

        feed_peak(&mut detector, 100, 2.5);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);

        // Silence past the 2200 ms idle timeout.
        for i in 0..40u64 {
            detector.process_sample(&AccelSample::new(200 + i * 100, 0.0, 0.0, 0.05));
        }

        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
        assert!(detector.cadence_buffer.is_empty());
        assert!(detector.idle_deadline_ms().is_none());
    }

    #[test]
    fn test_idle_clears_peak_window() {
        let mut detector = StepDetector::new(walking_config());

        // A peak whose magnitude never decays below the reset threshold
        // would pin the peak window; the idle deadline force-closes it.
        detector.process_sample(&AccelSample::new(100, 0.0, 0.0, 0.05));
        detector.process_sample(&AccelSample::new(160, 0.0, 0.0, 1.6));
        assert!(detector.in_peak);

        detector.process_sample(&AccelSample::new(3000, 0.0, 0.0, 0.9));
        assert!(!detector.in_peak);
    }

    #[test]
    fn test_reset_reproduces_fresh_session() {
        let mut detector = StepDetector::new(walking_config());

        for i in 0..5u64 {
            feed_peak(&mut detector, 100 + i * 520, 1.6);
        }
        let first_run = detector.step_count();
        assert_eq!(first_run, 3);

        detector.reset();
        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
        assert_eq!(detector.cadence_hz(), 0.0);

        // The identical sequence yields the identical count.
        for i in 0..5u64 {
            feed_peak(&mut detector, 100 + i * 520, 1.6);
        }
        assert_eq!(detector.step_count(), first_run);
    }

    #[test]
    fn test_malformed_samples_skipped() {
        let mut detector = StepDetector::new(walking_config());

        feed_peak(&mut detector, 100, 1.6);
        detector.process_sample(&AccelSample::new(300, f32::NAN, 0.0, 0.0));
        detector.process_sample(&AccelSample::new(400, 0.0, f32::INFINITY, 0.0));
        assert_eq!(detector.skipped_samples(), 2);
        assert!(detector.state_is_finite());

        // The stream continues as if the gap never happened.
        feed_peak(&mut detector, 620, 1.6);
        assert_eq!(detector.gait_phase(), GaitPhase::Locked);
    }

    #[test]
    fn test_out_of_order_samples_skipped() {
        let mut detector = StepDetector::new(walking_config());
        detector.process_sample(&AccelSample::new(1000, 0.0, 0.0, 0.05));
        detector.process_sample(&AccelSample::new(400, 0.0, 0.0, 1.6));
        assert_eq!(detector.skipped_samples(), 1);
        assert_eq!(detector.step_count(), 0);
    }

    #[test]
    fn test_low_dominance_rejected() {
        // Equal energy on all axes gives dominance 1/sqrt(3) ~ 0.577, the
        // floor of the ratio; a tightened gate must reject it.
        let mut detector = StepDetector::new(DetectorConfig {
            dominance_ratio: 0.7,
            ..walking_config()
        });

        // Omnidirectional vibration: magnitude clears the threshold but no
        // single axis dominates.
        for i in 0..10u64 {
            let t = 100 + i * 520;
            detector.process_sample(&AccelSample::new(t - 30, 0.0, 0.0, 0.05));
            detector.process_sample(&AccelSample::new(t, 1.0, 1.0, 1.0));
            detector.process_sample(&AccelSample::new(t + 30, 0.0, 0.0, 0.05));
        }

        assert_eq!(detector.step_count(), 0);
        assert_eq!(detector.gait_phase(), GaitPhase::Unlocked);
    }

    #[test]
    fn test_running_cadence_pace() {
        let mut detector = StepDetector::new(DetectorConfig {
            lock_buffer_size: 2,
            min_step_interval_ms: 120,
            ..DetectorConfig::default()
        });

        // Peaks every 250 ms: within the default [100, 2000] band, and a
        // running stride per the pace boundary.
        for i in 0..6u64 {
            let t = 100 + i * 250;
            detector.process_sample(&AccelSample::new(t - 40, 0.0, 0.0, 0.05));
            detector.process_sample(&AccelSample::new(t, 0.0, 0.0, 1.8));
            detector.process_sample(&AccelSample::new(t + 40, 0.0, 0.0, 0.05));
        }

        assert_eq!(detector.gait_phase(), GaitPhase::Locked);
        assert_eq!(detector.step_count(), 4);
        assert_eq!(detector.pace(), Some(CadencePace::Running));
        assert!(detector.cadence_hz() > 3.0);
    }

    #[test]
    fn test_baseline_initialized_from_first_magnitude() {
        let mut detector = StepDetector::new(walking_config());

        // A large first sample initializes the baseline to itself, so its
        // prominence is zero and it is not a candidate.
        detector.process_sample(&AccelSample::new(0, 0.0, 0.0, 2.0));
        assert_eq!(detector.step_count(), 0);
        assert!(detector.cadence_buffer.is_empty());
    }

    #[test]
    fn test_raw_source_walk() {
        let mut detector = StepDetector::new(DetectorConfig {
            source: SourceKind::Raw,
            step_threshold: 1.0,
            ..walking_config()
        });

        // Gravity on z; impacts ride on top of it. The tracker primes from
        // the first resting sample, so the residual peaks look like a
        // linear-acceleration walk.
        detector.process_sample(&AccelSample::new(0, 0.0, 0.0, 9.81));
        for i in 0..5u64 {
            let t = 300 + i * 520;
            detector.process_sample(&AccelSample::new(t - 60, 0.0, 0.0, 9.81));
            detector.process_sample(&AccelSample::new(t - 30, 0.0, 0.0, 9.81));
            detector.process_sample(&AccelSample::new(t, 0.0, 0.0, 9.81 + 2.5));
            detector.process_sample(&AccelSample::new(t + 30, 0.0, 0.0, 9.81));
        }

        assert_eq!(detector.gait_phase(), GaitPhase::Locked);
        assert!(detector.step_count() >= 2, "raw-source walk should count steps");
    }
}
