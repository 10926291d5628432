//! Session lifecycle and control surface around the step detector.
//!
//! The session exposes the four control operations a UI layer needs —
//! start, stop, reset, get-count — plus the per-sample entry point that the
//! platform's sensor callback drives. Start-time failures (missing sensor,
//! denied permission) are returned synchronously; nothing escapes the
//! per-sample path at runtime.
//!
//! Concurrency contract: the session is single-threaded. `process_sample`
//! runs on whatever thread the sensor delivers samples; control operations
//! must be serialized by the caller. The struct is `Send`, so a host that
//! cannot guarantee a single thread wraps it in its own mutex with one lock
//! scope per call.

use log::{error, info};
use thiserror::Error;

use crate::detector::{DetectorConfig, StepDetector};
use crate::types::{AccelSample, GaitPhase, StepEvent};

/// Failures surfaced by the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The platform lacks the required motion sensor. Fatal to starting a
    /// session; no internal retry.
    #[error("motion sensor unavailable on this device")]
    SensorUnavailable,

    /// The user declined motion-sensor access. The caller may re-request
    /// permission and call `start` again.
    #[error("motion sensor permission denied")]
    PermissionDenied,

    /// Detector state was found corrupted. The session has been stopped;
    /// reported exactly once.
    #[error("step detector state corrupted, session stopped")]
    DetectorFault,
}

/// External capability check consulted at start time.
///
/// Mirrors the platform sensor service: availability is a hardware property,
/// permission a user decision. Both are outside this crate's control.
pub trait SensorProbe {
    /// Whether the platform can supply motion data at all.
    fn is_available(&self) -> bool;

    /// Whether the user has granted motion-sensor access.
    fn permission_granted(&self) -> bool;
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, never started.
    Idle,
    /// Receiving samples and counting.
    Active,
    /// Stopped; the count is frozen. Restartable.
    Stopped,
    /// Stopped after an internal fault. Restartable via `start`.
    Failed,
}

/// Opaque generation token for deferred idle callbacks.
///
/// A host that schedules a real timer captures the epoch at arm time and
/// passes it back in `notify_idle`; a timeout firing late against a stopped
/// or restarted session carries a stale epoch and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEpoch(u64);

/// A step-counting session: one detector instance plus lifecycle state.
pub struct StepSession {
    config: DetectorConfig,
    detector: StepDetector,
    state: SessionState,
    epoch: u64,
    fault_reported: bool,
}

impl StepSession {
    /// Create a session with the given detector configuration. The session
    /// starts `Idle`; no samples are counted until `start` succeeds.
    pub fn new(config: DetectorConfig) -> Self {
        let detector = StepDetector::new(config.clone());
        Self {
            config,
            detector,
            state: SessionState::Idle,
            epoch: 0,
            fault_reported: false,
        }
    }

    /// Begin a detection session.
    ///
    /// Resets all detector state to initial values and transitions to
    /// `Active`. Fails synchronously if the probe reports the sensor missing
    /// or permission denied; the caller subscribes to the platform sample
    /// stream only after this returns `Ok`.
    pub fn start(&mut self, probe: &dyn SensorProbe) -> Result<SessionEpoch, SessionError> {
        if !probe.is_available() {
            return Err(SessionError::SensorUnavailable);
        }
        if !probe.permission_granted() {
            return Err(SessionError::PermissionDenied);
        }

        self.detector = StepDetector::new(self.config.clone());
        self.state = SessionState::Active;
        self.fault_reported = false;
        self.epoch += 1;
        info!("step session started (epoch {})", self.epoch);
        Ok(SessionEpoch(self.epoch))
    }

    /// Feed one sample from the sensor stream.
    ///
    /// Returns the step event if this sample registered a step. No-op when
    /// the session is not active, so a subscription mistakenly left wired
    /// after `stop` cannot change the frozen count. A detected state
    /// corruption stops the session and is reported exactly once.
    pub fn process_sample(
        &mut self,
        sample: &AccelSample,
    ) -> Result<Option<StepEvent>, SessionError> {
        if self.state != SessionState::Active {
            return Ok(None);
        }

        let event = self.detector.process_sample(sample);

        if !self.detector.state_is_finite() {
            self.state = SessionState::Failed;
            self.epoch += 1;
            if !self.fault_reported {
                self.fault_reported = true;
                error!("detector state non-finite at t={}ms, stopping session", sample.timestamp_ms);
                return Err(SessionError::DetectorFault);
            }
            return Ok(None);
        }

        Ok(event)
    }

    /// Stop the session and freeze the count. Idempotent.
    ///
    /// Bumps the epoch so any pending idle timer from this session becomes a
    /// no-op; the caller unsubscribes from the sample stream.
    pub fn stop(&mut self) {
        if self.state == SessionState::Active {
            info!("step session stopped at {} steps", self.detector.step_count());
            self.state = SessionState::Stopped;
            self.epoch += 1;
        }
    }

    /// Zero the counter and clear transient detection state without
    /// stopping the subscription.
    pub fn reset(&mut self) {
        self.detector.reset();
    }

    /// Current step count. Pure read; valid in every state.
    pub fn step_count(&self) -> u64 {
        self.detector.step_count()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current gait phase of the underlying detector.
    pub fn gait_phase(&self) -> GaitPhase {
        self.detector.gait_phase()
    }

    /// The epoch of the running session.
    ///
    /// Capture this when arming a host timer for the idle timeout and hand
    /// it back in `notify_idle`.
    pub fn epoch(&self) -> SessionEpoch {
        SessionEpoch(self.epoch)
    }

    /// The configured idle timeout, for hosts scheduling a real timer.
    pub fn idle_timeout_ms(&self) -> u64 {
        self.config.idle_timeout_ms
    }

    /// Deferred idle callback entry point.
    ///
    /// A late-firing timeout from a stopped or restarted session carries a
    /// stale epoch and does nothing. Stream-driven hosts never need this:
    /// the detector also evaluates its deadline against sample timestamps.
    pub fn notify_idle(&mut self, epoch: SessionEpoch) {
        if self.state != SessionState::Active || epoch.0 != self.epoch {
            return;
        }
        self.detector.force_idle();
    }

    /// Access the underlying detector for diagnostics.
    pub fn detector(&self) -> &StepDetector {
        &self.detector
    }
}
