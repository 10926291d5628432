//! Step Sensing Engine Library
//!
//! A headless step-detection kernel that converts a noisy, continuous
//! accelerometer stream into discrete step events in real time.
//!
//! # Design Philosophy
//!
//! - **Cadence before counting**: peaks first establish a plausible gait
//!   cadence (uncounted); only peaks consistent with the locked cadence
//!   increment the step count. Isolated shocks never lock gait.
//! - **Fail-quiet on data, fail-loud on lifecycle**: malformed samples are
//!   skipped without aborting the session; a missing sensor or denied
//!   permission fails `start` synchronously.
//! - **UI independence**: the engine is a plain stateful object with
//!   explicit start/stop/reset/process-sample operations, unit-testable
//!   headlessly with synthetic sample sequences.
//! - **Battery awareness**: O(1) processing per sample with a fixed memory
//!   footprint; no blocking inside the sample path.
//!
//! # Example
//!
//! ```
//! use step_sensing::{AccelSample, DetectorConfig, SensorProbe, StepSession};
//!
//! struct AlwaysReady;
//! impl SensorProbe for AlwaysReady {
//!     fn is_available(&self) -> bool { true }
//!     fn permission_granted(&self) -> bool { true }
//! }
//!
//! let mut session = StepSession::new(DetectorConfig::default());
//! session.start(&AlwaysReady).expect("sensor ready");
//!
//! // The platform sensor callback drives this once per sample.
//! let sample = AccelSample::new(0, 0.0, 0.0, 0.05);
//! session.process_sample(&sample).expect("session healthy");
//!
//! assert_eq!(session.step_count(), 0);
//! ```

pub mod detector;
pub mod session;
pub mod signal;
pub mod types;


// Re-export the public surface
pub use detector::{DetectorConfig, StepDetector};
pub use session::{SensorProbe, SessionEpoch, SessionError, SessionState, StepSession};
pub use signal::{ConditionedAccel, GravityTracker, SignalConditioner, SourceKind};
pub use types::{AccelSample, CadencePace, GaitPhase, StepEvent};
