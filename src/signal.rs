//! Signal conditioning and gravity separation.
//!
//! Some accelerometer sources deliver linear acceleration (gravity already
//! removed by the platform); others deliver raw acceleration with gravity
//! commingled. The detector operates on linear acceleration, so raw feeds
//! pass through a slow gravity-tracking low-pass filter first.
//!
//! Design note: all filters use incremental updates, O(1) per sample.
//! No batch processing, no allocations in the hot path.

use crate::types::AccelSample;

/// Whether the sample source has already removed gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Platform delivers linear acceleration. Samples pass through untouched.
    Linear,
    /// Platform delivers raw acceleration. Gravity is tracked and subtracted.
    Raw,
}

/// A gravity-free acceleration triple derived from one input sample.
#[derive(Debug, Clone, Copy)]
pub struct ConditionedAccel {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ConditionedAccel {
    /// Euclidean norm of the conditioned axes.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Fraction of the magnitude attributable to the single largest axis.
    ///
    /// A directional impact (heel strike) concentrates energy on one axis;
    /// omnidirectional vibration spreads it. Returns 0 for a zero vector.
    pub fn dominance(&self) -> f32 {
        let magnitude = self.magnitude();
        if magnitude <= 0.0 {
            return 0.0;
        }
        let dominant = self.x.abs().max(self.y.abs()).max(self.z.abs());
        dominant / magnitude
    }
}

/// Incremental per-axis gravity estimate.
///
/// Uses the low-pass update `g = α·a + (1-α)·g` per axis. The estimate is
/// primed from the first observed sample so the initial linear residual is
/// near zero regardless of resting orientation.
#[derive(Debug, Clone)]
pub struct GravityTracker {
    gravity: [f32; 3],
    alpha: f32,
    primed: bool,
}

impl GravityTracker {
    /// Create a tracker with the given filter coefficient.
    ///
    /// Range (0.0, 1.0]. Lower = more stable, slower to adapt to a new
    /// resting orientation (phone settling in a pocket).
    pub fn new(alpha: f32) -> Self {
        Self {
            gravity: [0.0; 3],
            alpha,
            primed: false,
        }
    }

    /// Current gravity estimate [x, y, z].
    pub fn gravity(&self) -> [f32; 3] {
        self.gravity
    }

    /// Fold one sample into the estimate and return the linear residual.
    pub fn isolate(&mut self, sample: &AccelSample) -> ConditionedAccel {
        let input = [sample.x, sample.y, sample.z];
        if !self.primed {
            self.gravity = input;
            self.primed = true;
        } else {
            for (g, a) in self.gravity.iter_mut().zip(input.iter()) {
                *g = self.alpha * a + (1.0 - self.alpha) * *g;
            }
        }

        ConditionedAccel {
            x: sample.x - self.gravity[0],
            y: sample.y - self.gravity[1],
            z: sample.z - self.gravity[2],
        }
    }

    /// Forget the current estimate; the next sample re-primes it.
    pub fn reset(&mut self) {
        self.gravity = [0.0; 3];
        self.primed = false;
    }
}

/// Front end that turns input samples into linear acceleration.
///
/// This is the hot-path entry: one call per sample, O(1), no blocking.
#[derive(Debug, Clone)]
pub struct SignalConditioner {
    kind: SourceKind,
    tracker: GravityTracker,
}

impl SignalConditioner {
    pub fn new(kind: SourceKind, gravity_alpha: f32) -> Self {
        Self {
            kind,
            tracker: GravityTracker::new(gravity_alpha),
        }
    }

    /// Produce the gravity-free acceleration for one sample.
    pub fn condition(&mut self, sample: &AccelSample) -> ConditionedAccel {
        match self.kind {
            SourceKind::Linear => ConditionedAccel {
                x: sample.x,
                y: sample.y,
                z: sample.z,
            },
            SourceKind::Raw => self.tracker.isolate(sample),
        }
    }

    /// Clear filter state for a fresh session.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}
