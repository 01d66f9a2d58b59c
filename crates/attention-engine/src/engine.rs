//! The attention engine: one instance per tracked subject.
//!
//! All tracked quantities live on the instance, never in globals, so hosts
//! can run several independent subjects side by side and tests get a clean
//! engine per case.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::events::{AttentionAlert, AttentionUpdate, FrameMetrics, FrameOutcome, SkipReason};
use crate::observation::FrameObservation;
use crate::state::{alert_edge, classify, AttentionState};
use crate::tracker::ClosureTracker;

/// Alert confidence when the face is lost (no EAR to normalize against)
const NO_FACE_MICROSLEEP_CONFIDENCE: f64 = 0.99;
const NO_FACE_DROWSY_CONFIDENCE: f64 = 0.94;

/// Frame-synchronous alertness state machine.
///
/// Exactly one observation is processed at a time, to completion; the
/// instance must be confined to a single logical thread or task. Nothing
/// here blocks: frame acquisition and settings fetches belong to the host.
#[derive(Debug, Default)]
pub struct AttentionEngine {
    tracker: ClosureTracker,
    state: AttentionState,
}

impl AttentionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current classification
    pub fn state(&self) -> AttentionState {
        self.state
    }

    /// Process one observation against the settings snapshot current at its
    /// arrival.
    ///
    /// Never fails: a disabled or invalid snapshot skips the frame with the
    /// engine state untouched, malformed EAR values are downgraded to a
    /// no-face frame, and face loss feeds the closure tracker exactly like
    /// closed eyes.
    pub fn process(
        &mut self,
        observation: FrameObservation,
        settings: &EngineConfig,
        now: Instant,
    ) -> FrameOutcome {
        if !settings.enabled {
            return FrameOutcome::Skipped {
                reason: SkipReason::Disabled,
            };
        }
        if let Err(err) = settings.validate() {
            warn!(%err, "invalid settings snapshot, skipping frame");
            return FrameOutcome::Skipped {
                reason: SkipReason::InvalidSettings,
            };
        }

        let observation = observation.sanitized();
        let ear = observation.combined_ear();
        let closed = match ear {
            Some(value) => value < settings.ear_threshold,
            None => true,
        };

        let closed_for = self.tracker.update(closed, now, settings.min_closed_frames);
        let next = classify(closed_for, settings);
        let fired = alert_edge(self.state, next);
        if next != self.state {
            info!(prev = ?self.state, ?next, "attention state changed");
        }
        self.state = next;

        let eyes_closed_secs = closed_for.map(|d| d.as_secs_f64()).unwrap_or(0.0);
        let confidence = closure_confidence(ear, settings.ear_threshold, next);

        let update = AttentionUpdate {
            state: next,
            confidence,
            metrics: FrameMetrics {
                ear,
                eyes_closed_secs,
            },
            timestamp: Utc::now(),
        };
        let alert = fired.then(|| {
            debug!(state = ?next, confidence, eyes_closed_secs, "alert edge");
            AttentionAlert {
                state: next,
                confidence,
                eyes_closed_secs,
            }
        });

        FrameOutcome::Evaluated { update, alert }
    }

    /// Restore initial state; nothing carries over between sessions.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.state = AttentionState::default();
    }
}

/// Closure confidence for the frame.
///
/// With a face present this is `1 - ear/threshold`, clamped to [0, 1]: zero
/// at or above the threshold, one at fully closed. Without a face there is
/// nothing to normalize, so elevated states carry fixed values.
fn closure_confidence(ear: Option<f32>, threshold: f32, state: AttentionState) -> f64 {
    match ear {
        Some(value) => (1.0 - f64::from(value) / f64::from(threshold)).clamp(0.0, 1.0),
        None => match state {
            AttentionState::Microsleep => NO_FACE_MICROSLEEP_CONFIDENCE,
            AttentionState::Drowsy => NO_FACE_DROWSY_CONFIDENCE,
            AttentionState::Awake => 0.0,
        },
    }
}
