//! Emitted messages: per-frame telemetry updates and edge-triggered alerts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AttentionState;

/// Per-frame measurements attached to every update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Combined EAR for the frame; absent when no face was detected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ear: Option<f32>,

    /// Latched closed duration in seconds (0 until the debounce floor is met)
    pub eyes_closed_secs: f64,
}

/// Continuous telemetry, one per processed frame.
///
/// This is a stream, not an alert: it is emitted even when the state is
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttentionUpdate {
    pub state: AttentionState,
    pub confidence: f64,
    pub metrics: FrameMetrics,
    pub timestamp: DateTime<Utc>,
}

/// Fired once on entering drowsy or microsleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionAlert {
    pub state: AttentionState,
    pub confidence: f64,
    pub eyes_closed_secs: f64,
}

/// Why a frame produced no classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Master switch is off
    Disabled,

    /// Settings snapshot failed validation; retried on the next frame
    InvalidSettings,
}

/// Result of processing one frame
#[derive(Debug, Clone)]
pub enum FrameOutcome {
    /// Frame classified; the update is always present, the alert only on a
    /// rising edge into an elevated state
    Evaluated {
        update: AttentionUpdate,
        alert: Option<AttentionAlert>,
    },

    /// Frame not classified; engine state untouched
    Skipped { reason: SkipReason },
}

impl FrameOutcome {
    /// The telemetry update, if the frame was classified
    pub fn update(&self) -> Option<&AttentionUpdate> {
        match self {
            FrameOutcome::Evaluated { update, .. } => Some(update),
            FrameOutcome::Skipped { .. } => None,
        }
    }

    /// The alert, if one fired this frame
    pub fn alert(&self) -> Option<&AttentionAlert> {
        match self {
            FrameOutcome::Evaluated { alert, .. } => alert.as_ref(),
            FrameOutcome::Skipped { .. } => None,
        }
    }
}
