//! Attention State Engine
//!
//! Real-time alertness classification from per-frame eye openness:
//! - Eye-aspect-ratio (EAR) combination and input sanitization
//! - Blink-filtering closure tracker (frame debounce + wall-clock durations)
//! - Hysteretic awake / drowsy / microsleep classification
//! - Edge-triggered alerts alongside per-frame telemetry updates

pub mod config;
pub mod engine;
pub mod events;
pub mod observation;
pub mod state;
pub mod tracker;

pub use config::EngineConfig;
pub use engine::AttentionEngine;
pub use events::{AttentionAlert, AttentionUpdate, FrameMetrics, FrameOutcome, SkipReason};
pub use observation::FrameObservation;
pub use state::{alert_edge, classify, AttentionState};
pub use tracker::ClosureTracker;

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("EAR threshold {0} is not a positive finite number")]
    InvalidEarThreshold(f32),

    #[error("{field} duration {value} is not a finite non-negative number of seconds")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("Microsleep threshold {microsleep_secs}s is below drowsy threshold {drowsy_secs}s")]
    ThresholdOrder {
        drowsy_secs: f64,
        microsleep_secs: f64,
    },

    #[error("Debounce window must be at least 1 frame")]
    EmptyDebounceWindow,
}
