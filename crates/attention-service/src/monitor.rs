//! Synchronous callback adapter.
//!
//! For hosts that already own a frame loop and want results pushed into
//! in-process callbacks instead of channels.

use std::time::Instant;

use tracing::debug;

use attention_engine::{
    AttentionAlert, AttentionEngine, AttentionState, AttentionUpdate, EngineConfig,
    FrameObservation, FrameOutcome,
};

/// Delivery seam between the engine and the host's notification transport
pub trait Notifier {
    /// Per-frame telemetry
    fn update(&mut self, update: AttentionUpdate);

    /// Edge-triggered alert
    fn alert(&mut self, alert: AttentionAlert);
}

/// Engine plus notifier for hosts that push frames directly.
///
/// Holds the settings snapshot between `update_settings` calls; each frame is
/// classified against the snapshot current at its arrival.
pub struct AttentionMonitor<N: Notifier> {
    engine: AttentionEngine,
    settings: EngineConfig,
    notifier: N,
}

impl<N: Notifier> AttentionMonitor<N> {
    pub fn new(settings: EngineConfig, notifier: N) -> Self {
        Self {
            engine: AttentionEngine::new(),
            settings,
            notifier,
        }
    }

    /// Swap the settings snapshot; applies from the next frame on
    pub fn update_settings(&mut self, settings: EngineConfig) {
        self.settings = settings;
    }

    /// Feed one frame at the given arrival time
    pub fn push_frame(&mut self, observation: FrameObservation, now: Instant) {
        match self.engine.process(observation, &self.settings, now) {
            FrameOutcome::Evaluated { update, alert } => {
                self.notifier.update(update);
                if let Some(alert) = alert {
                    self.notifier.alert(alert);
                }
            }
            FrameOutcome::Skipped { reason } => {
                debug!(?reason, "frame skipped");
            }
        }
    }

    /// Current classification
    pub fn state(&self) -> AttentionState {
        self.engine.state()
    }

    /// Stop tracking; the next session starts from a clean slate
    pub fn stop(&mut self) {
        self.engine.reset();
    }
}
