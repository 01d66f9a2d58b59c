//! Channel-fed attention session.
//!
//! The engine is confined to the session's task; cross-thread handoff happens
//! only via message passing (observations in, events out), so no locking is
//! needed around engine state.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};
use uuid::Uuid;

use attention_engine::{
    AttentionAlert, AttentionEngine, AttentionUpdate, EngineConfig, FrameObservation, FrameOutcome,
};

/// Messages delivered to the notifier side of the channel
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifierMessage {
    /// Per-frame telemetry
    Update(AttentionUpdate),

    /// Edge-triggered alert
    Alert(AttentionAlert),
}

/// Session errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Notifier channel closed")]
    EventChannelClosed,
}

/// One tracked subject: an engine driven by a frame channel.
///
/// Settings are read from the watch channel at each frame's arrival, so a
/// settings change applies from the next frame on with no retroactive
/// reclassification. Dropping the frame sender ends the session; a new
/// session always starts from a fresh engine.
pub struct AttentionSession {
    id: Uuid,
    engine: AttentionEngine,
    frames: mpsc::Receiver<FrameObservation>,
    settings: watch::Receiver<EngineConfig>,
    events: mpsc::Sender<NotifierMessage>,
}

impl AttentionSession {
    pub fn new(
        frames: mpsc::Receiver<FrameObservation>,
        settings: watch::Receiver<EngineConfig>,
        events: mpsc::Sender<NotifierMessage>,
    ) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, "creating attention session");
        Self {
            id,
            engine: AttentionEngine::new(),
            frames,
            settings,
            events,
        }
    }

    /// Session identifier (carried in log events)
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Drive the session until the frame stream closes.
    ///
    /// Frames are processed one at a time, to completion, in arrival order.
    pub async fn run(mut self) -> Result<(), SessionError> {
        while let Some(observation) = self.frames.recv().await {
            let snapshot = self.settings.borrow().clone();
            match self.engine.process(observation, &snapshot, Instant::now()) {
                FrameOutcome::Evaluated { update, alert } => {
                    self.events
                        .send(NotifierMessage::Update(update))
                        .await
                        .map_err(|_| SessionError::EventChannelClosed)?;
                    if let Some(alert) = alert {
                        info!(
                            session = %self.id,
                            state = ?alert.state,
                            confidence = alert.confidence,
                            "attention alert"
                        );
                        self.events
                            .send(NotifierMessage::Alert(alert))
                            .await
                            .map_err(|_| SessionError::EventChannelClosed)?;
                    }
                }
                FrameOutcome::Skipped { reason } => {
                    debug!(session = %self.id, ?reason, "frame skipped");
                }
            }
        }
        info!(session = %self.id, "frame stream closed, session ending");
        Ok(())
    }
}
