//! Attention Service
//!
//! Host-side adapters around the attention engine:
//! - `AttentionSession`: async, channel-fed (frames in, events out)
//! - `AttentionMonitor`: synchronous, callback-driven
//!
//! Both adapters run the same engine; they differ only in how frames arrive
//! and how notifications leave. The engine itself owns no transport: these
//! in-process events are adapted to whatever the host uses.

pub mod monitor;
pub mod session;

pub use monitor::{AttentionMonitor, Notifier};
pub use session::{AttentionSession, NotifierMessage, SessionError};

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize logging (INFO level with targets)
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
