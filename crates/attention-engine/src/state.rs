//! Attention states and classification rules

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;

/// Alertness classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionState {
    #[default]
    Awake,
    Drowsy,
    Microsleep,
}

impl AttentionState {
    /// Whether this state warrants an alert on entry
    pub fn is_elevated(&self) -> bool {
        matches!(self, AttentionState::Drowsy | AttentionState::Microsleep)
    }
}

/// Map a latched closed duration to an attention state.
///
/// `None` means the closure streak is broken or still below the debounce
/// floor; recovery to `Awake` is instantaneous, regardless of prior state.
/// The microsleep check runs first, so equal thresholds resolve to
/// `Microsleep`. A disabled detector's threshold is never evaluated, which
/// lets `Drowsy` persist indefinitely when microsleep detection is off.
pub fn classify(closed_for: Option<Duration>, config: &EngineConfig) -> AttentionState {
    let Some(closed_for) = closed_for else {
        return AttentionState::Awake;
    };
    let secs = closed_for.as_secs_f64();

    if config.detect_microsleep && secs >= config.microsleep_secs {
        AttentionState::Microsleep
    } else if config.detect_drowsiness && secs >= config.drowsy_secs {
        AttentionState::Drowsy
    } else {
        AttentionState::Awake
    }
}

/// True only on a rising transition into an elevated state.
///
/// Staying in the same elevated state does not re-fire, and dropping back to
/// `Awake` never fires.
pub fn alert_edge(prev: AttentionState, next: AttentionState) -> bool {
    prev != next && next.is_elevated()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Option<Duration> {
        Some(Duration::from_secs_f64(s))
    }

    #[test]
    fn test_unlatched_is_awake() {
        let config = EngineConfig::default();
        assert_eq!(classify(None, &config), AttentionState::Awake);
    }

    #[test]
    fn test_below_both_thresholds_is_awake() {
        let config = EngineConfig::default();
        assert_eq!(classify(secs(1.9), &config), AttentionState::Awake);
    }

    #[test]
    fn test_drowsy_then_microsleep() {
        let config = EngineConfig::default();
        assert_eq!(classify(secs(2.0), &config), AttentionState::Drowsy);
        assert_eq!(classify(secs(4.9), &config), AttentionState::Drowsy);
        assert_eq!(classify(secs(5.0), &config), AttentionState::Microsleep);
    }

    #[test]
    fn test_equal_thresholds_tie_to_microsleep() {
        let config = EngineConfig {
            drowsy_secs: 3.0,
            microsleep_secs: 3.0,
            ..Default::default()
        };
        assert_eq!(classify(secs(3.0), &config), AttentionState::Microsleep);
    }

    #[test]
    fn test_disabled_microsleep_never_escalates() {
        let config = EngineConfig {
            detect_microsleep: false,
            ..Default::default()
        };
        assert_eq!(classify(secs(60.0), &config), AttentionState::Drowsy);
    }

    #[test]
    fn test_disabled_drowsiness_skips_to_microsleep() {
        let config = EngineConfig {
            detect_drowsiness: false,
            ..Default::default()
        };
        assert_eq!(classify(secs(3.0), &config), AttentionState::Awake);
        assert_eq!(classify(secs(5.0), &config), AttentionState::Microsleep);
    }

    #[test]
    fn test_both_disabled_stays_awake() {
        let config = EngineConfig {
            detect_drowsiness: false,
            detect_microsleep: false,
            ..Default::default()
        };
        assert_eq!(classify(secs(120.0), &config), AttentionState::Awake);
    }

    #[test]
    fn test_alert_edge_fires_on_rising_transitions_only() {
        use AttentionState::*;

        assert!(alert_edge(Awake, Drowsy));
        assert!(alert_edge(Awake, Microsleep));
        assert!(alert_edge(Drowsy, Microsleep));
        assert!(alert_edge(Microsleep, Drowsy));

        // Self-loops and recovery never fire
        assert!(!alert_edge(Drowsy, Drowsy));
        assert!(!alert_edge(Microsleep, Microsleep));
        assert!(!alert_edge(Awake, Awake));
        assert!(!alert_edge(Drowsy, Awake));
        assert!(!alert_edge(Microsleep, Awake));
    }
}
