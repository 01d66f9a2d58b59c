//! Engine configuration (the per-frame settings snapshot)

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Thresholds and detector flags.
///
/// The engine takes a reference to a snapshot on every frame, so settings may
/// change between frames without retroactively reclassifying past ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Master switch; no classification happens while false
    pub enabled: bool,

    /// EAR below which the eyes count as closed
    pub ear_threshold: f32,

    /// Sustained closure before the drowsy state (seconds)
    pub drowsy_secs: f64,

    /// Sustained closure before the microsleep state (seconds)
    pub microsleep_secs: f64,

    /// Consecutive closed frames before a closure counts as real (~0.5s at 30fps)
    pub min_closed_frames: u32,

    /// Enable the drowsiness detector
    pub detect_drowsiness: bool,

    /// Enable the microsleep detector
    pub detect_microsleep: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ear_threshold: 0.2,
            drowsy_secs: 2.0,
            microsleep_secs: 5.0,
            min_closed_frames: 15,
            detect_drowsiness: true,
            detect_microsleep: true,
        }
    }
}

impl EngineConfig {
    /// Create strict config (lower thresholds, earlier alerts)
    pub fn strict() -> Self {
        Self {
            ear_threshold: 0.25,
            drowsy_secs: 1.5,
            microsleep_secs: 3.0,
            ..Default::default()
        }
    }

    /// Create lenient config (higher thresholds, later alerts)
    pub fn lenient() -> Self {
        Self {
            drowsy_secs: 3.0,
            microsleep_secs: 8.0,
            ..Default::default()
        }
    }

    /// Check the snapshot before it drives a classification.
    ///
    /// The threshold-order check only applies when both detectors are on;
    /// equal thresholds are allowed (the microsleep check wins the tie).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ear_threshold.is_finite() || self.ear_threshold <= 0.0 {
            return Err(ConfigError::InvalidEarThreshold(self.ear_threshold));
        }
        if !self.drowsy_secs.is_finite() || self.drowsy_secs < 0.0 {
            return Err(ConfigError::InvalidDuration {
                field: "drowsy",
                value: self.drowsy_secs,
            });
        }
        if !self.microsleep_secs.is_finite() || self.microsleep_secs < 0.0 {
            return Err(ConfigError::InvalidDuration {
                field: "microsleep",
                value: self.microsleep_secs,
            });
        }
        if self.detect_drowsiness
            && self.detect_microsleep
            && self.microsleep_secs < self.drowsy_secs
        {
            return Err(ConfigError::ThresholdOrder {
                drowsy_secs: self.drowsy_secs,
                microsleep_secs: self.microsleep_secs,
            });
        }
        if self.min_closed_frames == 0 {
            return Err(ConfigError::EmptyDebounceWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        assert!(EngineConfig::strict().validate().is_ok());
        assert!(EngineConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_ear_threshold() {
        let config = EngineConfig {
            ear_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            ear_threshold: -0.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_durations() {
        let config = EngineConfig {
            drowsy_secs: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            microsleep_secs: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_threshold_order() {
        let config = EngineConfig {
            drowsy_secs: 5.0,
            microsleep_secs: 2.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdOrder {
                drowsy_secs: 5.0,
                microsleep_secs: 2.0,
            })
        );

        // Inverted order is fine when only one detector evaluates it
        let config = EngineConfig {
            drowsy_secs: 5.0,
            microsleep_secs: 2.0,
            detect_drowsiness: false,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        // Equal thresholds are a valid tie, resolved to microsleep
        let config = EngineConfig {
            drowsy_secs: 3.0,
            microsleep_secs: 3.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let config = EngineConfig {
            min_closed_frames: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyDebounceWindow));
    }
}
