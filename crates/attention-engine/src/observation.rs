//! Per-frame landmark observations

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One frame from the landmark source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameObservation {
    /// Face found; per-eye eye-aspect-ratios
    Detected { left_ear: f32, right_ear: f32 },

    /// No face in the frame
    NotDetected,
}

impl FrameObservation {
    /// Combined eye openness for the frame (mean of both eyes).
    ///
    /// Pure; `None` when no face was detected.
    pub fn combined_ear(&self) -> Option<f32> {
        match *self {
            FrameObservation::Detected { left_ear, right_ear } => {
                Some((left_ear + right_ear) / 2.0)
            }
            FrameObservation::NotDetected => None,
        }
    }

    /// Whether both EAR values are finite and non-negative
    pub fn is_valid(&self) -> bool {
        match *self {
            FrameObservation::Detected { left_ear, right_ear } => {
                left_ear.is_finite()
                    && right_ear.is_finite()
                    && left_ear >= 0.0
                    && right_ear >= 0.0
            }
            FrameObservation::NotDetected => true,
        }
    }

    /// Downgrade frames carrying NaN, infinite, or negative EARs to `NotDetected`.
    ///
    /// Logged locally; never propagated as an error.
    pub fn sanitized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            warn!(observation = ?self, "rejecting malformed EAR values, treating as no face");
            FrameObservation::NotDetected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_ear_is_mean() {
        let obs = FrameObservation::Detected {
            left_ear: 0.2,
            right_ear: 0.4,
        };
        assert_eq!(obs.combined_ear(), Some(0.3));
        assert_eq!(FrameObservation::NotDetected.combined_ear(), None);
    }

    #[test]
    fn test_sanitize_rejects_nan() {
        let obs = FrameObservation::Detected {
            left_ear: f32::NAN,
            right_ear: 0.3,
        };
        assert_eq!(obs.sanitized(), FrameObservation::NotDetected);
    }

    #[test]
    fn test_sanitize_rejects_negative() {
        let obs = FrameObservation::Detected {
            left_ear: 0.3,
            right_ear: -0.1,
        };
        assert_eq!(obs.sanitized(), FrameObservation::NotDetected);
    }

    #[test]
    fn test_sanitize_keeps_valid_frames() {
        let obs = FrameObservation::Detected {
            left_ear: 0.25,
            right_ear: 0.31,
        };
        assert_eq!(obs.sanitized(), obs);
        assert_eq!(
            FrameObservation::NotDetected.sanitized(),
            FrameObservation::NotDetected
        );
    }
}
