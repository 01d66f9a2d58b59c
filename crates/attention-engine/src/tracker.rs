//! Closure-duration tracking with blink debounce

use std::time::{Duration, Instant};

/// Turns a per-frame closed/open signal into a continuous closed duration.
///
/// A closure only counts as real once `min_closed_frames` consecutive closed
/// frames have been seen; shorter streaks (blinks) never latch a duration.
/// A single open frame clears everything immediately, with no grace period.
///
/// Invariant: `closed_since` is set iff the streak has reached the debounce
/// floor and has been unbroken since that instant.
#[derive(Debug, Clone, Default)]
pub struct ClosureTracker {
    /// Consecutive frames counted closed
    closed_frames: u32,

    /// Wall-clock instant the closure latched (debounce floor met)
    closed_since: Option<Instant>,
}

impl ClosureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame; returns the latched closed duration, if any.
    ///
    /// Threshold comparisons downstream use this wall-clock duration; the
    /// frame count only gates the fixed debounce floor.
    pub fn update(
        &mut self,
        closed: bool,
        now: Instant,
        min_closed_frames: u32,
    ) -> Option<Duration> {
        if !closed {
            self.reset();
            return None;
        }

        self.closed_frames = self.closed_frames.saturating_add(1);

        // Latch once; the start instant is not refreshed while the streak holds.
        if self.closed_frames >= min_closed_frames && self.closed_since.is_none() {
            self.closed_since = Some(now);
        }

        self.closed_since.map(|since| now.duration_since(since))
    }

    /// Consecutive closed frames seen so far
    pub fn closed_frames(&self) -> u32 {
        self.closed_frames
    }

    /// Whether a closure is currently latched
    pub fn is_latched(&self) -> bool {
        self.closed_since.is_some()
    }

    /// Clear the streak (open frame or session restart)
    pub fn reset(&mut self) {
        self.closed_frames = 0;
        self.closed_since = None;
    }
}
