//! Section presence state machine
//!
//! ```text
//! Entering
//!   ↓ fade-in complete
//! Shown
//!   ↓ another tab selected
//! Exiting
//!   ↓ fade-out complete (section unmounted, next one mounted)
//! Entering
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::TabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Mounted and fading in
    Entering,
    /// Mounted and fully visible
    Shown,
    /// Still mounted, fading out before unmount
    Exiting,
}

impl Phase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: Phase) -> bool {
        match (self, target) {
            (Phase::Entering, Phase::Shown) => true,
            // A new selection may interrupt the fade-in
            (Phase::Entering, Phase::Exiting) => true,
            (Phase::Shown, Phase::Exiting) => true,
            // The replacement section starts entering
            (Phase::Exiting, Phase::Entering) => true,
            (a, b) if *a == b => true,
            _ => false,
        }
    }

    /// Checked transition, for callers that drive the machine step by step
    pub fn transition_to(&mut self, target: Phase) -> Result<(), TabError> {
        if !self.can_transition_to(target) {
            return Err(TabError::InvalidTransition {
                from: self.to_string(),
                to: target.to_string(),
            });
        }
        *self = target;
        Ok(())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Entering => "entering",
            Phase::Shown => "shown",
            Phase::Exiting => "exiting",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    In,
    Out,
}

/// A linear opacity ramp anchored at a start instant.
///
/// A zero duration is complete immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    started: Instant,
    duration: Duration,
    direction: FadeDirection,
    /// Opacity a fade-out starts from
    from: f32,
}

impl Fade {
    pub fn fade_in(started: Instant, duration: Duration) -> Self {
        Self {
            started,
            duration,
            direction: FadeDirection::In,
            from: 0.0,
        }
    }

    /// Fade out starting at opacity `from`, at the rate of a full fade over
    /// `duration`. A fade-in cut short therefore exits from where it was.
    pub fn fade_out(started: Instant, duration: Duration, from: f32) -> Self {
        let from = from.clamp(0.0, 1.0);
        Self {
            started,
            duration: duration.mul_f32(from),
            direction: FadeDirection::Out,
            from,
        }
    }

    /// Fraction of the fade that has elapsed, in `[0, 1]`
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Opacity at `now`, in `[0, 1]`
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.direction {
            FadeDirection::In => self.progress(now),
            FadeDirection::Out => self.from * (1.0 - self.progress(now)),
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(Phase::Entering.can_transition_to(Phase::Shown));
        assert!(Phase::Entering.can_transition_to(Phase::Exiting));
        assert!(Phase::Shown.can_transition_to(Phase::Exiting));
        assert!(Phase::Exiting.can_transition_to(Phase::Entering));
        assert!(Phase::Shown.can_transition_to(Phase::Shown));
    }

    #[test]
    fn test_invalid_transitions() {
        // An exiting section never becomes visible again
        assert!(!Phase::Exiting.can_transition_to(Phase::Shown));
        assert!(!Phase::Shown.can_transition_to(Phase::Entering));

        let mut phase = Phase::Exiting;
        assert!(phase.transition_to(Phase::Shown).is_err());
        assert_eq!(phase, Phase::Exiting);
    }

    #[test]
    fn test_fade_in_is_monotone_and_clamped() {
        let start = Instant::now();
        let fade = Fade::fade_in(start, Duration::from_millis(500));

        let mut last = -1.0;
        for ms in (0..=700).step_by(50) {
            let opacity = fade.opacity(start + Duration::from_millis(ms));
            assert!((0.0..=1.0).contains(&opacity));
            assert!(opacity >= last);
            last = opacity;
        }
        assert_eq!(fade.opacity(start), 0.0);
        assert_eq!(fade.opacity(start + Duration::from_secs(2)), 1.0);
    }

    #[test]
    fn test_fade_out_mirrors_fade_in() {
        let start = Instant::now();
        let fade = Fade::fade_out(start, Duration::from_millis(500), 1.0);
        let mid = start + Duration::from_millis(250);

        assert_eq!(fade.opacity(start), 1.0);
        assert!((fade.opacity(mid) - 0.5).abs() < 1e-3);
        assert!(!fade.is_complete(mid));
        assert!(fade.is_complete(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_partial_fade_out_continues_from_current_opacity() {
        let start = Instant::now();
        let fade = Fade::fade_out(start, Duration::from_millis(500), 0.2);

        assert!((fade.opacity(start) - 0.2).abs() < 1e-6);
        assert!((fade.opacity(start + Duration::from_millis(50)) - 0.1).abs() < 1e-3);
        assert!(!fade.is_complete(start + Duration::from_millis(99)));
        assert!(fade.is_complete(start + Duration::from_millis(101)));
        assert_eq!(fade.opacity(start + Duration::from_millis(101)), 0.0);
    }

    #[test]
    fn test_fade_out_from_invisible_is_complete() {
        let start = Instant::now();
        let fade = Fade::fade_out(start, Duration::from_millis(500), 0.0);
        assert!(fade.is_complete(start));
        assert_eq!(fade.opacity(start), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        let fade = Fade::fade_in(start, Duration::ZERO);
        assert!(fade.is_complete(start));
        assert_eq!(fade.opacity(start), 1.0);
    }

    #[test]
    fn test_instant_before_start_is_clamped() {
        let earlier = Instant::now();
        let fade = Fade::fade_in(earlier + Duration::from_secs(1), Duration::from_millis(500));
        assert_eq!(fade.progress(earlier), 0.0);
    }
}
