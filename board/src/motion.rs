//! Floating card motion: the per-card state machine and tween descriptions.
//!
//! A card is always in one of three states. It starts out [`MotionState::Traveling`],
//! is paused by a tap or a drag, and returns to traveling when the pause ends.
//! Every return to traveling restarts the traversal from the entry edge, never
//! from where the card was paused.
//!
//! The browser side owns exactly one travel driver per card. The driver asks
//! [`Motion::next_step`] what to do between traversals; while the card is
//! paused it waits for a resume signal, which is sent whenever a transition
//! reports that traveling resumed.
//!
//! Tweens are plain data ([`Tween`]); the client turns them into browser
//! animations and uses [`Tween::sample`] to freeze a card where it was stopped.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{ENLARGED_SCALE, GROW_MS, SHRINK_MS};
use crate::entry::TravelSpan;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionState {
    #[default]
    Traveling,
    PausedForClick,
    PausedForDrag,
}

/// What the travel driver does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Jump to the entry edge and run one traversal.
    Travel,
    /// Wait for a resume signal, then ask again.
    AwaitResume,
    /// The card is gone; stop for good.
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct Motion {
    state: MotionState,
    retired: bool,
    /// Count of click pauses so far; identifies the current one.
    click_pauses: u64,
}

impl Motion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    #[must_use]
    pub fn next_step(&self) -> Step {
        match (self.retired, self.state) {
            (true, _) => Step::Exit,
            (false, MotionState::Traveling) => Step::Travel,
            (false, _) => Step::AwaitResume,
        }
    }

    /// A tap on the card. Returns a ticket for the click pause it starts.
    ///
    /// Taps are only honoured while traveling.
    pub fn tap(&mut self) -> Option<u64> {
        if self.retired || self.state != MotionState::Traveling {
            return None;
        }
        self.state = MotionState::PausedForClick;
        self.click_pauses += 1;
        Some(self.click_pauses)
    }

    /// The click pause identified by `ticket` finished. Returns `true` if
    /// traveling resumed.
    ///
    /// A no-op unless that same pause is still in effect: a drag that started
    /// during the hold takes over, and a stale hold must not end a later pause.
    pub fn finish_click(&mut self, ticket: u64) -> bool {
        if ticket != self.click_pauses {
            return false;
        }
        self.resume_from(MotionState::PausedForClick)
    }

    /// A drag gesture began. Returns `true` when the running tween must stop.
    pub fn begin_drag(&mut self) -> bool {
        if self.retired || self.state == MotionState::PausedForDrag {
            return false;
        }
        self.state = MotionState::PausedForDrag;
        true
    }

    /// The drag was released. Returns `true` if traveling resumed.
    pub fn end_drag(&mut self) -> bool {
        self.resume_from(MotionState::PausedForDrag)
    }

    /// The card was unmounted. Every later step is [`Step::Exit`].
    pub fn retire(&mut self) {
        self.retired = true;
    }

    fn resume_from(&mut self, paused: MotionState) -> bool {
        if self.retired || self.state != paused {
            return false;
        }
        self.state = MotionState::Traveling;
        true
    }
}

/// Transform and opacity of a card relative to its resting place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    pub x: f64,
    /// Vertical offset from the entry's lane, left behind by drags.
    pub y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl CardPose {
    /// Rest values (scale 1, no rotation, opaque) at horizontal position `x`.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0, rotate_deg: 0.0, opacity: 1.0 }
    }

    #[must_use]
    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// CSS `transform` value for this pose.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
            self.x, self.y, self.rotate_deg, self.scale
        )
    }

    fn lerp(&self, to: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
            rotate_deg: mix(self.rotate_deg, to.rotate_deg),
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    /// CSS timing function name.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
        }
    }

    /// Progress after easing, for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A single interpolation between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: CardPose,
    pub to: CardPose,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Tween {
    /// One traversal across `span`, keeping the card's vertical offset.
    #[must_use]
    pub fn travel(span: TravelSpan, duration_ms: u32, y: f64) -> Self {
        Self {
            from: CardPose::at(span.from_x, y),
            to: CardPose::at(span.to_x, y),
            duration_ms,
            easing: Easing::Linear,
        }
    }

    /// Grow a stopped card to the enlarged scale.
    #[must_use]
    pub fn grow(from: CardPose) -> Self {
        Self { from, to: from.with_scale(ENLARGED_SCALE), duration_ms: GROW_MS, easing: Easing::EaseOut }
    }

    /// Shrink an enlarged card back to rest scale.
    #[must_use]
    pub fn shrink(from: CardPose) -> Self {
        Self { from, to: from.with_scale(1.0), duration_ms: SHRINK_MS, easing: Easing::EaseOut }
    }

    /// A zero-duration tween is applied by setting the end pose directly.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }

    /// Pose `elapsed_ms` into the tween, clamped to its end points.
    #[must_use]
    pub fn sample(&self, elapsed_ms: f64) -> CardPose {
        if self.is_instant() {
            return self.to;
        }
        let t = elapsed_ms / f64::from(self.duration_ms);
        self.from.lerp(&self.to, self.easing.apply(t))
    }
}
