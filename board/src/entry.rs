//! Guestbook entries and their off-screen travel geometry.
//!
//! An entry is created once per submission. Everything random about it
//! (direction, speed, vertical lane) is decided at creation and never changes;
//! only the horizontal span is recomputed when the viewport is resized.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use rand::Rng;

use crate::config::GuestbookConfig;
use crate::consts::{OFFSCREEN_MARGIN_PX, SPEED_MIN_SECS, SPEED_SPREAD_SECS};

/// Render key of an entry: creation time in epoch milliseconds.
pub type EntryId = u64;

/// Which way a card crosses the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Enters past the left edge, leaves past the right edge.
    LeftToRight,
    /// Enters past the right edge, leaves past the left edge.
    RightToLeft,
}

impl Direction {
    /// Pick a direction with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) { Self::RightToLeft } else { Self::LeftToRight }
    }

    /// `+1` for left-to-right, `-1` for right-to-left.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::LeftToRight => 1,
            Self::RightToLeft => -1,
        }
    }
}

/// Layout measurements taken from the browser at the moment they are needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width of the board container; zero when it has no layout yet.
    pub container_width: f64,
    pub window_width: f64,
    pub window_height: f64,
}

impl Viewport {
    /// Container width, or the window width when the container reports none.
    #[must_use]
    pub fn travel_width(&self) -> f64 {
        if self.container_width > 0.0 { self.container_width } else { self.window_width }
    }
}

/// Horizontal start and end of one traversal, both off screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelSpan {
    pub from_x: f64,
    pub to_x: f64,
}

impl TravelSpan {
    #[must_use]
    pub fn new(direction: Direction, width: f64) -> Self {
        let near = -OFFSCREEN_MARGIN_PX;
        let far = width + OFFSCREEN_MARGIN_PX;
        match direction {
            Direction::LeftToRight => Self { from_x: near, to_x: far },
            Direction::RightToLeft => Self { from_x: far, to_x: near },
        }
    }
}

/// Name, message and photo of a submission after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub message: String,
    pub image: Option<String>,
}

impl Submission {
    /// Trim the raw form values and fall back to the configured defaults.
    #[must_use]
    pub fn resolve(name: &str, message: &str, image: Option<String>, config: &GuestbookConfig) -> Self {
        Self {
            name: or_default(name, &config.default_name),
            message: or_default(message, &config.default_message),
            image,
        }
    }
}

fn or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() { default.to_owned() } else { trimmed.to_owned() }
}

/// One visitor card.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub message: String,
    /// Photo as a `data:` URL.
    pub image: Option<String>,
    /// Distance from the top of the board, in CSS pixels.
    pub y: f64,
    pub direction: Direction,
    pub span: TravelSpan,
    /// Seconds one traversal takes.
    pub speed_secs: f64,
}

impl Entry {
    /// Create an entry with a random direction, speed and vertical lane.
    pub fn spawn<R: Rng + ?Sized>(
        id: EntryId,
        submission: Submission,
        viewport: &Viewport,
        card_height: f64,
        rng: &mut R,
    ) -> Self {
        let direction = Direction::random(rng);
        let speed_secs = rng.random::<f64>() * SPEED_SPREAD_SECS + SPEED_MIN_SECS;
        let y = rng.random::<f64>() * (viewport.window_height - card_height).max(0.0);
        Self {
            id,
            name: submission.name,
            message: submission.message,
            image: submission.image,
            y,
            direction,
            span: TravelSpan::new(direction, viewport.travel_width()),
            speed_secs,
        }
    }

    /// Recompute the horizontal span for a new viewport. Direction is kept.
    pub fn relayout(&mut self, viewport: &Viewport) {
        self.span = TravelSpan::new(self.direction, viewport.travel_width());
    }

    /// Traversal duration in whole milliseconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn travel_ms(&self) -> u32 {
        (self.speed_secs * 1000.0).round().max(0.0) as u32
    }
}
