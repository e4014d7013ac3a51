//! Pointer press tracking: telling a tap from a drag.
//!
//! A press becomes a drag once the pointer travels [`DRAG_THRESHOLD_PX`] from
//! where it went down. A press released before that is a tap.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::DRAG_THRESHOLD_PX;
use crate::motion::CardPose;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    origin_x: f64,
    origin_y: f64,
    /// Pose the card was frozen at when the drag began.
    grabbed: Option<CardPose>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    Tap,
    /// Drag ended with the card at `pose`.
    Drop { pose: CardPose },
}

impl Press {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { origin_x: x, origin_y: y, grabbed: None }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grabbed.is_some()
    }

    /// Whether moving to `(x, y)` turns this press into a drag.
    #[must_use]
    pub fn crosses_threshold(&self, x: f64, y: f64) -> bool {
        !self.is_dragging() && (x - self.origin_x).hypot(y - self.origin_y) >= DRAG_THRESHOLD_PX
    }

    /// Begin dragging a card frozen at `pose`.
    pub fn grab(&mut self, pose: CardPose) {
        self.grabbed = Some(pose);
    }

    /// Card pose for the pointer at `(x, y)`, or `None` before a drag began.
    #[must_use]
    pub fn drag_pose(&self, x: f64, y: f64) -> Option<CardPose> {
        self.grabbed
            .map(|pose| pose.translated(x - self.origin_x, y - self.origin_y))
    }

    /// Finish the press with the pointer at `(x, y)`.
    #[must_use]
    pub fn release(self, x: f64, y: f64) -> Release {
        match self.drag_pose(x, y) {
            Some(pose) => Release::Drop { pose },
            None => Release::Tap,
        }
    }
}
