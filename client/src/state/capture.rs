//! Photo capture flow state: countdown, then camera.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use crate::util::camera::CaptureError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Idle,
    /// Countdown overlay showing this digit.
    Countdown(u8),
    /// Waiting for camera permission and the first video frame.
    Camera,
}

impl CaptureState {
    /// A capture is in progress; further capture requests are ignored.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    /// Digit for the countdown overlay, if it is showing.
    #[must_use]
    pub fn countdown_digit(self) -> Option<u8> {
        match self {
            Self::Countdown(digit) => Some(digit),
            _ => None,
        }
    }

    /// End the capture attempt, whatever its outcome, and say what the page
    /// does next. The state is always back at [`CaptureState::Idle`].
    pub fn settle(&mut self, result: Result<String, CaptureError>) -> CaptureOutcome {
        *self = Self::Idle;
        match result {
            Ok(image) => CaptureOutcome::Photo(image),
            Err(e) if e.alerts_user() => CaptureOutcome::Alert(e.to_string()),
            Err(e) => CaptureOutcome::Dropped(e),
        }
    }
}

/// What follows a finished capture attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Add an entry with this PNG data URL.
    Photo(String),
    /// Tell the visitor with an alert.
    Alert(String),
    /// Log only.
    Dropped(CaptureError),
}
