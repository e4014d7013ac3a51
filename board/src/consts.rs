//! Shared numeric constants for the guestbook board.

// ── Entries ─────────────────────────────────────────────────────

/// Maximum number of live entries; older ones are dropped first.
pub const MAX_ENTRIES: usize = 20;

/// Maximum length of the visitor name input, in characters.
pub const NAME_MAX_LEN: usize = 10;

// ── Geometry ────────────────────────────────────────────────────

/// Distance beyond the container edge where a card starts and ends its trip.
pub const OFFSCREEN_MARGIN_PX: f64 = 200.0;

// ── Travel ──────────────────────────────────────────────────────

/// Shortest traversal duration, in seconds.
pub const SPEED_MIN_SECS: f64 = 20.0;

/// Width of the random traversal duration range, in seconds.
pub const SPEED_SPREAD_SECS: f64 = 10.0;

// ── Click pause ─────────────────────────────────────────────────

/// Card scale while enlarged after a tap.
pub const ENLARGED_SCALE: f64 = 2.0;

/// Time to grow from rest scale to [`ENLARGED_SCALE`].
pub const GROW_MS: u32 = 300;

/// Time the enlarged card is held before shrinking.
pub const HOLD_MS: u32 = 3_000;

/// Time to shrink back to rest scale. Zero means an instant jump.
pub const SHRINK_MS: u32 = 0;

// ── Pointer ─────────────────────────────────────────────────────

/// Pointer travel, in CSS pixels, before a press turns into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

// ── Countdown ───────────────────────────────────────────────────

/// Digits shown before a photo is captured, one per second.
pub const COUNTDOWN_DIGITS: [u8; 3] = [3, 2, 1];

/// Time each countdown digit stays on screen.
pub const COUNTDOWN_STEP_MS: u32 = 1_000;

/// How long the camera preview may take to report its first frame size
/// before the capture is abandoned.
pub const CAMERA_METADATA_TIMEOUT_MS: u32 = 10_000;
