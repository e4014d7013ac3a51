//! Entry list state owned by the guestbook board.
//!
//! Wraps [`board::guestbook::Guestbook`] together with the random source used
//! to place new cards, so one signal update both creates and stores an entry.

#[cfg(test)]
#[path = "guestbook_test.rs"]
mod guestbook_test;

use board::entry::{Entry, EntryId, Submission, TravelSpan, Viewport};
use board::guestbook::Guestbook;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Clone, Debug)]
pub struct GuestbookState {
    pub book: Guestbook,
    rng: StdRng,
}

impl GuestbookState {
    #[must_use]
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self { book: Guestbook::new(capacity), rng: StdRng::seed_from_u64(seed) }
    }

    /// Create and store an entry, returning a copy of it.
    pub fn add(&mut self, now_ms: EntryId, submission: Submission, viewport: &Viewport, card_height: f64) -> Entry {
        self.book
            .add(now_ms, submission, viewport, card_height, &mut self.rng)
            .clone()
    }

    pub fn relayout(&mut self, viewport: &Viewport) {
        self.book.relayout(viewport);
    }

    /// Current span and traversal time of a live entry.
    #[must_use]
    pub fn travel_plan(&self, id: EntryId) -> Option<(TravelSpan, u32)> {
        self.book.get(id).map(|e| (e.span, e.travel_ms()))
    }
}
