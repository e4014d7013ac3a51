//! The capped, ordered list of live entries.

#[cfg(test)]
#[path = "guestbook_test.rs"]
mod guestbook_test;

use rand::Rng;

use crate::entry::{Entry, EntryId, Submission, Viewport};

#[derive(Debug, Clone)]
pub struct Guestbook {
    entries: Vec<Entry>,
    capacity: usize,
    last_id: Option<EntryId>,
}

impl Guestbook {
    /// An empty guestbook holding at most `capacity` entries (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { entries: Vec::new(), capacity: capacity.max(1), last_id: None }
    }

    /// Live entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Id for an entry created at `now_ms`, strictly above every earlier id.
    pub fn next_id(&mut self, now_ms: EntryId) -> EntryId {
        let id = match self.last_id {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_id = Some(id);
        id
    }

    /// Create an entry and append it, dropping the oldest beyond capacity.
    pub fn add<R: Rng + ?Sized>(
        &mut self,
        now_ms: EntryId,
        submission: Submission,
        viewport: &Viewport,
        card_height: f64,
        rng: &mut R,
    ) -> &Entry {
        let id = self.next_id(now_ms);
        self.push(Entry::spawn(id, submission, viewport, card_height, rng));
        &self.entries[self.entries.len() - 1]
    }

    /// Append an entry, dropping the oldest beyond capacity.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        if self.entries.len() > self.capacity {
            let overflow = self.entries.len() - self.capacity;
            self.entries.drain(..overflow);
        }
    }

    /// Recompute every entry's span for the current viewport.
    pub fn relayout(&mut self, viewport: &Viewport) {
        for entry in &mut self.entries {
            entry.relayout(viewport);
        }
    }
}
