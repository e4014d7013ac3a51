//! Guestbook UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GuestbookBoard` owns the page: it renders the title, the submission form,
//! the countdown overlay and one `FloatingEntry` per live entry, reading and
//! writing shared state from Leptos context providers.

pub mod countdown_overlay;
pub mod entry_form;
pub mod floating_entry;
pub mod guestbook_board;
pub mod title_banner;
