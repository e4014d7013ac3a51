//! Reactive application state shared through Leptos context.
//!
//! Each struct is held in an `RwSignal` provided by [`crate::app::App`]:
//! the guestbook entries, the submission form, and the photo capture flow.

pub mod capture;
pub mod form;
pub mod guestbook;
