//! Outbound HTTP.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guestbook has no backend of its own. `recorder` forwards each new
//! entry to the external sheet endpoint and never reports back to the page.

pub mod recorder;
