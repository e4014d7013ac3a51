//! Browser-free model of the photo guestbook.
//!
//! The `client` crate renders the guestbook with Leptos and talks to the
//! browser; everything it decides about entries, geometry and card motion
//! lives here so it can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`entry`] | Entries, submissions, travel direction and off-screen spans |
//! | [`guestbook`] | Capped, ordered entry list with unique ids |
//! | [`export`] | In-memory workbook rebuilt from the entry list |
//! | [`motion`] | Per-card motion state machine, poses and tweens |
//! | [`gesture`] | Tap versus drag detection for a pointer press |
//! | [`skin`] | Card layouts and the photo/message fallback rule |
//! | [`config`] | Defaults and overrides |
//! | [`record`] | Body of the recording POST |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod entry;
pub mod export;
pub mod gesture;
pub mod guestbook;
pub mod motion;
pub mod record;
pub mod skin;
