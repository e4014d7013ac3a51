//! Browser glue used by the guestbook components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here behind the `csr` feature, so
//! components stay declarative and native test builds see inert fallbacks.

pub mod browser;
pub mod camera;
pub mod tween;
pub mod upload;
pub mod viewport;
