//! # client
//!
//! Leptos + WASM front end of the photo guestbook. Visitors leave a name, a
//! short message and optionally a photo; each entry becomes a card drifting
//! across the board. Placement, motion rules and configuration come from the
//! `board` crate; this crate renders them and talks to the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: logging, configuration, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, rejected) = app::page_config();
    let level = if config.debug { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    for err in rejected {
        log::warn!("ignoring override: {err}");
    }
    log::info!("guestbook starting with {} cards", config.skin);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config /> });
}
