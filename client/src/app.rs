//! Root application component and configuration resolution.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use board::config::{ConfigError, GuestbookConfig};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::guestbook_board::GuestbookBoard;
use crate::state::capture::CaptureState;
use crate::state::form::FormState;
use crate::state::guestbook::GuestbookState;
use crate::util::browser;

/// Build-time overrides, baked in by `trunk build`.
const BUILD_RECORD_ENDPOINT: Option<&str> = option_env!("GUESTBOOK_RECORD_ENDPOINT");
const BUILD_SKIN: Option<&str> = option_env!("GUESTBOOK_SKIN");

/// Defaults, then build-time overrides, then the page query string.
///
/// Rejected overrides are returned alongside the config so they can be
/// logged once logging is up; each one leaves the previous value in place.
pub fn resolve_config(
    build_endpoint: Option<&str>,
    build_skin: Option<&str>,
    search: &str,
) -> (GuestbookConfig, Vec<ConfigError>) {
    let mut config = GuestbookConfig::default();
    let mut rejected = Vec::new();
    if let Err(e) = config.apply_build_env(build_endpoint, build_skin) {
        rejected.push(e);
    }
    rejected.extend(config.apply_query(search));
    (config, rejected)
}

/// [`resolve_config`] for the running page.
pub fn page_config() -> (GuestbookConfig, Vec<ConfigError>) {
    resolve_config(BUILD_RECORD_ENDPOINT, BUILD_SKIN, &browser::location_search())
}

/// Root application component.
///
/// Provides the config and all shared state contexts.
#[component]
pub fn App(config: GuestbookConfig) -> impl IntoView {
    provide_meta_context();

    let guestbook = RwSignal::new(GuestbookState::new(config.max_entries, browser::random_seed()));
    let form = RwSignal::new(FormState::default());
    let capture = RwSignal::new(CaptureState::default());
    let title = format!("{} {}", config.title, config.subtitle);

    provide_context(config);
    provide_context(guestbook);
    provide_context(form);
    provide_context(capture);

    view! {
        <Title text=title />
        <GuestbookBoard />
    }
}
