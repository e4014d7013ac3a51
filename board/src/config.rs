//! Guestbook configuration.
//!
//! Defaults match the event the guestbook was built for. Two override layers
//! exist: build-time environment variables (read by the client through
//! `option_env!` and passed to [`GuestbookConfig::apply_build_env`]) and the
//! page query string ([`GuestbookConfig::apply_query`]).
//!
//! Recognised keys:
//! - `GUESTBOOK_RECORD_ENDPOINT`: URL the recording POST is sent to
//! - `GUESTBOOK_SKIN` / `?skin=`: `compact` (default) or `large`
//! - `?debug=1`: verbose logging

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::borrow::Cow;

use crate::consts::{MAX_ENTRIES, NAME_MAX_LEN};
use crate::skin::CardSkin;

pub const DEFAULT_RECORD_ENDPOINT: &str = "https://api.sheetbest.com/sheets/130b0844-e47d-4057-99d8-0500fd0fca56";
pub const DEFAULT_NAME: &str = "드림대학";
pub const DEFAULT_MESSAGE: &str = "너희의 꿈을 응원해!";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown card skin: {0:?} (expected \"compact\" or \"large\")")]
    UnknownSkin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuestbookConfig {
    pub record_endpoint: String,
    pub default_name: String,
    pub default_message: String,
    pub name_max_len: usize,
    pub max_entries: usize,
    pub skin: CardSkin,
    pub title: String,
    pub subtitle: String,
    pub debug: bool,
}

impl Default for GuestbookConfig {
    fn default() -> Self {
        Self {
            record_endpoint: DEFAULT_RECORD_ENDPOINT.to_owned(),
            default_name: DEFAULT_NAME.to_owned(),
            default_message: DEFAULT_MESSAGE.to_owned(),
            name_max_len: NAME_MAX_LEN,
            max_entries: MAX_ENTRIES,
            skin: CardSkin::default(),
            title: "2025 성년의 날 기념".to_owned(),
            subtitle: "너의 꿈을 응원해!".to_owned(),
            debug: false,
        }
    }
}

impl GuestbookConfig {
    /// Apply build-time overrides. `None` and blank values keep the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSkin`] if `skin` names no known skin. The
    /// endpoint override is still applied in that case.
    pub fn apply_build_env(&mut self, endpoint: Option<&str>, skin: Option<&str>) -> Result<(), ConfigError> {
        if let Some(endpoint) = non_blank(endpoint) {
            self.record_endpoint = endpoint.trim_end_matches('/').to_owned();
        }
        if let Some(skin) = non_blank(skin) {
            self.skin = skin.parse()?;
        }
        Ok(())
    }

    /// Apply overrides from a `?key=value&...` query string. Keys and values
    /// are percent-decoded first.
    ///
    /// Unknown keys are ignored. An unknown skin keeps the current one and is
    /// reported back so the caller can log it.
    pub fn apply_query(&mut self, search: &str) -> Option<ConfigError> {
        let mut rejected = None;
        for (key, value) in query_pairs(search) {
            match key.as_ref() {
                "skin" => match value.parse() {
                    Ok(skin) => self.skin = skin,
                    Err(err) => rejected = Some(err),
                },
                "debug" => self.debug = matches!(value.as_ref(), "1" | "true"),
                _ => {}
            }
        }
        rejected
    }

    /// `maxlength` of the message input for the active skin.
    #[must_use]
    pub fn message_max_len(&self) -> usize {
        self.skin.message_max_len()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Percent-decoded `key=value` pairs. A pair that does not decode to UTF-8
/// is kept as written.
fn query_pairs(search: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (percent_decode(key), percent_decode(value))
        })
}

fn percent_decode(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
