//! Fire-and-forget recording of new entries to the sheet endpoint.
//!
//! Client-side (csr): a JSON `POST` via `gloo-net`, spawned and never awaited
//! by the caller. Native builds: a no-op.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged at warn level and otherwise ignored; the entry is
//! already on the board and the visitor is not told.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use board::record::RecordPayload;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("could not encode record: {0}")]
    Encode(String),
    #[error("record request failed: {0}")]
    Transport(String),
    #[error("record request rejected: {0}")]
    Status(u16),
}

/// Start recording `payload` at `endpoint` without waiting for the result.
pub fn notify(endpoint: &str, payload: RecordPayload) {
    #[cfg(feature = "csr")]
    {
        let endpoint = endpoint.to_owned();
        leptos::task::spawn_local(async move {
            match post(&endpoint, &payload).await {
                Ok(()) => log::debug!("recorded entry from {}", payload.name),
                Err(e) => log::warn!("{e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
    }
}

/// `POST` `payload` as JSON and check for a 2xx answer.
///
/// # Errors
///
/// Returns [`RecordError`] when the body cannot be built, the request cannot
/// be sent, or the endpoint answers with a non-2xx status.
pub async fn post(endpoint: &str, payload: &RecordPayload) -> Result<(), RecordError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(payload)
            .map_err(|e| RecordError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| RecordError::Transport(e.to_string()))?;
        check_status(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, payload);
        Ok(())
    }
}

#[cfg(any(test, feature = "csr"))]
fn check_status(status: u16) -> Result<(), RecordError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(RecordError::Status(status)) }
}
