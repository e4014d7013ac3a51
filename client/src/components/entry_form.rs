//! Submission panel: name and message inputs, photo upload and capture.
//!
//! Every path ends in the `on_add` callback with an optional image data URL;
//! the board resolves defaults and creates the entry.

use board::config::GuestbookConfig;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::capture::CaptureOutcome;
use crate::state::capture::CaptureState;
use crate::state::form::{FormField, FormState};

#[component]
pub fn EntryForm(on_add: Callback<Option<String>>) -> impl IntoView {
    let config = expect_context::<GuestbookConfig>();
    let form = expect_context::<RwSignal<FormState>>();
    let capture = expect_context::<RwSignal<CaptureState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_logo_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = file_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Picking the same file again must fire `change` again.
            input.set_value("");
            leptos::task::spawn_local(async move {
                match crate::util::upload::read_data_url(file).await {
                    Ok(image) => on_add.run(Some(image)),
                    Err(e) => log::debug!("upload dropped: {e}"),
                }
            });
        }
    };

    let on_capture = move |_| {
        if capture.get_untracked().is_busy() {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(run_capture(capture, on_add));
    };

    view! {
        <div class="entry-form">
            <img class="entry-form__logo" src="/milal-logo.png" alt="로고" on:click=on_logo_click />
            <input
                class="entry-form__input"
                type="text"
                placeholder="이름"
                maxlength=config.name_max_len
                prop:value=move || form.get().name
                on:input=move |ev| form.update(|f| f.set(FormField::Name, event_target_value(&ev)))
            />
            <input
                class="entry-form__input"
                type="text"
                placeholder=config.skin.message_placeholder()
                maxlength=config.message_max_len()
                prop:value=move || form.get().message
                on:input=move |ev| form.update(|f| f.set(FormField::Message, event_target_value(&ev)))
            />
            <input
                node_ref=file_ref
                class="entry-form__file"
                type="file"
                accept="image/*"
                on:change=on_file_change
            />
            <div class="entry-form__actions">
                <button
                    class="btn entry-form__capture"
                    disabled=move || capture.get().is_busy()
                    on:click=on_capture
                >
                    "사진 촬영"
                </button>
                <button class="btn entry-form__plain" on:click=move |_| on_add.run(None)>
                    "사진 없이 등록"
                </button>
            </div>
        </div>
    }
}

/// Count down on the overlay, then take one photo and submit it.
#[cfg(feature = "csr")]
async fn run_capture(capture: RwSignal<CaptureState>, on_add: Callback<Option<String>>) {
    use std::time::Duration;

    use board::consts::{COUNTDOWN_DIGITS, COUNTDOWN_STEP_MS};

    for digit in COUNTDOWN_DIGITS {
        capture.set(CaptureState::Countdown(digit));
        gloo_timers::future::sleep(Duration::from_millis(u64::from(COUNTDOWN_STEP_MS))).await;
    }
    capture.set(CaptureState::Camera);

    let result = crate::util::camera::capture_photo().await;
    let Some(outcome) = capture.try_update(|c| c.settle(result)) else {
        return;
    };
    match outcome {
        CaptureOutcome::Photo(image) => on_add.run(Some(image)),
        CaptureOutcome::Alert(text) => {
            log::warn!("photo capture failed: {text}");
            crate::util::browser::alert(&text);
        }
        CaptureOutcome::Dropped(e) => log::warn!("photo capture failed: {e:?}"),
    }
}
