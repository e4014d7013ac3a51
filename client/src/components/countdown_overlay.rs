//! Full-screen countdown shown before the camera opens.

use leptos::prelude::*;

use crate::state::capture::CaptureState;

#[component]
pub fn CountdownOverlay() -> impl IntoView {
    let capture = expect_context::<RwSignal<CaptureState>>();
    let digit = move || capture.get().countdown_digit();

    view! {
        <Show when=move || digit().is_some()>
            <div class="countdown-overlay">{move || digit().map(|d| d.to_string())}</div>
        </Show>
    }
}
