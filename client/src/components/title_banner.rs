//! Event title in the top-left corner.

use board::config::GuestbookConfig;
use leptos::prelude::*;

#[component]
pub fn TitleBanner() -> impl IntoView {
    let config = expect_context::<GuestbookConfig>();

    view! {
        <div class="title-banner">
            <h1 class="title-banner__heading">
                {config.title}
                <br />
                <span class="title-banner__accent">{config.subtitle}</span>
                " (포토방명록)"
            </h1>
        </div>
    }
}
