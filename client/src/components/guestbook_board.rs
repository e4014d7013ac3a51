//! The guestbook page: board container, cards, form and overlays.
//!
//! ARCHITECTURE
//! ============
//! Entries live in one `RwSignal<GuestbookState>`. Adding an entry fires the
//! recording POST first, then measures the board, places the card and clears
//! the form.
//! Window resizes recompute every card's off-screen span in place, and an
//! effect keeps the export workbook in step with the entry list.

use board::config::GuestbookConfig;
use board::entry::Entry;
use board::export::Workbook;
use board::record::RecordPayload;
use leptos::prelude::*;

use crate::components::countdown_overlay::CountdownOverlay;
use crate::components::entry_form::EntryForm;
use crate::components::floating_entry::FloatingEntry;
use crate::components::title_banner::TitleBanner;
use crate::net::recorder;
use crate::state::form::FormState;
use crate::state::guestbook::GuestbookState;
use crate::util::{browser, viewport};

#[component]
pub fn GuestbookBoard() -> impl IntoView {
    let config = expect_context::<GuestbookConfig>();
    let guestbook = expect_context::<RwSignal<GuestbookState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let workbook = StoredValue::new(Workbook::new());
    provide_context(workbook);

    let on_add = Callback::new(move |image: Option<String>| {
        let submission = form.with_untracked(|f| f.submission(image, &config));
        recorder::notify(&config.record_endpoint, RecordPayload::new(&submission, browser::locale_timestamp()));
        let viewport = viewport::measure(container_ref.get_untracked().as_deref());
        let card_height = config.skin.card_height();
        let Some(entry) = guestbook.try_update(|g| g.add(browser::now_ms(), submission, &viewport, card_height))
        else {
            return;
        };
        form.update(FormState::clear);
        log::debug!(
            "entry {} added: {:?}, photo: {}",
            entry.id,
            entry.direction,
            entry.image.is_some()
        );
    });

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            let viewport = viewport::measure(container_ref.get_untracked().as_deref());
            guestbook.update(|g| g.relayout(&viewport));
            log::debug!("cards relaid out for width {:.0}", viewport.travel_width());
        });
        on_cleanup(move || handle.remove());
    }

    Effect::new(move || {
        guestbook.with(|g| workbook.update_value(|wb| wb.rebuild(g.book.entries())));
        log::debug!("export rebuilt with {} rows", workbook.with_value(Workbook::row_count));
    });

    view! {
        <div node_ref=container_ref class="guestbook-board">
            <TitleBanner />
            <For
                each=move || guestbook.with(|g| g.book.entries().to_vec())
                key=|entry| entry.id
                children=move |entry: Entry| view! { <FloatingEntry entry=entry /> }
            />
            <EntryForm on_add=on_add />
            <CountdownOverlay />
        </div>
    }
}
