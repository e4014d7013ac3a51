//! One guestbook entry drifting across the board as a card.
//!
//! ARCHITECTURE
//! ============
//! Each card owns a [`Motion`](board::motion::Motion) state machine and a
//! single travel driver task. The driver runs one traversal tween at a time
//! and parks while the card is paused; pointer handlers pause it (tap to
//! enlarge, drag to move) and wake it through an unbounded channel when the
//! pause ends. Unmounting retires the motion, cancels the running tween and
//! closes the channel, so the driver exits on its next step.

use board::config::GuestbookConfig;
use board::entry::Entry;
use board::skin::CardBody;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::guestbook::GuestbookState;

/// Floating card for `entry`.
#[component]
pub fn FloatingEntry(entry: Entry) -> impl IntoView {
    let config = expect_context::<GuestbookConfig>();
    let skin = config.skin;
    let card_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let runtime = {
        let guestbook = expect_context::<RwSignal<GuestbookState>>();
        let runtime = card::mount(card_ref, guestbook, entry.id);
        on_cleanup(move || card::unmount(runtime));
        runtime
    };

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        card::pointer_down(runtime, card_ref, &ev);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        card::pointer_move(runtime, card_ref, &ev);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };
    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "csr")]
        card::pointer_up(runtime, card_ref, &ev);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let (image_width, image_height) = skin.image_box();
    let slot_style = format!("width: {image_width:.0}px; height: {image_height:.0}px;");
    let body = match (skin.card_body(&entry.message, entry.image.is_some()), entry.image.clone()) {
        (CardBody::Image, Some(src)) => view! {
            <img class="floating-entry__photo" src=src alt="사진" draggable="false" style=slot_style />
        }
        .into_any(),
        _ => view! {
            <div class="floating-entry__message-box" style=slot_style>
                {entry.message.clone()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            node_ref=card_ref
            class=format!("floating-entry floating-entry--{}", skin.as_str())
            style=format!(
                "top: {:.0}px; width: {:.0}px; height: {:.0}px;",
                entry.y,
                skin.card_width(),
                skin.card_height(),
            )
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up.clone()
            on:pointercancel=on_pointer_up
        >
            {body}
            <div class="floating-entry__name">{entry.name.clone()}</div>
            <div class="floating-entry__message">{entry.message.clone()}</div>
        </div>
    }
}

#[cfg(feature = "csr")]
mod card {
    use std::time::Duration;

    use board::consts::{GROW_MS, HOLD_MS};
    use board::entry::EntryId;
    use board::gesture::{Press, Release};
    use board::motion::{CardPose, Motion, Step, Tween};
    use futures::StreamExt;
    use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
    use leptos::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlElement;

    use crate::state::guestbook::GuestbookState;
    use crate::util::tween::{self, RunningTween};

    type Card = NodeRef<leptos::html::Div>;
    pub type Runtime = StoredValue<CardRuntime, LocalStorage>;

    pub struct CardRuntime {
        motion: Motion,
        tween: Option<RunningTween>,
        next_serial: u64,
        /// Last pose written while no tween was running.
        pose: CardPose,
        /// Vertical offset left by the last drag.
        offset_y: f64,
        press: Option<Press>,
        resume: UnboundedSender<()>,
    }

    impl CardRuntime {
        fn new(resume: UnboundedSender<()>) -> Self {
            Self {
                motion: Motion::new(),
                tween: None,
                next_serial: 0,
                pose: CardPose::at(0.0, 0.0),
                offset_y: 0.0,
                press: None,
                resume,
            }
        }

        /// Stop whatever tween is running and keep the card where it is.
        fn freeze(&mut self, el: &HtmlElement) -> CardPose {
            if let Some(running) = self.tween.take() {
                self.pose = running.stop(el);
            }
            self.pose
        }

        /// Replace the running tween with `next`. Returns its serial and the
        /// future that settles when it ends.
        fn play(&mut self, el: &HtmlElement, next: Tween) -> Option<(u64, JsFuture)> {
            if let Some(previous) = self.tween.take() {
                previous.cancel();
            }
            self.next_serial += 1;
            let serial = self.next_serial;
            self.pose = next.from;
            match tween::start(el, next, serial) {
                Ok(running) => {
                    let finished = running.finished();
                    self.tween = Some(running);
                    match finished {
                        Ok(done) => Some((serial, done)),
                        Err(e) => {
                            log::warn!("card tween cannot be awaited: {e}");
                            None
                        }
                    }
                }
                Err(e) => {
                    log::warn!("card tween failed to start: {e}");
                    tween::apply_pose(el, &next.to);
                    self.pose = next.to;
                    None
                }
            }
        }

        /// Commit the end pose of tween `serial` if it is still the current one.
        fn complete(&mut self, el: &HtmlElement, serial: u64) {
            if self.tween.as_ref().is_some_and(|t| t.serial() == serial) {
                if let Some(running) = self.tween.take() {
                    self.pose = running.settle(el);
                }
            }
        }

        fn wake_driver(&self) {
            if self.resume.unbounded_send(()).is_err() {
                log::debug!("card driver already stopped");
            }
        }
    }

    /// Create the card runtime and start its driver once the element exists.
    pub fn mount(card: Card, guestbook: RwSignal<GuestbookState>, id: EntryId) -> Runtime {
        let (resume_tx, resume_rx) = unbounded();
        let runtime = StoredValue::new_local(CardRuntime::new(resume_tx));
        let resume_rx = StoredValue::new_local(Some(resume_rx));
        Effect::new(move || {
            if card.get().is_none() {
                return;
            }
            // The receiver is taken once, so only the first run starts a driver.
            if let Some(resume) = resume_rx.try_update_value(Option::take).flatten() {
                leptos::task::spawn_local(drive(runtime, card, guestbook, id, resume));
            }
        });
        runtime
    }

    pub fn unmount(runtime: Runtime) {
        runtime.try_update_value(|rt| {
            rt.motion.retire();
            rt.press = None;
            if let Some(running) = rt.tween.take() {
                running.cancel();
            }
            rt.resume.close_channel();
        });
    }

    /// The travel driver: one per card, alive until the card unmounts.
    async fn drive(
        runtime: Runtime,
        card: Card,
        guestbook: RwSignal<GuestbookState>,
        id: EntryId,
        mut resume: UnboundedReceiver<()>,
    ) {
        loop {
            match runtime.try_with_value(|rt| rt.motion.next_step()).unwrap_or(Step::Exit) {
                Step::Exit => break,
                Step::AwaitResume => {
                    if resume.next().await.is_none() {
                        break;
                    }
                }
                Step::Travel => {
                    let Some((span, travel_ms)) = guestbook.try_with_untracked(|g| g.travel_plan(id)).flatten()
                    else {
                        break;
                    };
                    let Some(el) = card.get_untracked() else {
                        break;
                    };
                    let playing = runtime
                        .try_update_value(|rt| rt.play(&el, Tween::travel(span, travel_ms, rt.offset_y)))
                        .flatten();
                    match playing {
                        Some((serial, finished)) => {
                            // Rejects when a tap or drag cancels the traversal.
                            if finished.await.is_ok() {
                                runtime.try_update_value(|rt| rt.complete(&el, serial));
                            }
                        }
                        None => gloo_timers::future::sleep(Duration::from_millis(u64::from(travel_ms))).await,
                    }
                }
            }
        }
        log::debug!("card {id} stopped");
    }

    /// Enlarge, hold, then shrink back and let the driver resume.
    async fn click_pause(runtime: Runtime, card: Card, ticket: u64, from: CardPose) {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let growing = runtime.try_update_value(|rt| rt.play(&el, Tween::grow(from))).flatten();
        if let Some((serial, finished)) = growing {
            if finished.await.is_ok() {
                runtime.try_update_value(|rt| rt.complete(&el, serial));
            }
        } else {
            gloo_timers::future::sleep(Duration::from_millis(u64::from(GROW_MS))).await;
        }
        gloo_timers::future::sleep(Duration::from_millis(u64::from(HOLD_MS))).await;

        runtime.try_update_value(|rt| {
            if !rt.motion.finish_click(ticket) {
                return;
            }
            let shrink = Tween::shrink(rt.freeze(&el));
            let rest = shrink.sample(0.0);
            tween::apply_pose(&el, &rest);
            rt.pose = rest;
            rt.wake_driver();
        });
    }

    fn client_point(ev: &leptos::ev::PointerEvent) -> (f64, f64) {
        (f64::from(ev.client_x()), f64::from(ev.client_y()))
    }

    pub fn pointer_down(runtime: Runtime, card: Card, ev: &leptos::ev::PointerEvent) {
        let (x, y) = client_point(ev);
        let pressed = runtime
            .try_update_value(|rt| {
                if rt.motion.is_retired() {
                    return false;
                }
                rt.press = Some(Press::new(x, y));
                true
            })
            .unwrap_or(false);
        if pressed {
            if let Some(el) = card.get_untracked() {
                if el.set_pointer_capture(ev.pointer_id()).is_err() {
                    log::debug!("pointer capture refused");
                }
            }
        }
    }

    pub fn pointer_move(runtime: Runtime, card: Card, ev: &leptos::ev::PointerEvent) {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let (x, y) = client_point(ev);
        runtime.try_update_value(|rt| {
            let Some(press) = rt.press.as_mut() else {
                return;
            };
            if press.crosses_threshold(x, y) && rt.motion.begin_drag() {
                if let Some(running) = rt.tween.take() {
                    rt.pose = running.stop(&el);
                }
                press.grab(rt.pose);
            }
            if let Some(pose) = press.drag_pose(x, y) {
                tween::apply_pose(&el, &pose);
                rt.pose = pose;
            }
        });
    }

    pub fn pointer_up(runtime: Runtime, card: Card, ev: &leptos::ev::PointerEvent) {
        let Some(el) = card.get_untracked() else {
            return;
        };
        let (x, y) = client_point(ev);
        let click = runtime
            .try_update_value(|rt| {
                let press = rt.press.take()?;
                match press.release(x, y) {
                    Release::Tap => {
                        let ticket = rt.motion.tap()?;
                        Some((ticket, rt.freeze(&el)))
                    }
                    Release::Drop { pose } => {
                        tween::apply_pose(&el, &pose);
                        rt.pose = pose;
                        rt.offset_y = pose.y;
                        if rt.motion.end_drag() {
                            rt.wake_driver();
                        }
                        None
                    }
                }
            })
            .flatten();
        if let Some((ticket, from)) = click {
            leptos::task::spawn_local(click_pause(runtime, card, ticket, from));
        }
    }
}
