#![allow(clippy::float_cmp)]

use super::*;

fn viewport(width: f64) -> Viewport {
    Viewport { container_width: width, window_width: width, window_height: 720.0 }
}

fn submission(name: &str) -> Submission {
    Submission { name: name.to_owned(), message: "hi".to_owned(), image: None }
}

#[test]
fn add_returns_the_stored_entry() {
    let mut state = GuestbookState::new(20, 1);
    let entry = state.add(1_000, submission("a"), &viewport(1024.0), 240.0);
    assert_eq!(state.book.len(), 1);
    assert_eq!(state.book.get(entry.id), Some(&entry));
}

#[test]
fn same_seed_places_cards_identically() {
    let mut a = GuestbookState::new(20, 99);
    let mut b = GuestbookState::new(20, 99);
    let first = a.add(1, submission("x"), &viewport(800.0), 240.0);
    let second = b.add(1, submission("x"), &viewport(800.0), 240.0);
    assert_eq!(first, second);
}

#[test]
fn travel_plan_follows_relayout() {
    let mut state = GuestbookState::new(20, 4);
    let entry = state.add(10, submission("a"), &viewport(1000.0), 240.0);
    state.relayout(&viewport(400.0));
    let plan = state.travel_plan(entry.id);
    assert_eq!(plan, Some((TravelSpan::new(entry.direction, 400.0), entry.travel_ms())));
}

#[test]
fn travel_plan_is_none_after_eviction() {
    let mut state = GuestbookState::new(2, 4);
    let oldest = state.add(1, submission("a"), &viewport(1000.0), 240.0);
    state.add(2, submission("b"), &viewport(1000.0), 240.0);
    state.add(3, submission("c"), &viewport(1000.0), 240.0);
    assert_eq!(state.travel_plan(oldest.id), None);
}
