#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::consts::MAX_ENTRIES;
use crate::entry::TravelSpan;

fn viewport(width: f64) -> Viewport {
    Viewport { container_width: width, window_width: width, window_height: 900.0 }
}

fn submission(name: &str) -> Submission {
    Submission { name: name.to_owned(), message: "hi".to_owned(), image: None }
}

fn filled(count: usize) -> Guestbook {
    let mut rng = StdRng::seed_from_u64(11);
    let mut book = Guestbook::new(MAX_ENTRIES);
    for n in 0..count {
        book.add(1_000 + n as u64, submission(&format!("v{n}")), &viewport(1000.0), 240.0, &mut rng);
    }
    book
}

#[test]
fn new_guestbook_is_empty() {
    let book = Guestbook::new(MAX_ENTRIES);
    assert!(book.is_empty());
    assert_eq!(book.len(), 0);
}

#[test]
fn add_appends_newest_last() {
    let book = filled(3);
    let names = book.entries().iter().map(|e| e.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["v0", "v1", "v2"]);
}

#[test]
fn list_never_exceeds_capacity() {
    let book = filled(MAX_ENTRIES + 5);
    assert_eq!(book.len(), MAX_ENTRIES);
}

#[test]
fn twenty_first_entry_evicts_the_oldest() {
    let book = filled(MAX_ENTRIES + 1);
    assert!(book.entries().iter().all(|e| e.name != "v0"));
    assert_eq!(book.entries().first().map(|e| e.name.as_str()), Some("v1"));
    assert_eq!(book.entries().last().map(|e| e.name.as_str()), Some("v20"));
}

#[test]
fn ids_strictly_increase_within_the_same_millisecond() {
    let mut book = Guestbook::new(MAX_ENTRIES);
    assert_eq!(book.next_id(500), 500);
    assert_eq!(book.next_id(500), 501);
    assert_eq!(book.next_id(499), 502);
    assert_eq!(book.next_id(900), 900);
}

#[test]
fn get_finds_entry_by_id() {
    let book = filled(2);
    let id = book.entries()[1].id;
    assert_eq!(book.get(id).map(|e| e.name.as_str()), Some("v1"));
    assert!(book.get(42).is_none());
}

#[test]
fn relayout_updates_every_span_and_nothing_else() {
    let mut book = filled(4);
    let before = book.entries().to_vec();
    book.relayout(&viewport(500.0));
    for (old, new) in before.iter().zip(book.entries()) {
        assert_eq!(new.id, old.id);
        assert_eq!(new.name, old.name);
        assert_eq!(new.message, old.message);
        assert_eq!(new.image, old.image);
        assert_eq!(new.y, old.y);
        assert_eq!(new.speed_secs, old.speed_secs);
        assert_eq!(new.direction, old.direction);
        assert_eq!(new.span, TravelSpan::new(old.direction, 500.0));
    }
}

#[test]
fn zero_capacity_still_keeps_the_newest_entry() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut book = Guestbook::new(0);
    book.add(1, submission("a"), &viewport(800.0), 240.0, &mut rng);
    book.add(2, submission("b"), &viewport(800.0), 240.0, &mut rng);
    assert_eq!(book.len(), 1);
    assert_eq!(book.entries()[0].name, "b");
}
