#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn viewport(container_width: f64) -> Viewport {
    Viewport { container_width, window_width: 1280.0, window_height: 800.0 }
}

fn submission() -> Submission {
    Submission { name: "민지".to_owned(), message: "축하해".to_owned(), image: None }
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_sign_is_plus_or_minus_one() {
    assert_eq!(Direction::LeftToRight.sign(), 1);
    assert_eq!(Direction::RightToLeft.sign(), -1);
}

#[test]
fn random_direction_produces_both_values() {
    let mut rng = StdRng::seed_from_u64(7);
    let picks = (0..200).map(|_| Direction::random(&mut rng)).collect::<Vec<_>>();
    assert!(picks.contains(&Direction::LeftToRight));
    assert!(picks.contains(&Direction::RightToLeft));
}

// =============================================================
// Viewport / TravelSpan
// =============================================================

#[test]
fn travel_width_prefers_container() {
    assert_eq!(viewport(900.0).travel_width(), 900.0);
}

#[test]
fn travel_width_falls_back_to_window_when_container_has_no_width() {
    assert_eq!(viewport(0.0).travel_width(), 1280.0);
}

#[test]
fn span_left_to_right_starts_before_left_edge() {
    let span = TravelSpan::new(Direction::LeftToRight, 1000.0);
    assert_eq!(span, TravelSpan { from_x: -200.0, to_x: 1200.0 });
}

#[test]
fn span_right_to_left_starts_past_right_edge() {
    let span = TravelSpan::new(Direction::RightToLeft, 1000.0);
    assert_eq!(span, TravelSpan { from_x: 1200.0, to_x: -200.0 });
}

// =============================================================
// Submission
// =============================================================

#[test]
fn blank_submission_uses_defaults() {
    let config = GuestbookConfig::default();
    let sub = Submission::resolve("   ", "", None, &config);
    assert_eq!(sub.name, "드림대학");
    assert_eq!(sub.message, "너희의 꿈을 응원해!");
    assert_eq!(sub.image, None);
}

#[test]
fn submission_trims_input() {
    let config = GuestbookConfig::default();
    let sub = Submission::resolve("  지수 ", " hi ", Some("data:image/png;base64,AA".to_owned()), &config);
    assert_eq!(sub.name, "지수");
    assert_eq!(sub.message, "hi");
    assert_eq!(sub.image.as_deref(), Some("data:image/png;base64,AA"));
}

#[test]
fn blank_name_with_message_keeps_message() {
    let config = GuestbookConfig::default();
    let sub = Submission::resolve("", "hi", None, &config);
    assert_eq!(sub.name, config.default_name);
    assert_eq!(sub.message, "hi");
}

// =============================================================
// Entry
// =============================================================

#[test]
fn spawn_picks_values_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for id in 0..100 {
        let entry = Entry::spawn(id, submission(), &viewport(1000.0), 240.0, &mut rng);
        assert!((20.0..30.0).contains(&entry.speed_secs), "speed {}", entry.speed_secs);
        assert!((0.0..560.0).contains(&entry.y), "y {}", entry.y);
        assert_eq!(entry.span, TravelSpan::new(entry.direction, 1000.0));
    }
}

#[test]
fn spawn_clamps_lane_when_window_is_shorter_than_card() {
    let mut rng = StdRng::seed_from_u64(1);
    let short = Viewport { container_width: 500.0, window_width: 500.0, window_height: 100.0 };
    let entry = Entry::spawn(1, submission(), &short, 240.0, &mut rng);
    assert_eq!(entry.y, 0.0);
}

#[test]
fn relayout_keeps_direction_and_updates_span() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut entry = Entry::spawn(5, submission(), &viewport(1000.0), 240.0, &mut rng);
    let before = entry.clone();
    entry.relayout(&viewport(600.0));
    assert_eq!(entry.direction, before.direction);
    assert_eq!(entry.y, before.y);
    assert_eq!(entry.speed_secs, before.speed_secs);
    assert_eq!(entry.span, TravelSpan::new(before.direction, 600.0));
}

#[test]
fn travel_ms_rounds_speed() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut entry = Entry::spawn(1, submission(), &viewport(800.0), 240.0, &mut rng);
    entry.speed_secs = 21.25;
    assert_eq!(entry.travel_ms(), 21_250);
}
