use super::*;

#[test]
fn idle_is_not_busy() {
    assert!(!CaptureState::default().is_busy());
    assert_eq!(CaptureState::Idle.countdown_digit(), None);
}

#[test]
fn countdown_shows_its_digit() {
    let state = CaptureState::Countdown(2);
    assert!(state.is_busy());
    assert_eq!(state.countdown_digit(), Some(2));
}

#[test]
fn camera_stage_is_busy_without_overlay() {
    assert!(CaptureState::Camera.is_busy());
    assert_eq!(CaptureState::Camera.countdown_digit(), None);
}

#[test]
fn captured_photo_is_handed_on_and_state_resets() {
    let mut state = CaptureState::Camera;
    let outcome = state.settle(Ok("data:image/png;base64,AA==".to_owned()));
    assert_eq!(state, CaptureState::Idle);
    assert_eq!(outcome, CaptureOutcome::Photo("data:image/png;base64,AA==".to_owned()));
}

#[test]
fn timed_out_capture_returns_to_idle_without_alert() {
    let mut state = CaptureState::Camera;
    let outcome = state.settle(Err(CaptureError::Timeout { waited_ms: 10_000 }));
    assert_eq!(state, CaptureState::Idle);
    assert!(!state.is_busy());
    assert_eq!(outcome, CaptureOutcome::Dropped(CaptureError::Timeout { waited_ms: 10_000 }));
}

#[test]
fn denied_camera_alerts_and_returns_to_idle() {
    let mut state = CaptureState::Camera;
    let outcome = state.settle(Err(CaptureError::Denied("Permission denied".to_owned())));
    assert_eq!(state, CaptureState::Idle);
    assert_eq!(outcome, CaptureOutcome::Alert("카메라 접근 실패: Permission denied".to_owned()));
}
