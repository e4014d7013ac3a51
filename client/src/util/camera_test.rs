use super::*;

#[test]
fn unsupported_alert_text() {
    assert_eq!(CaptureError::Unsupported.to_string(), "카메라 접근이 지원되지 않는 브라우저입니다.");
}

#[test]
fn denied_alert_includes_the_browser_message() {
    let err = CaptureError::Denied("Permission denied".to_owned());
    assert_eq!(err.to_string(), "카메라 접근 실패: Permission denied");
}

#[test]
fn only_camera_access_failures_alert() {
    assert!(CaptureError::Unsupported.alerts_user());
    assert!(CaptureError::Denied(String::new()).alerts_user());
    assert!(!CaptureError::Frame("2d context unavailable".to_owned()).alerts_user());
    assert!(!CaptureError::Timeout { waited_ms: 10_000 }.alerts_user());
}

#[test]
fn timeout_names_the_wait() {
    let err = CaptureError::Timeout { waited_ms: 10_000 };
    assert_eq!(err.to_string(), "카메라 화면이 10000ms 동안 준비되지 않았습니다.");
}
