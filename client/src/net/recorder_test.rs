use super::*;

#[test]
fn success_statuses_pass() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn other_statuses_are_rejected() {
    assert_eq!(check_status(302), Err(RecordError::Status(302)));
    assert_eq!(check_status(429), Err(RecordError::Status(429)));
    assert_eq!(check_status(500), Err(RecordError::Status(500)));
}

#[test]
fn errors_name_what_failed() {
    assert_eq!(RecordError::Status(503).to_string(), "record request rejected: 503");
    assert_eq!(RecordError::Transport("offline".to_owned()).to_string(), "record request failed: offline");
    assert_eq!(RecordError::Encode("bad".to_owned()).to_string(), "could not encode record: bad");
}
