use super::*;
use crate::config::GuestbookConfig;

#[test]
fn payload_serializes_name_message_timestamp() {
    let sub = Submission { name: "민지".to_owned(), message: "hi".to_owned(), image: Some("data:x".to_owned()) };

    let payload = RecordPayload::new(&sub, "2025. 5. 19. 오후 3:04:05".to_owned());
    let value = serde_json::to_value(&payload).unwrap_or_default();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "민지",
            "message": "hi",
            "timestamp": "2025. 5. 19. 오후 3:04:05",
        })
    );
}

#[test]
fn blank_form_records_the_defaults() {
    let config = GuestbookConfig::default();
    let sub = Submission::resolve("  ", "", None, &config);
    let payload = RecordPayload::new(&sub, String::new());
    assert_eq!(payload.name, "드림대학");
    assert_eq!(payload.message, "너희의 꿈을 응원해!");
}
