use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    let err = ApiError::from_status(401, serde_json::json!({ "detail": "Could not validate credentials" }));
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail(), Some("Could not validate credentials"));
}

#[test]
fn from_status_keeps_other_statuses() {
    let err = ApiError::from_status(404, serde_json::json!({ "detail": "Product not found" }));
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.display_message(), "Product not found");
}

#[test]
fn transport_failures_carry_no_status() {
    assert_eq!(ApiError::from(TransportError::Timeout).status(), None);
    assert_eq!(ApiError::from(TransportError::Network("refused".to_owned())).status(), None);
    assert_eq!(ApiError::Malformed("bad".to_owned()).status(), None);
}

#[test]
fn display_message_falls_back_to_error_text() {
    let err = ApiError::Status { status: 500, body: serde_json::Value::Null };
    assert_eq!(err.display_message(), "request failed with status 500");
    assert_eq!(ApiError::Timeout.display_message(), "request timed out");
}
