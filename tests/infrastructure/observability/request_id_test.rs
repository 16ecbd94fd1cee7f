use axum::http::HeaderValue;

use hushwave::infrastructure::observability::{REQUEST_ID_HEADER, RequestId};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_valid_header_when_extracting_then_keeps_caller_value() {
    let header = HeaderValue::from_static("abc-123");

    let request_id = RequestId::from_header(Some(&header));

    assert_eq!(request_id.as_str(), "abc-123");
}

#[test]
fn given_missing_header_when_extracting_then_generates_uuid() {
    let request_id = RequestId::from_header(None);

    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_oversized_header_when_extracting_then_generates_new_id() {
    let long = "a".repeat(200);
    let header = HeaderValue::from_str(&long).unwrap();

    let request_id = RequestId::from_header(Some(&header));

    assert_ne!(request_id.as_str(), long);
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}

#[test]
fn given_header_with_spaces_when_extracting_then_generates_new_id() {
    let header = HeaderValue::from_static("has inner space");

    let request_id = RequestId::from_header(Some(&header));

    assert_ne!(request_id.as_str(), "has inner space");
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());

    assert_eq!(original.clone(), original);
}
