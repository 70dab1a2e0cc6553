use super::*;

#[test]
fn failed_displays_message_only() {
    let err = ApiError::Failed { status: 422, message: "email already registered".to_owned() };
    assert_eq!(err.to_string(), "email already registered");
}

#[test]
fn network_and_decode_are_prefixed() {
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("missing field `id`".to_owned()).to_string(), "unexpected response: missing field `id`");
}
