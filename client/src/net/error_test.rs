use super::*;
use crate::net::types::User;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Email already registered".to_owned()) };
    assert_eq!(err.user_message("Registration failed"), "Email already registered");
}

#[test]
fn user_message_falls_back_for_blank_or_missing_message() {
    let blank = ApiError::Status { status: 500, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("Login failed"), "Login failed");
    let missing = ApiError::Status { status: 500, message: None };
    assert_eq!(missing.user_message("Login failed"), "Login failed");
    let network = ApiError::Network("offline".to_owned());
    assert_eq!(network.user_message("Login failed"), "Login failed");
}

#[test]
fn unauthorized_covers_401_and_403_only() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 500, message: None }.is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn parse_error_message_reads_json_body() {
    assert_eq!(parse_error_message(r#"{"message":"Invalid credentials"}"#), Some("Invalid credentials".to_owned()));
    assert_eq!(parse_error_message(r#"{"error":"x"}"#), None);
    assert_eq!(parse_error_message("<html>502</html>"), None);
}

#[test]
fn decode_response_maps_failure_status_with_message() {
    let result = decode_response::<User>(401, false, r#"{"message":"Token expired"}"#);
    assert_eq!(result, Err(ApiError::Status { status: 401, message: Some("Token expired".to_owned()) }));
}

#[test]
fn decode_response_reports_schema_mismatch() {
    let result = decode_response::<User>(200, true, r#"{"id":"not-a-number"}"#);
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn check_status_accepts_ok_regardless_of_body() {
    assert_eq!(check_status(201, true, ""), Ok(()));
}
