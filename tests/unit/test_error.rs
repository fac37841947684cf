use nadlan_client::error::AppError;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_app_error_display_response() {
    let error = AppError::from_response(
        StatusCode::UNAUTHORIZED,
        json!({"message": "invalid credentials"}),
    );
    assert_eq!(error.to_string(), "http 401: invalid credentials");
}

#[test]
fn test_app_error_display_network() {
    let error = AppError::Network {
        message: "connection refused".to_string(),
    };
    assert_eq!(error.to_string(), "network error: connection refused");
}

#[test]
fn test_app_error_display_serialization() {
    let error = AppError::Serialization("Invalid format".to_string());
    assert_eq!(error.to_string(), "serialization error: Invalid format");
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("bad header name".to_string());
    assert_eq!(error.to_string(), "invalid input: bad header name");
}

#[test]
fn test_from_response_uses_body_message() {
    let error = AppError::from_response(StatusCode::FORBIDDEN, json!({"message": "no access"}));
    match &error {
        AppError::Response {
            status,
            data,
            message,
        } => {
            assert_eq!(*status, StatusCode::FORBIDDEN);
            assert_eq!(data["message"], "no access");
            assert_eq!(message, "no access");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_response_falls_back_to_status_line() {
    let error = AppError::from_response(StatusCode::BAD_GATEWAY, json!({}));
    match &error {
        AppError::Response { message, .. } => assert_eq!(message, "HTTP 502: Bad Gateway"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_response_ignores_empty_message_field() {
    let error = AppError::from_response(StatusCode::BAD_REQUEST, json!({"message": ""}));
    match &error {
        AppError::Response { message, .. } => assert_eq!(message, "HTTP 400: Bad Request"),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_timeout_is_network_class() {
    let error = AppError::timeout(std::time::Duration::from_millis(50));
    match &error {
        AppError::Network { message } => assert_eq!(message, "request timed out after 50ms"),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(error.is_retryable());
}

#[test]
fn test_status_accessor() {
    let response = AppError::from_response(StatusCode::NOT_FOUND, json!({}));
    assert_eq!(response.status(), Some(StatusCode::NOT_FOUND));

    let network = AppError::Network {
        message: "dns failure".to_string(),
    };
    assert_eq!(network.status(), None);
}

#[test]
fn test_response_and_network_are_mutually_exclusive() {
    let response = AppError::from_response(StatusCode::NOT_FOUND, json!({"message": "gone"}));
    assert!(response.response().is_some());

    let network = AppError::Network {
        message: "dns failure".to_string(),
    };
    assert!(network.response().is_none());
}

#[test]
fn test_messages_are_never_empty() {
    let errors = [
        AppError::from_response(StatusCode::NOT_FOUND, json!({})),
        AppError::from_response(StatusCode::INTERNAL_SERVER_ERROR, json!({"message": "boom"})),
        AppError::Network {
            message: "connection reset".to_string(),
        },
        AppError::timeout(std::time::Duration::from_millis(10)),
    ];
    for error in &errors {
        assert!(!error.to_string().is_empty());
    }
}

#[test]
fn test_retry_classification_on_errors() {
    assert!(!AppError::from_response(StatusCode::NOT_FOUND, json!({})).is_retryable());
    assert!(AppError::from_response(StatusCode::REQUEST_TIMEOUT, json!({})).is_retryable());
    assert!(AppError::from_response(StatusCode::TOO_MANY_REQUESTS, json!({})).is_retryable());
    assert!(AppError::from_response(StatusCode::INTERNAL_SERVER_ERROR, json!({})).is_retryable());
    assert!(!AppError::Deserialization("bad".to_string()).is_retryable());
    assert!(!AppError::Serialization("bad".to_string()).is_retryable());
    assert!(!AppError::InvalidInput("bad".to_string()).is_retryable());
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();
    match app_error {
        AppError::Deserialization(msg) => assert!(!msg.is_empty()),
        other => panic!("Unexpected error: {other:?}"),
    }
}

// Note: reqwest::Error cannot be easily constructed in tests
// The From<reqwest::Error> conversion is exercised through the client tests
