use super::*;

#[test]
fn api_error_displays_bare_server_message() {
    let err = ApiError::Api { status: 401, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn transport_error_is_prefixed() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}

#[test]
fn status_only_for_api_errors() {
    assert_eq!(ApiError::Api { status: 404, message: String::new() }.status(), Some(404));
    assert_eq!(ApiError::Transport("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

#[test]
fn unauthorized_matches_401_only() {
    assert!(ApiError::Api { status: 401, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Api { status: 403, message: String::new() }.is_unauthorized());
    assert!(!ApiError::Transport("offline".to_owned()).is_unauthorized());
}
