use super::*;
use session::Method;

#[test]
fn unavailable_message_names_the_request() {
    let request = HttpRequest {
        method: Method::Delete,
        url: "http://localhost:5000/api/blog/1".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    assert_eq!(
        unavailable_message(&request),
        "DELETE http://localhost:5000/api/blog/1: no browser transport in this build"
    );
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_build_reports_transport_error() {
    let api = crate::net::api();
    let err = api.list_projects(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
