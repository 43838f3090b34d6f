use super::*;

#[test]
fn missing_upstream_is_service_unavailable() {
    assert_eq!(UpstreamError::NotConfigured("mailchimp").status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn upstream_not_found_passes_through() {
    let err = UpstreamError::Status { status: 404, body: String::new() };
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn invalid_id_is_not_found() {
    assert_eq!(UpstreamError::InvalidId.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn other_upstream_failures_are_bad_gateway() {
    for err in [
        UpstreamError::Status { status: 401, body: "nope".into() },
        UpstreamError::Status { status: 503, body: String::new() },
        UpstreamError::Request("timeout".into()),
        UpstreamError::Parse("eof".into()),
    ] {
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY, "{err}");
    }
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::Missing { var: "MAILCHIMP_API_KEY" }.to_string(), "missing env var MAILCHIMP_API_KEY");
    let invalid = ConfigError::Invalid { var: "PORT", reason: "not a number".into() };
    assert_eq!(invalid.to_string(), "invalid PORT: not a number");
}

#[tokio::test]
async fn error_response_carries_failure_envelope() {
    let response = UpstreamError::NotConfigured("contentful").into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "contentful is not configured");
}
