use super::*;

#[test]
fn not_found_maps_to_404() {
    let err = ApiError::NotFound { path: "/api/patients".to_owned() };
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn not_found_response_has_detail_body() {
    let response = ApiError::NotFound { path: "/api/patients".to_owned() }.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, ErrorBody { detail: "Not Found".to_owned() });
}

#[test]
fn config_errors_convert_into_startup_errors() {
    let err: StartupError = ConfigError::InvalidPort { value: "x".to_owned() }.into();
    assert_eq!(err.to_string(), "configuration: invalid PORT \"x\": expected an integer in 0..=65535");
}
