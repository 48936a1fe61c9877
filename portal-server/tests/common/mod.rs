//! Shared helpers for in-process router tests

use axum::Router;
use axum::body::Body;
use http::{Request, header};
use http_body_util::BodyExt;
use portal_server::auth::JwtConfig;
use portal_server::{Config, ServerState, api};
use serde_json::Value;
use tower::ServiceExt;

/// Build the full application router over a freshly seeded store
pub fn app() -> Router {
    let jwt = JwtConfig {
        secret: "integration-test-secret-key-0123456789".to_string(),
        expiration_minutes: 60,
        issuer: "portal-server".to_string(),
        audience: "portal-clients".to_string(),
    };
    let config = Config::with_overrides(0, jwt);
    let state = ServerState::initialize(&config);
    api::router(state)
}

/// Send a JSON request, optionally authenticated
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (http::StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Login as a seeded user and return the bearer token
pub async fn login(app: &Router, email: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({
            "email": email,
            "password": portal_server::seed::SEED_PASSWORD,
        })),
    )
    .await;
    assert_eq!(status, http::StatusCode::OK, "login failed: {body}");
    body["data"]["token"].as_str().unwrap().to_string()
}
