//! Health Check Handler

use axum::Json;
use serde::Serialize;
use shared::ApiResponse;

use crate::utils::ok;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe
pub async fn health() -> Json<ApiResponse<HealthStatus>> {
    ok(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
