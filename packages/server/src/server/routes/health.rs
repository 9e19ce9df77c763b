use axum::{extract::Extension, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::server::app::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: StoreHealth,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreHealth {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fruits: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

/// Liveness probe
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}

/// Health check endpoint
///
/// Checks that the fruit store answers within a second.
///
/// Returns 200 OK if healthy, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let store = match tokio::time::timeout(
        std::time::Duration::from_secs(1),
        state.deps.fruits().count(),
    )
    .await
    {
        Ok(Ok(count)) => StoreHealth {
            status: "ok".to_string(),
            fruits: Some(count),
            error: None,
        },
        Ok(Err(e)) => StoreHealth {
            status: "error".to_string(),
            fruits: None,
            error: Some(format!("Count failed: {}", e)),
        },
        Err(_) => StoreHealth {
            status: "error".to_string(),
            fruits: None,
            error: Some("Store timeout (>1s)".to_string()),
        },
    };

    let is_healthy = store.status == "ok";

    let (overall_status, status_code) = if is_healthy {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        status_code,
        Json(HealthResponse {
            status: overall_status.to_string(),
            store,
        }),
    )
}
