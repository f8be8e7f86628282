use std::time::Instant;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when MongoDB answered the ping, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Database the service reads from.
    pub database: String,
    pub db_healthy: bool,
    /// Round trip of the ping in milliseconds; absent when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_ping_ms: Option<u64>,
}

/// GET /health -- pings MongoDB and reports which database is served.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let started = Instant::now();
    let ping = cartera_db::health_check(&state.pool).await;
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let db_ping_ms = match ping {
        Ok(()) => Some(elapsed_ms),
        Err(e) => {
            tracing::warn!(error = %e, database = state.pool.database_name(), "Health ping failed");
            None
        }
    };
    let db_healthy = db_ping_ms.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: state.pool.database_name().to_string(),
        db_healthy,
        db_ping_ms,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
