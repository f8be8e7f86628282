//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, header};

// ---------------------------------------------------------------------------
// Test: GET /health reports a degraded service when MongoDB is unreachable
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_reports_degraded_without_database() {
    let app = common::build_test_app(common::unreachable_pool().await);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(json["version"].is_string());
    assert_eq!(json["database"], "CARTERA");
    assert_eq!(json["db_healthy"], false);
    assert!(json.get("db_ping_ms").is_none());
}

// ---------------------------------------------------------------------------
// Test: GET /health is ok against a live deployment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_database() {
    let Some(pool) = common::live_pool().await else { return };
    let app = common::build_test_app(pool.clone());

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], pool.database_name());
    assert_eq!(json["db_healthy"], true);
    assert!(json["db_ping_ms"].is_u64());

    common::drop_database(pool).await;
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::unreachable_pool().await);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::unreachable_pool().await);
    let response = get(app, "/proyectos/not-an-id").await;

    let id_str = header(&response, "x-request-id").expect("Response must contain x-request-id");
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
