#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use tower::ServiceExt;

use cartera_api::config::{MongoConfig, ServerConfig};
use cartera_api::router::build_app_router;
use cartera_api::state::AppState;
use cartera_db::DbPool;

/// Nothing listens on port 1; selection fails fast instead of after 10s.
pub const UNREACHABLE_URI: &str =
    "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300&connectTimeoutMS=300";

/// Build a test `ServerConfig` pointing at `uri` / `database`.
pub fn test_config(uri: &str, database: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        mongo: MongoConfig {
            uri: uri.to_string(),
            database: database.to_string(),
            projects_collection: "PROYECTOS".to_string(),
            races_collection: "razas".to_string(),
        },
    }
}

/// A pool whose deployment can never be reached.
pub async fn unreachable_pool() -> DbPool {
    cartera_db::create_pool(UNREACHABLE_URI, "CARTERA")
        .await
        .expect("pool construction does not touch the network")
}

/// A pool on a fresh database of the deployment named by `TEST_MONGO_URI`,
/// or `None` when the variable is unset.
pub async fn live_pool() -> Option<DbPool> {
    let uri = std::env::var("TEST_MONGO_URI").ok()?;
    let database = format!("cartera_test_{}", ObjectId::new().to_hex());
    Some(
        cartera_db::connect(&uri, &database)
            .await
            .expect("TEST_MONGO_URI must point at a reachable deployment"),
    )
}

/// Drop the pool's database and release the client.
pub async fn drop_database(pool: DbPool) {
    pool.client()
        .database(pool.database_name())
        .drop()
        .await
        .unwrap();
    cartera_db::disconnect(pool).await;
}

/// Build the full application router around `pool`, with the same
/// middleware stack production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config("mongodb://unused", pool.database_name());
    build_app_router(AppState::new(pool, config))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn options(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::OPTIONS, uri).await
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
}
