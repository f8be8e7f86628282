//! Connection manager behaviour that needs no running deployment.

use std::time::Duration;

use assert_matches::assert_matches;
use cartera_db::DbError;

#[tokio::test]
async fn test_create_pool_rejects_malformed_uri() {
    let result = cartera_db::create_pool("not-a-mongo-uri", "CARTERA").await;
    assert_matches!(result, Err(DbError::Mongo(_)));
}

#[tokio::test]
async fn test_create_pool_is_lazy() {
    // Nothing listens on port 1; building the pool must still succeed.
    let pool = cartera_db::create_pool("mongodb://127.0.0.1:1", "CARTERA")
        .await
        .unwrap();
    assert_eq!(pool.database_name(), "CARTERA");
    cartera_db::disconnect(pool).await;
}

#[tokio::test]
async fn test_connect_to_unreachable_deployment_fails() {
    let started = std::time::Instant::now();
    let result = cartera_db::connect(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200",
        "CARTERA",
    )
    .await;

    assert!(result.is_err());
    assert!(started.elapsed() < cartera_db::CONNECT_TIMEOUT + Duration::from_secs(5));
}
