mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_healthy() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["services"]["database"], "connected");
    assert_eq!(json["services"]["redis"], "connected");
    assert!(json.get("timestamp").is_some());
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    repo.set_failing(true);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["services"]["database"], "error");
    assert_eq!(json["services"]["redis"], "connected");
    assert!(json["error"].as_str().unwrap().contains("store is down"));
}

#[tokio::test]
async fn test_health_endpoint_cache_down() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    cache.set_failing(true);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["services"]["database"], "connected");
    assert_eq!(json["services"]["redis"], "error");
}

#[tokio::test]
async fn test_liveness_alive_even_when_collaborators_down() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    repo.set_failing(true);
    cache.set_failing(true);

    let response = server.get("/health/liveness").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "alive");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_readiness_ready() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    let response = server.get("/health/readiness").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ready");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_readiness_not_ready_when_store_down() {
    let repo = common::MemoryRepository::new();
    let cache = common::MemoryCache::new();
    let server = TestServer::new(common::test_router(common::create_test_state(
        repo.clone(),
        cache.clone(),
    )))
    .unwrap();

    repo.set_failing(true);

    let response = server.get("/health/readiness").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "not ready");
    assert!(json["error"].as_str().unwrap().contains("store is down"));
}
