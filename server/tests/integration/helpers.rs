use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{Value, json};

use bidmarket_migration::Migrator;
use bidmarket_server::router::build_router;
use bidmarket_server::state::AppState;

/// Spins up the full router over a fresh in-memory SQLite database.
///
/// The pool is pinned to a single connection; with SQLite every pooled
/// connection would otherwise get its own private in-memory database.
pub async fn test_server() -> TestServer {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    TestServer::new(build_router(AppState { db })).unwrap()
}

pub async fn create_user(server: &TestServer, username: &str, password: &str) -> Value {
    let response = server
        .post("/api/users/")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_auction(server: &TestServer, seller_id: i64, title: &str, starting_bid: Value) -> Value {
    let response = server
        .post(&format!("/api/auctions/{seller_id}"))
        .json(&json!({
            "title": title,
            "date": "2026-09-01",
            "description": "a fine item",
            "starting_bid": starting_bid,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn place_bid(server: &TestServer, auction_id: i64, amount: i64, user_id: i64) -> Value {
    let response = server
        .post(&format!("/api/bids/{auction_id}/"))
        .json(&json!({ "amount": amount, "user_id": user_id }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}
