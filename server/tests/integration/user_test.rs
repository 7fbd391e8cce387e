use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_auction, create_user, place_bid, test_server};

#[tokio::test]
async fn should_create_user_and_list_it() {
    let server = test_server().await;

    let created = create_user(&server, "alice", "s3cret").await;
    assert_eq!(created["username"], "alice");
    assert_eq!(created["auctions"], json!([]));
    assert_eq!(created["bids"], json!([]));
    assert!(created.get("password").is_none());

    let response = server.get("/api/users/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let users = response.json::<Value>();
    assert_eq!(users.as_array().map(Vec::len), Some(1));
    assert_eq!(users[0]["username"], "alice");
}

#[tokio::test]
async fn should_reject_user_without_password() {
    let server = test_server().await;

    let response = server
        .post("/api/users/")
        .json(&json!({ "username": "alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Both username and password are required"
    );
}

#[tokio::test]
async fn should_treat_empty_username_as_missing() {
    let server = test_server().await;

    let response = server
        .post("/api/users/")
        .json(&json!({ "username": "", "password": "s3cret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_fail_with_500_on_duplicate_username() {
    let server = test_server().await;
    create_user(&server, "alice", "s3cret").await;

    let response = server
        .post("/api/users/")
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "Internal Server Error");
}

#[tokio::test]
async fn should_get_user_by_id() {
    let server = test_server().await;
    let created = create_user(&server, "alice", "s3cret").await;
    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/users/{id}/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["username"], "alice");
}

#[tokio::test]
async fn should_404_on_unknown_user() {
    let server = test_server().await;

    let response = server.get("/api/users/999/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "User not found");
}

#[tokio::test]
async fn should_overwrite_omitted_fields_with_null_on_update() {
    let server = test_server().await;
    let created = create_user(&server, "alice", "s3cret").await;
    let id = created["id"].as_i64().unwrap();

    // Update carries only the username, so the stored password becomes NULL.
    let response = server
        .post(&format!("/api/users/{id}/"))
        .json(&json!({ "username": "alice2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["username"], "alice2");

    // The old credentials no longer authenticate.
    let response = server
        .post("/api/login/")
        .json(&json!({ "username": "alice2", "password": "s3cret" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_404_updating_unknown_user() {
    let server = test_server().await;

    let response = server
        .post("/api/users/999/")
        .json(&json!({ "username": "ghost" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_cascade_delete_auctions_and_bids_with_user() {
    let server = test_server().await;
    let seller = create_user(&server, "seller", "pw").await;
    let bidder = create_user(&server, "bidder", "pw").await;
    let seller_id = seller["id"].as_i64().unwrap();
    let bidder_id = bidder["id"].as_i64().unwrap();

    let auction = create_auction(&server, seller_id, "lamp", json!(10)).await;
    let auction_id = auction["id"].as_i64().unwrap();
    place_bid(&server, auction_id, 25, bidder_id).await;

    let response = server.delete(&format!("/api/users/{seller_id}/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let snapshot = response.json::<Value>();
    assert_eq!(snapshot["auctions"], json!([auction_id]));

    // The auction and the bid on it are gone with their owner.
    let response = server.get(&format!("/api/auctions/{auction_id}/")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let response = server.get("/api/bids/").await;
    assert_eq!(response.json::<Value>(), json!([]));

    // The bidder survives with an empty bid list.
    let response = server.get(&format!("/api/users/{bidder_id}/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["bids"], json!([]));
}

#[tokio::test]
async fn should_404_deleting_unknown_user() {
    let server = test_server().await;

    let response = server.delete("/api/users/999/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
