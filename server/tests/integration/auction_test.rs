use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_auction, create_user, place_bid, test_server};

#[tokio::test]
async fn should_create_auction_with_defaults() {
    let server = test_server().await;
    let seller = create_user(&server, "seller", "pw").await;
    let seller_id = seller["id"].as_i64().unwrap();

    let auction = create_auction(&server, seller_id, "lamp", json!(10)).await;
    assert_eq!(auction["title"], "lamp");
    assert_eq!(auction["starting_bid"], 10);
    assert_eq!(auction["highest_bid"], 0);
    assert_eq!(auction["status"], true);
    assert_eq!(auction["seller"], seller_id);
    assert_eq!(auction["bids"], json!([]));
}

#[tokio::test]
async fn should_coerce_numeric_string_starting_bid() {
    let server = test_server().await;

    let auction = create_auction(&server, 1, "lamp", json!("100")).await;
    assert_eq!(auction["starting_bid"], 100);
}

#[tokio::test]
async fn should_reject_non_numeric_starting_bid() {
    let server = test_server().await;

    let response = server
        .post("/api/auctions/1")
        .json(&json!({ "title": "lamp", "date": "2026-09-01", "starting_bid": "abc" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Starting bid must be a number"
    );
}

#[tokio::test]
async fn should_reject_auction_without_title() {
    let server = test_server().await;

    let response = server
        .post("/api/auctions/1")
        .json(&json!({ "date": "2026-09-01", "starting_bid": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        "Title, date, and starting_bid are required"
    );
}

#[tokio::test]
async fn should_treat_zero_starting_bid_as_missing() {
    let server = test_server().await;

    let response = server
        .post("/api/auctions/1")
        .json(&json!({ "title": "lamp", "date": "2026-09-01", "starting_bid": 0 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_accept_unknown_seller_id() {
    let server = test_server().await;

    // No such user, but the listing is created anyway.
    let auction = create_auction(&server, 999, "lamp", json!(10)).await;
    assert_eq!(auction["seller"], 999);
}

#[tokio::test]
async fn should_overwrite_omitted_fields_with_null_on_update() {
    let server = test_server().await;
    let auction = create_auction(&server, 1, "lamp", json!(10)).await;
    let id = auction["id"].as_i64().unwrap();
    place_bid(&server, id, 25, 1).await;

    let response = server
        .post(&format!("/api/auctions/{id}/"))
        .json(&json!({ "title": "better lamp" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["title"], "better lamp");
    assert_eq!(updated["date"], Value::Null);
    assert_eq!(updated["starting_bid"], Value::Null);
    assert_eq!(updated["status"], Value::Null);
    // The running maximum is not part of the overwrite.
    assert_eq!(updated["highest_bid"], 25);
}

#[tokio::test]
async fn should_404_updating_unknown_auction() {
    let server = test_server().await;

    let response = server
        .post("/api/auctions/999/")
        .json(&json!({ "title": "ghost" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Auction not found");
}

#[tokio::test]
async fn should_list_seller_auctions() {
    let server = test_server().await;
    let seller = create_user(&server, "seller", "pw").await;
    let seller_id = seller["id"].as_i64().unwrap();
    create_auction(&server, seller_id, "lamp", json!(10)).await;
    create_auction(&server, seller_id, "chair", json!(20)).await;

    let response = server.get(&format!("/api/auctions/user/{seller_id}/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let auctions = response.json::<Value>();
    assert_eq!(auctions.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn should_404_listing_auctions_of_unknown_user() {
    let server = test_server().await;

    let response = server.get("/api/auctions/user/999/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "User not found");
}

#[tokio::test]
async fn should_list_bids_of_auction() {
    let server = test_server().await;
    let auction = create_auction(&server, 1, "lamp", json!(10)).await;
    let id = auction["id"].as_i64().unwrap();
    place_bid(&server, id, 25, 1).await;
    place_bid(&server, id, 30, 2).await;

    let response = server.get(&format!("/api/auctions/{id}/bids/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let bids = response.json::<Value>();
    assert_eq!(bids.as_array().map(Vec::len), Some(2));
    assert_eq!(bids[0]["auction"], id);
}

#[tokio::test]
async fn should_404_listing_bids_of_unknown_auction() {
    let server = test_server().await;

    let response = server.get("/api/auctions/999/bids/").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "Auction not found");
}

#[tokio::test]
async fn should_delete_auction_with_its_bids() {
    let server = test_server().await;
    let auction = create_auction(&server, 1, "lamp", json!(10)).await;
    let id = auction["id"].as_i64().unwrap();
    let bid = place_bid(&server, id, 25, 1).await;
    let bid_id = bid["id"].as_i64().unwrap();

    let response = server.delete(&format!("/api/auctions/{id}/")).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = server.get(&format!("/api/bids/{bid_id}/")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_fail_with_500_on_malformed_body() {
    let server = test_server().await;

    let response = server
        .post("/api/auctions/1")
        .text("{ not json")
        .content_type("application/json")
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"], "Internal Server Error");
}
