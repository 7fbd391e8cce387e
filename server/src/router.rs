use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    auction::{
        create_auction, delete_auction, get_auction, list_auction_bids, list_auctions,
        list_seller_auctions, update_auction,
    },
    bid::{create_bid, delete_bid, get_bid, list_bidder_bids, list_bids},
    login::login,
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

/// Handler for `GET /healthz` — liveness check.
async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
async fn readyz() -> StatusCode {
    StatusCode::OK
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/api/users/", get(list_users).post(create_user))
        .route(
            "/api/users/{id}/",
            get(get_user).post(update_user).delete(delete_user),
        )
        .route("/api/login/", post(login))
        // Auctions
        .route("/api/auctions/", get(list_auctions))
        // Creation nests under the seller's id, without a trailing slash.
        .route("/api/auctions/{id}", post(create_auction))
        .route(
            "/api/auctions/{id}/",
            get(get_auction).post(update_auction).delete(delete_auction),
        )
        .route("/api/auctions/user/{id}/", get(list_seller_auctions))
        .route("/api/auctions/{id}/bids/", get(list_auction_bids))
        // Bids
        .route("/api/bids/", get(list_bids))
        .route(
            "/api/bids/{id}/",
            get(get_bid).post(create_bid).delete(delete_bid),
        )
        .route("/api/bids/users/{id}/", get(list_bidder_bids))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
