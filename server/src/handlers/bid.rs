use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Bid;
use crate::error::MarketError;
use crate::handlers::require_body;
use crate::state::AppState;
use crate::usecase::bid::{
    CreateBidUseCase, DeleteBidUseCase, GetBidUseCase, ListBidderBidsUseCase, ListBidsUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct BidResponse {
    pub id: i32,
    pub amount: i32,
    pub accepted: bool,
    pub bidder: i32,
    pub auction: i32,
}

impl From<Bid> for BidResponse {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            amount: bid.amount,
            accepted: bid.accepted,
            bidder: bid.bidder_id,
            auction: bid.auction_id,
        }
    }
}

// ── GET /api/bids/ ───────────────────────────────────────────────────────────

pub async fn list_bids(
    State(state): State<AppState>,
) -> Result<Json<Vec<BidResponse>>, MarketError> {
    let usecase = ListBidsUseCase {
        bids: state.bid_repo(),
    };
    let bids = usecase.execute().await?;
    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}

// ── GET /api/bids/{id}/ ──────────────────────────────────────────────────────

pub async fn get_bid(
    State(state): State<AppState>,
    Path(bid_id): Path<i32>,
) -> Result<Json<BidResponse>, MarketError> {
    let usecase = GetBidUseCase {
        bids: state.bid_repo(),
    };
    let bid = usecase.execute(bid_id).await?;
    Ok(Json(bid.into()))
}

// ── POST /api/bids/{id}/ ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBidRequest {
    pub amount: Option<i64>,
    pub user_id: Option<i64>,
}

pub async fn create_bid(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
    body: Result<Json<CreateBidRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BidResponse>), MarketError> {
    let body = require_body(body)?;
    // Zero counts as absent, so a bid of 0 is rejected here.
    let (Some(amount), Some(user_id)) = (
        body.amount.filter(|a| *a != 0),
        body.user_id.filter(|u| *u != 0),
    ) else {
        return Err(MarketError::MissingBidFields);
    };
    let usecase = CreateBidUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    // The bidder id is accepted unchecked, whether or not such a user exists.
    let bid = usecase
        .execute(auction_id, amount as i32, user_id as i32)
        .await?;
    Ok((StatusCode::CREATED, Json(bid.into())))
}

// ── DELETE /api/bids/{id}/ ───────────────────────────────────────────────────

pub async fn delete_bid(
    State(state): State<AppState>,
    Path(bid_id): Path<i32>,
) -> Result<Json<BidResponse>, MarketError> {
    let usecase = DeleteBidUseCase {
        bids: state.bid_repo(),
    };
    let bid = usecase.execute(bid_id).await?;
    Ok(Json(bid.into()))
}

// ── GET /api/bids/users/{id}/ ────────────────────────────────────────────────

pub async fn list_bidder_bids(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<BidResponse>>, MarketError> {
    let usecase = ListBidderBidsUseCase {
        users: state.user_repo(),
        bids: state.bid_repo(),
    };
    let bids = usecase.execute(user_id).await?;
    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}
