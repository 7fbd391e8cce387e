use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::types::{AuctionOverwrite, NewAuction};
use crate::error::MarketError;
use crate::handlers::bid::BidResponse;
use crate::handlers::require_body;
use crate::state::AppState;
use crate::usecase::auction::{
    AuctionRecord, CreateAuctionUseCase, DeleteAuctionUseCase, GetAuctionUseCase,
    ListAuctionBidsUseCase, ListAuctionsUseCase, ListSellerAuctionsUseCase, UpdateAuctionUseCase,
};

// ── Response type ────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AuctionResponse {
    pub id: i32,
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<i32>,
    pub highest_bid: i32,
    pub seller: i32,
    pub status: Option<bool>,
    pub bids: Vec<i32>,
}

impl From<AuctionRecord> for AuctionResponse {
    fn from(record: AuctionRecord) -> Self {
        Self {
            id: record.auction.id,
            title: record.auction.title,
            date: record.auction.date,
            description: record.auction.description,
            starting_bid: record.auction.starting_bid,
            highest_bid: record.auction.highest_bid,
            seller: record.auction.seller_id,
            status: record.auction.status,
            bids: record.bid_ids,
        }
    }
}

// ── Field coercion helpers ───────────────────────────────────────────────────

/// Presence check with loose semantics: null, `0`, `false`, and the empty
/// string all count as absent.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Renders a loosely typed field as the text that gets stored.
fn as_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// The starting bid arrives as either a JSON number or a numeric string.
/// Anything else is rejected.
fn coerce_starting_bid(value: &Value) -> Result<i32, MarketError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i as i32);
            }
            match n.as_f64() {
                Some(f) => Ok(f as i32),
                None => Err(MarketError::StartingBidNotNumeric),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| MarketError::StartingBidNotNumeric),
        _ => Err(MarketError::StartingBidNotNumeric),
    }
}

// ── GET /api/auctions/ ───────────────────────────────────────────────────────

pub async fn list_auctions(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuctionResponse>>, MarketError> {
    let usecase = ListAuctionsUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let records = usecase.execute().await?;
    Ok(Json(
        records.into_iter().map(AuctionResponse::from).collect(),
    ))
}

// ── GET /api/auctions/{id}/ ──────────────────────────────────────────────────

pub async fn get_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
) -> Result<Json<AuctionResponse>, MarketError> {
    let usecase = GetAuctionUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(auction_id).await?;
    Ok(Json(record.into()))
}

// ── POST /api/auctions/{id} ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAuctionRequest {
    pub title: Option<Value>,
    pub date: Option<Value>,
    pub description: Option<String>,
    pub starting_bid: Option<Value>,
}

pub async fn create_auction(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: Result<Json<CreateAuctionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuctionResponse>), MarketError> {
    let body = require_body(body)?;
    if !is_truthy(body.title.as_ref())
        || !is_truthy(body.date.as_ref())
        || !is_truthy(body.starting_bid.as_ref())
    {
        return Err(MarketError::MissingAuctionFields);
    }
    let (Some(title), Some(date), Some(raw_bid)) = (body.title, body.date, body.starting_bid)
    else {
        return Err(MarketError::MissingAuctionFields);
    };
    let title = as_text(title);
    let date = as_text(date);
    let starting_bid = coerce_starting_bid(&raw_bid)?;

    let usecase = CreateAuctionUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    // The seller id from the path is taken as-is, whether or not such a
    // user exists.
    let record = usecase
        .execute(&NewAuction {
            title,
            date,
            starting_bid,
            description: body.description,
            seller_id: user_id,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

// ── POST /api/auctions/{id}/ ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAuctionRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<i32>,
    pub status: Option<bool>,
}

pub async fn update_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
    body: Result<Json<UpdateAuctionRequest>, JsonRejection>,
) -> Result<Json<AuctionResponse>, MarketError> {
    let body = require_body(body)?;
    let usecase = UpdateAuctionUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    // Full overwrite: an absent field is written back as NULL.
    let record = usecase
        .execute(
            auction_id,
            &AuctionOverwrite {
                title: body.title,
                date: body.date,
                description: body.description,
                starting_bid: body.starting_bid,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(record.into()))
}

// ── DELETE /api/auctions/{id}/ ───────────────────────────────────────────────

pub async fn delete_auction(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
) -> Result<Json<AuctionResponse>, MarketError> {
    let usecase = DeleteAuctionUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(auction_id).await?;
    Ok(Json(record.into()))
}

// ── GET /api/auctions/user/{id}/ ─────────────────────────────────────────────

pub async fn list_seller_auctions(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<AuctionResponse>>, MarketError> {
    let usecase = ListSellerAuctionsUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let records = usecase.execute(user_id).await?;
    Ok(Json(
        records.into_iter().map(AuctionResponse::from).collect(),
    ))
}

// ── GET /api/auctions/{id}/bids/ ─────────────────────────────────────────────

pub async fn list_auction_bids(
    State(state): State<AppState>,
    Path(auction_id): Path<i32>,
) -> Result<Json<Vec<BidResponse>>, MarketError> {
    let usecase = ListAuctionBidsUseCase {
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let bids = usecase.execute(auction_id).await?;
    Ok(Json(bids.into_iter().map(BidResponse::from).collect()))
}
