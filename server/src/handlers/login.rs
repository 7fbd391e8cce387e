use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::error::MarketError;
use crate::handlers::require_body;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::login::LoginUseCase;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ── POST /api/login/ ─────────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, MarketError> {
    let body = require_body(body)?;
    // A parseable body without both fields answers 200 with an error payload,
    // not an error status.
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Ok(Json(json!({ "error": "Invalid body" })).into_response());
    };
    let usecase = LoginUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(&username, &password).await?;
    Ok(Json(UserResponse::from(record)).into_response())
}
