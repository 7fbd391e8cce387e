use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::handlers::require_body;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase,
    UserRecord,
};

// ── Response type ────────────────────────────────────────────────────────────

/// Serialized user. The password is never exposed.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: Option<String>,
    pub auctions: Vec<i32>,
    pub bids: Vec<i32>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.user.id,
            username: record.user.username,
            auctions: record.auction_ids,
            bids: record.bid_ids,
        }
    }
}

// ── GET /api/users/ ──────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, MarketError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let records = usecase.execute().await?;
    Ok(Json(records.into_iter().map(UserResponse::from).collect()))
}

// ── GET /api/users/{id}/ ─────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, MarketError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(user_id).await?;
    Ok(Json(record.into()))
}

// ── POST /api/users/ ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), MarketError> {
    let body = require_body(body)?;
    let (Some(username), Some(password)) = (
        body.username.filter(|u| !u.is_empty()),
        body.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(MarketError::MissingCredentials);
    };
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(&username, &password).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

// ── POST /api/users/{id}/ ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, MarketError> {
    let body = require_body(body)?;
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    // Full overwrite: an absent field is written back as NULL.
    let record = usecase
        .execute(user_id, body.username.as_deref(), body.password.as_deref())
        .await?;
    Ok(Json(record.into()))
}

// ── DELETE /api/users/{id}/ ──────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, MarketError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
        auctions: state.auction_repo(),
        bids: state.bid_repo(),
    };
    let record = usecase.execute(user_id).await?;
    Ok(Json(record.into()))
}
