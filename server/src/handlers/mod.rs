use anyhow::anyhow;
use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::MarketError;

pub mod auction;
pub mod bid;
pub mod login;
pub mod user;

/// Unwrap an extracted JSON body. A body that cannot be parsed or
/// deserialized is not a handled validation case — it surfaces as a 500 like
/// any other unhandled failure. The login endpoint layers its own rules on
/// top of this.
pub(crate) fn require_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, MarketError> {
    let Json(body) =
        body.map_err(|rejection| anyhow!("unreadable request body: {rejection}"))?;
    Ok(body)
}
