use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Marketplace error variants. Every error serializes to the wire as
/// `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("User not found")]
    UserNotFound,
    #[error("Auction not found")]
    AuctionNotFound,
    #[error("Bid not found")]
    BidNotFound,
    #[error("Both username and password are required")]
    MissingCredentials,
    #[error("Title, date, and starting_bid are required")]
    MissingAuctionFields,
    #[error("Starting bid must be a number")]
    StartingBidNotNumeric,
    #[error("Amount and user_id are required")]
    MissingBidFields,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::AuctionNotFound | Self::BidNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::MissingCredentials
            | Self::MissingAuctionFields
            | Self::StartingBidNotNumeric
            | Self::MissingBidFields => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, "internal error");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
