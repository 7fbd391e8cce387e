use sea_orm::DatabaseConnection;

use crate::infra::db::{DbAuctionRepository, DbBidRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn auction_repo(&self) -> DbAuctionRepository {
        DbAuctionRepository {
            db: self.db.clone(),
        }
    }

    pub fn bid_repo(&self) -> DbBidRepository {
        DbBidRepository {
            db: self.db.clone(),
        }
    }
}
