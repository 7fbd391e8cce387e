use crate::domain::repository::{AuctionRepository, BidRepository, UserRepository};
use crate::domain::types::User;
use crate::error::MarketError;

// ── Record ───────────────────────────────────────────────────────────────────

/// A user together with the ids of its owned auctions and bids — the shape
/// every user endpoint serializes.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub auction_ids: Vec<i32>,
    pub bid_ids: Vec<i32>,
}

pub(crate) async fn load_user_record<A, B>(
    user: User,
    auctions: &A,
    bids: &B,
) -> Result<UserRecord, MarketError>
where
    A: AuctionRepository,
    B: BidRepository,
{
    let auction_ids = auctions.list_ids_by_seller(user.id).await?;
    let bid_ids = bids.list_ids_by_bidder(user.id).await?;
    Ok(UserRecord {
        user,
        auction_ids,
        bid_ids,
    })
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> ListUsersUseCase<U, A, B> {
    pub async fn execute(&self) -> Result<Vec<UserRecord>, MarketError> {
        let users = self.users.list().await?;
        let mut records = Vec::with_capacity(users.len());
        for user in users {
            records.push(load_user_record(user, &self.auctions, &self.bids).await?);
        }
        Ok(records)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> GetUserUseCase<U, A, B> {
    pub async fn execute(&self, user_id: i32) -> Result<UserRecord, MarketError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(MarketError::UserNotFound)?;
        load_user_record(user, &self.auctions, &self.bids).await
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> CreateUserUseCase<U, A, B> {
    /// Inserts the row as given. A duplicate username surfaces as a
    /// storage-layer failure, not a handled validation case.
    pub async fn execute(&self, username: &str, password: &str) -> Result<UserRecord, MarketError> {
        let user = self.users.create(username, password).await?;
        load_user_record(user, &self.auctions, &self.bids).await
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

pub struct UpdateUserUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> UpdateUserUseCase<U, A, B> {
    /// Full overwrite: an absent field is written back as NULL.
    pub async fn execute(
        &self,
        user_id: i32,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<UserRecord, MarketError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(MarketError::UserNotFound);
        }
        let user = self.users.overwrite(user_id, username, password).await?;
        load_user_record(user, &self.auctions, &self.bids).await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> DeleteUserUseCase<U, A, B> {
    /// Deletes the user and everything the user owns, returning a snapshot
    /// of the record taken before deletion.
    pub async fn execute(&self, user_id: i32) -> Result<UserRecord, MarketError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(MarketError::UserNotFound)?;
        let record = load_user_record(user, &self.auctions, &self.bids).await?;
        self.users.delete(user_id).await?;
        Ok(record)
    }
}
