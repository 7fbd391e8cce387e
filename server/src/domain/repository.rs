#![allow(async_fn_in_trait)]

use crate::domain::types::{Auction, AuctionOverwrite, Bid, NewAuction, User};
use crate::error::MarketError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, MarketError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MarketError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, MarketError>;
    async fn create(&self, username: &str, password: &str) -> Result<User, MarketError>;
    /// Full overwrite: both fields are written back as given, including NULL.
    async fn overwrite(
        &self,
        id: i32,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, MarketError>;
    /// Transactionally delete the user, the user's bids, bids on the user's
    /// auctions, and the user's auctions.
    async fn delete(&self, id: i32) -> Result<(), MarketError>;
}

/// Repository for auction listings.
pub trait AuctionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Auction>, MarketError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Auction>, MarketError>;
    async fn list_by_seller(&self, seller_id: i32) -> Result<Vec<Auction>, MarketError>;
    async fn list_ids_by_seller(&self, seller_id: i32) -> Result<Vec<i32>, MarketError>;
    async fn create(&self, auction: &NewAuction) -> Result<Auction, MarketError>;
    async fn overwrite(&self, id: i32, fields: &AuctionOverwrite) -> Result<Auction, MarketError>;
    /// Record a new highest bid. Callers compare against the current value
    /// first; this method writes unconditionally.
    async fn set_highest_bid(&self, id: i32, amount: i32) -> Result<(), MarketError>;
    /// Transactionally delete the auction and its bids.
    async fn delete(&self, id: i32) -> Result<(), MarketError>;
}

/// Repository for bids.
pub trait BidRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Bid>, MarketError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Bid>, MarketError>;
    async fn list_by_auction(&self, auction_id: i32) -> Result<Vec<Bid>, MarketError>;
    async fn list_by_bidder(&self, bidder_id: i32) -> Result<Vec<Bid>, MarketError>;
    async fn list_ids_by_auction(&self, auction_id: i32) -> Result<Vec<i32>, MarketError>;
    async fn list_ids_by_bidder(&self, bidder_id: i32) -> Result<Vec<i32>, MarketError>;
    async fn create(
        &self,
        amount: i32,
        bidder_id: i32,
        auction_id: i32,
    ) -> Result<Bid, MarketError>;
    async fn delete(&self, id: i32) -> Result<(), MarketError>;
}
