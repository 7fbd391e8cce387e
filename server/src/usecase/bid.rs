use crate::domain::repository::{AuctionRepository, BidRepository, UserRepository};
use crate::domain::types::Bid;
use crate::error::MarketError;

// ── ListBids ─────────────────────────────────────────────────────────────────

pub struct ListBidsUseCase<B> {
    pub bids: B,
}

impl<B: BidRepository> ListBidsUseCase<B> {
    pub async fn execute(&self) -> Result<Vec<Bid>, MarketError> {
        self.bids.list().await
    }
}

// ── GetBid ───────────────────────────────────────────────────────────────────

pub struct GetBidUseCase<B> {
    pub bids: B,
}

impl<B: BidRepository> GetBidUseCase<B> {
    pub async fn execute(&self, bid_id: i32) -> Result<Bid, MarketError> {
        self.bids
            .find_by_id(bid_id)
            .await?
            .ok_or(MarketError::BidNotFound)
    }
}

// ── CreateBid ────────────────────────────────────────────────────────────────

pub struct CreateBidUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> CreateBidUseCase<A, B> {
    /// Inserts the bid, then raises the auction's highest bid when the amount
    /// strictly exceeds it. The bidder id is not checked against the user
    /// table, and a closed auction still accepts bids.
    pub async fn execute(
        &self,
        auction_id: i32,
        amount: i32,
        bidder_id: i32,
    ) -> Result<Bid, MarketError> {
        let auction = self
            .auctions
            .find_by_id(auction_id)
            .await?
            .ok_or(MarketError::AuctionNotFound)?;

        let bid = self.bids.create(amount, bidder_id, auction_id).await?;

        // Separate second write: under concurrent submissions the last
        // committed writer wins.
        if amount > auction.highest_bid {
            self.auctions.set_highest_bid(auction_id, amount).await?;
        }
        Ok(bid)
    }
}

// ── DeleteBid ────────────────────────────────────────────────────────────────

pub struct DeleteBidUseCase<B> {
    pub bids: B,
}

impl<B: BidRepository> DeleteBidUseCase<B> {
    /// Removes the bid. The parent auction's highest bid is NOT recomputed,
    /// so deleting the winning bid leaves a stale value behind.
    pub async fn execute(&self, bid_id: i32) -> Result<Bid, MarketError> {
        let bid = self
            .bids
            .find_by_id(bid_id)
            .await?
            .ok_or(MarketError::BidNotFound)?;
        self.bids.delete(bid_id).await?;
        Ok(bid)
    }
}

// ── ListBidderBids ───────────────────────────────────────────────────────────

pub struct ListBidderBidsUseCase<U, B> {
    pub users: U,
    pub bids: B,
}

impl<U: UserRepository, B: BidRepository> ListBidderBidsUseCase<U, B> {
    pub async fn execute(&self, bidder_id: i32) -> Result<Vec<Bid>, MarketError> {
        if self.users.find_by_id(bidder_id).await?.is_none() {
            return Err(MarketError::UserNotFound);
        }
        self.bids.list_by_bidder(bidder_id).await
    }
}
