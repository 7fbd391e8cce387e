use crate::domain::repository::{AuctionRepository, BidRepository, UserRepository};
use crate::domain::types::{Auction, AuctionOverwrite, Bid, NewAuction};
use crate::error::MarketError;

// ── Record ───────────────────────────────────────────────────────────────────

/// An auction together with the ids of its bids — the shape every auction
/// endpoint serializes.
#[derive(Debug, Clone)]
pub struct AuctionRecord {
    pub auction: Auction,
    pub bid_ids: Vec<i32>,
}

pub(crate) async fn load_auction_record<B>(
    auction: Auction,
    bids: &B,
) -> Result<AuctionRecord, MarketError>
where
    B: BidRepository,
{
    let bid_ids = bids.list_ids_by_auction(auction.id).await?;
    Ok(AuctionRecord { auction, bid_ids })
}

// ── ListAuctions ─────────────────────────────────────────────────────────────

pub struct ListAuctionsUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> ListAuctionsUseCase<A, B> {
    pub async fn execute(&self) -> Result<Vec<AuctionRecord>, MarketError> {
        let auctions = self.auctions.list().await?;
        let mut records = Vec::with_capacity(auctions.len());
        for auction in auctions {
            records.push(load_auction_record(auction, &self.bids).await?);
        }
        Ok(records)
    }
}

// ── GetAuction ───────────────────────────────────────────────────────────────

pub struct GetAuctionUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> GetAuctionUseCase<A, B> {
    pub async fn execute(&self, auction_id: i32) -> Result<AuctionRecord, MarketError> {
        let auction = self
            .auctions
            .find_by_id(auction_id)
            .await?
            .ok_or(MarketError::AuctionNotFound)?;
        load_auction_record(auction, &self.bids).await
    }
}

// ── CreateAuction ────────────────────────────────────────────────────────────

pub struct CreateAuctionUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> CreateAuctionUseCase<A, B> {
    /// The seller id is taken as given — it is not checked against the user
    /// table.
    pub async fn execute(&self, auction: &NewAuction) -> Result<AuctionRecord, MarketError> {
        let auction = self.auctions.create(auction).await?;
        load_auction_record(auction, &self.bids).await
    }
}

// ── UpdateAuction ────────────────────────────────────────────────────────────

pub struct UpdateAuctionUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> UpdateAuctionUseCase<A, B> {
    /// Full overwrite of title, date, starting_bid, description, and status.
    /// No field is validated on this path; a closed status does not block
    /// future bids.
    pub async fn execute(
        &self,
        auction_id: i32,
        fields: &AuctionOverwrite,
    ) -> Result<AuctionRecord, MarketError> {
        if self.auctions.find_by_id(auction_id).await?.is_none() {
            return Err(MarketError::AuctionNotFound);
        }
        let auction = self.auctions.overwrite(auction_id, fields).await?;
        load_auction_record(auction, &self.bids).await
    }
}

// ── DeleteAuction ────────────────────────────────────────────────────────────

pub struct DeleteAuctionUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> DeleteAuctionUseCase<A, B> {
    /// Deletes the auction and its bids, returning a snapshot of the record
    /// taken before deletion.
    pub async fn execute(&self, auction_id: i32) -> Result<AuctionRecord, MarketError> {
        let auction = self
            .auctions
            .find_by_id(auction_id)
            .await?
            .ok_or(MarketError::AuctionNotFound)?;
        let record = load_auction_record(auction, &self.bids).await?;
        self.auctions.delete(auction_id).await?;
        Ok(record)
    }
}

// ── ListSellerAuctions ───────────────────────────────────────────────────────

pub struct ListSellerAuctionsUseCase<U, A, B> {
    pub users: U,
    pub auctions: A,
    pub bids: B,
}

impl<U: UserRepository, A: AuctionRepository, B: BidRepository> ListSellerAuctionsUseCase<U, A, B> {
    pub async fn execute(&self, seller_id: i32) -> Result<Vec<AuctionRecord>, MarketError> {
        if self.users.find_by_id(seller_id).await?.is_none() {
            return Err(MarketError::UserNotFound);
        }
        let auctions = self.auctions.list_by_seller(seller_id).await?;
        let mut records = Vec::with_capacity(auctions.len());
        for auction in auctions {
            records.push(load_auction_record(auction, &self.bids).await?);
        }
        Ok(records)
    }
}

// ── ListAuctionBids ──────────────────────────────────────────────────────────

pub struct ListAuctionBidsUseCase<A, B> {
    pub auctions: A,
    pub bids: B,
}

impl<A: AuctionRepository, B: BidRepository> ListAuctionBidsUseCase<A, B> {
    pub async fn execute(&self, auction_id: i32) -> Result<Vec<Bid>, MarketError> {
        if self.auctions.find_by_id(auction_id).await?.is_none() {
            return Err(MarketError::AuctionNotFound);
        }
        self.bids.list_by_auction(auction_id).await
    }
}
