/// Account that owns auctions and places bids.
///
/// `username` and `password` are optional at the store level: updates are
/// full overwrites, so an omitted field is written back as NULL.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sellable listing. `highest_bid` starts at 0 and only moves upward when a
/// strictly greater bid is placed; `date` is free text.
#[derive(Debug, Clone)]
pub struct Auction {
    pub id: i32,
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<i32>,
    pub highest_bid: i32,
    pub status: Option<bool>,
    pub seller_id: i32,
}

/// An amount offered by a user against a specific auction. `accepted` is
/// recorded but never flipped by any endpoint.
#[derive(Debug, Clone)]
pub struct Bid {
    pub id: i32,
    pub amount: i32,
    pub accepted: bool,
    pub bidder_id: i32,
    pub auction_id: i32,
}

/// Fields for a new auction row. The row is created open (`status` true)
/// with `highest_bid` 0 regardless of input.
#[derive(Debug, Clone)]
pub struct NewAuction {
    pub title: String,
    pub date: String,
    pub starting_bid: i32,
    pub description: Option<String>,
    pub seller_id: i32,
}

/// Full-overwrite payload for an auction update. Every field is reassigned
/// as given; an omitted field becomes NULL.
#[derive(Debug, Clone, Default)]
pub struct AuctionOverwrite {
    pub title: Option<String>,
    pub date: Option<String>,
    pub starting_bid: Option<i32>,
    pub description: Option<String>,
    pub status: Option<bool>,
}
