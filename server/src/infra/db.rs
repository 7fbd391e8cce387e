use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, TransactionTrait,
};

use bidmarket_schema::{auctions, bids, users};

use crate::domain::repository::{AuctionRepository, BidRepository, UserRepository};
use crate::domain::types::{Auction, AuctionOverwrite, Bid, NewAuction, User};
use crate::error::MarketError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, MarketError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, MarketError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, MarketError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, username: &str, password: &str) -> Result<User, MarketError> {
        // A duplicate username trips the unique index and surfaces as a
        // plain internal error.
        let model = users::ActiveModel {
            id: NotSet,
            username: Set(Some(username.to_owned())),
            password: Set(Some(password.to_owned())),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(user_from_model(model))
    }

    async fn overwrite(
        &self,
        id: i32,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<User, MarketError> {
        let model = users::ActiveModel {
            id: Set(id),
            username: Set(username.map(str::to_owned)),
            password: Set(password.map(str::to_owned)),
        }
        .update(&self.db)
        .await
        .context("overwrite user")?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<(), MarketError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let auction_ids: Vec<i32> = auctions::Entity::find()
                        .filter(auctions::Column::UserId.eq(id))
                        .all(txn)
                        .await?
                        .into_iter()
                        .map(|a| a.id)
                        .collect();

                    let _ = bids::Entity::delete_many()
                        .filter(bids::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    let _ = bids::Entity::delete_many()
                        .filter(bids::Column::AuctionId.is_in(auction_ids))
                        .exec(txn)
                        .await?;
                    let _ = auctions::Entity::delete_many()
                        .filter(auctions::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    let _ = users::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("delete user and dependents")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        password: model.password,
    }
}

// ── Auction repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuctionRepository {
    pub db: DatabaseConnection,
}

impl AuctionRepository for DbAuctionRepository {
    async fn list(&self) -> Result<Vec<Auction>, MarketError> {
        let models = auctions::Entity::find()
            .all(&self.db)
            .await
            .context("list auctions")?;
        Ok(models.into_iter().map(auction_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Auction>, MarketError> {
        let model = auctions::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find auction by id")?;
        Ok(model.map(auction_from_model))
    }

    async fn list_by_seller(&self, seller_id: i32) -> Result<Vec<Auction>, MarketError> {
        let models = auctions::Entity::find()
            .filter(auctions::Column::UserId.eq(seller_id))
            .all(&self.db)
            .await
            .context("list auctions by seller")?;
        Ok(models.into_iter().map(auction_from_model).collect())
    }

    async fn list_ids_by_seller(&self, seller_id: i32) -> Result<Vec<i32>, MarketError> {
        let models = auctions::Entity::find()
            .filter(auctions::Column::UserId.eq(seller_id))
            .all(&self.db)
            .await
            .context("list auction ids by seller")?;
        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn create(&self, auction: &NewAuction) -> Result<Auction, MarketError> {
        let model = auctions::ActiveModel {
            id: NotSet,
            title: Set(Some(auction.title.clone())),
            date: Set(Some(auction.date.clone())),
            description: Set(auction.description.clone()),
            starting_bid: Set(Some(auction.starting_bid)),
            highest_bid: Set(0),
            status: Set(Some(true)),
            user_id: Set(auction.seller_id),
        }
        .insert(&self.db)
        .await
        .context("create auction")?;
        Ok(auction_from_model(model))
    }

    async fn overwrite(&self, id: i32, fields: &AuctionOverwrite) -> Result<Auction, MarketError> {
        let model = auctions::ActiveModel {
            id: Set(id),
            title: Set(fields.title.clone()),
            date: Set(fields.date.clone()),
            description: Set(fields.description.clone()),
            starting_bid: Set(fields.starting_bid),
            status: Set(fields.status),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("overwrite auction")?;
        Ok(auction_from_model(model))
    }

    async fn set_highest_bid(&self, id: i32, amount: i32) -> Result<(), MarketError> {
        auctions::ActiveModel {
            id: Set(id),
            highest_bid: Set(amount),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set highest bid")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), MarketError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let _ = bids::Entity::delete_many()
                        .filter(bids::Column::AuctionId.eq(id))
                        .exec(txn)
                        .await?;
                    let _ = auctions::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("delete auction and bids")?;
        Ok(())
    }
}

fn auction_from_model(model: auctions::Model) -> Auction {
    Auction {
        id: model.id,
        title: model.title,
        date: model.date,
        description: model.description,
        starting_bid: model.starting_bid,
        highest_bid: model.highest_bid,
        status: model.status,
        seller_id: model.user_id,
    }
}

// ── Bid repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBidRepository {
    pub db: DatabaseConnection,
}

impl BidRepository for DbBidRepository {
    async fn list(&self) -> Result<Vec<Bid>, MarketError> {
        let models = bids::Entity::find()
            .all(&self.db)
            .await
            .context("list bids")?;
        Ok(models.into_iter().map(bid_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bid>, MarketError> {
        let model = bids::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find bid by id")?;
        Ok(model.map(bid_from_model))
    }

    async fn list_by_auction(&self, auction_id: i32) -> Result<Vec<Bid>, MarketError> {
        let models = bids::Entity::find()
            .filter(bids::Column::AuctionId.eq(auction_id))
            .all(&self.db)
            .await
            .context("list bids by auction")?;
        Ok(models.into_iter().map(bid_from_model).collect())
    }

    async fn list_by_bidder(&self, bidder_id: i32) -> Result<Vec<Bid>, MarketError> {
        let models = bids::Entity::find()
            .filter(bids::Column::UserId.eq(bidder_id))
            .all(&self.db)
            .await
            .context("list bids by bidder")?;
        Ok(models.into_iter().map(bid_from_model).collect())
    }

    async fn list_ids_by_auction(&self, auction_id: i32) -> Result<Vec<i32>, MarketError> {
        let models = bids::Entity::find()
            .filter(bids::Column::AuctionId.eq(auction_id))
            .all(&self.db)
            .await
            .context("list bid ids by auction")?;
        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn list_ids_by_bidder(&self, bidder_id: i32) -> Result<Vec<i32>, MarketError> {
        let models = bids::Entity::find()
            .filter(bids::Column::UserId.eq(bidder_id))
            .all(&self.db)
            .await
            .context("list bid ids by bidder")?;
        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn create(&self, amount: i32, bidder_id: i32, auction_id: i32) -> Result<Bid, MarketError> {
        let model = bids::ActiveModel {
            id: NotSet,
            amount: Set(amount),
            accepted: Set(false),
            user_id: Set(bidder_id),
            auction_id: Set(auction_id),
        }
        .insert(&self.db)
        .await
        .context("create bid")?;
        Ok(bid_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<(), MarketError> {
        let _ = bids::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete bid")?;
        Ok(())
    }
}

fn bid_from_model(model: bids::Model) -> Bid {
    Bid {
        id: model.id,
        amount: model.amount,
        accepted: model.accepted,
        bidder_id: model.user_id,
        auction_id: model.auction_id,
    }
}
