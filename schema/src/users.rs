use sea_orm::entity::prelude::*;

/// Account that owns auctions and places bids.
///
/// `username` and `password` are nullable because updates are full
/// overwrites: an omitted field is written back as NULL.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::auctions::Entity")]
    Auctions,
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
}

impl Related<super::auctions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Auctions.def()
    }
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
