use sea_orm::entity::prelude::*;

/// Sellable listing created by a user.
///
/// `highest_bid` starts at 0 and is only raised when a strictly greater bid
/// is placed. `status` is true (open) on creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub starting_bid: Option<i32>,
    pub highest_bid: i32,
    pub status: Option<bool>,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::bids::Entity")]
    Bids,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::bids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
