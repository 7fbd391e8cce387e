use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bid::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bid::Amount).integer().not_null())
                    .col(
                        ColumnDef::new(Bid::Accepted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Bid::UserId).integer().not_null())
                    .col(ColumnDef::new(Bid::AuctionId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Bid::Table)
                    .col(Bid::UserId)
                    .name("idx_bid_user_id")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Bid::Table)
                    .col(Bid::AuctionId)
                    .name("idx_bid_auction_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Bid {
    Table,
    Id,
    Amount,
    Accepted,
    UserId,
    AuctionId,
}
