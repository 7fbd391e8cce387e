use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Ownership links are plain integer columns, no foreign keys: owner
        // ids are accepted unchecked, and cascading removal happens in the
        // repository delete routines.
        manager
            .create_table(
                Table::create()
                    .table(Auction::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Auction::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Auction::Title).string())
                    .col(ColumnDef::new(Auction::Date).string())
                    .col(ColumnDef::new(Auction::Description).string())
                    .col(ColumnDef::new(Auction::StartingBid).integer())
                    .col(
                        ColumnDef::new(Auction::HighestBid)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Auction::Status).boolean())
                    .col(ColumnDef::new(Auction::UserId).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Auction::Table)
                    .col(Auction::UserId)
                    .name("idx_auction_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Auction::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Auction {
    Table,
    Id,
    Title,
    Date,
    Description,
    StartingBid,
    HighestBid,
    Status,
    UserId,
}
