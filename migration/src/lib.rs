use sea_orm_migration::prelude::*;

mod m20260829_000001_create_user;
mod m20260829_000002_create_auction;
mod m20260829_000003_create_bid;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260829_000001_create_user::Migration),
            Box::new(m20260829_000002_create_auction::Migration),
            Box::new(m20260829_000003_create_bid::Migration),
        ]
    }
}
