//! Create `company` table.
//!
//! `name` carries a unique index: concurrent inserts with the same name are
//! rejected by the database, not by a read-before-write check.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(pk_auto(Company::Id))
                    .col(string_len(Company::Name, 255).not_null())
                    .col(string_len(Company::Status, 32).not_null().default("Hiring"))
                    .col(string_len(Company::ApplicationLink, 512).not_null().default(""))
                    .col(text(Company::Notes).not_null())
                    .col(timestamp_with_time_zone(Company::LastUpdate).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_company_name_unique")
                    .table(Company::Table)
                    .col(Company::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company {
    Table,
    Id,
    Name,
    Status,
    ApplicationLink,
    Notes,
    LastUpdate,
}
