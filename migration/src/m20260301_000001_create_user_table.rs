use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::Account))
                    .col(string(User::Password))
                    .col(integer(User::Role).default(0))
                    .col(string(User::Name))
                    .col(string(User::Phone))
                    .col(string_null(User::Avatar))
                    .col(boolean(User::Blacklist).default(false))
                    .col(string(User::BlacklistReason).default(""))
                    .col(timestamp(User::CreatedAt))
                    .col(timestamp(User::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Account,
    Password,
    Role,
    Name,
    Phone,
    Avatar,
    Blacklist,
    BlacklistReason,
    CreatedAt,
    UpdatedAt,
}
