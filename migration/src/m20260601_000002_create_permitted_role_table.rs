use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PermittedRole::Table)
                    .if_not_exists()
                    .col(string(PermittedRole::RoleId).primary_key())
                    .col(string(PermittedRole::GuildId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PermittedRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PermittedRole {
    Table,
    RoleId,
    GuildId,
}
