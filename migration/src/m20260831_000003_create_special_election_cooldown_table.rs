use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecialElectionCooldown::Table)
                    .if_not_exists()
                    .col(pk_auto(SpecialElectionCooldown::Id))
                    .col(string(SpecialElectionCooldown::GuildId))
                    .col(string(SpecialElectionCooldown::UserId))
                    .col(string(SpecialElectionCooldown::Action))
                    .col(string(SpecialElectionCooldown::SeatId))
                    .col(timestamp(SpecialElectionCooldown::LastUsedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cooldown_guild_user_action")
                    .table(SpecialElectionCooldown::Table)
                    .col(SpecialElectionCooldown::GuildId)
                    .col(SpecialElectionCooldown::UserId)
                    .col(SpecialElectionCooldown::Action)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SpecialElectionCooldown::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpecialElectionCooldown {
    Table,
    Id,
    GuildId,
    UserId,
    Action,
    SeatId,
    LastUsedAt,
}
