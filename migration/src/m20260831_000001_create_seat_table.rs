use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(string(Seat::GuildId))
                    .col(string(Seat::SeatId))
                    .col(string(Seat::Office))
                    .col(string(Seat::State))
                    .col(string_null(Seat::CurrentHolder))
                    .col(string_null(Seat::CurrentHolderId))
                    .col(boolean(Seat::UpForElection).default(false))
                    .col(boolean(Seat::SpecialElection).default(false))
                    .col(timestamp_null(Seat::TermEnd))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_guild_seat")
                    .table(Seat::Table)
                    .col(Seat::GuildId)
                    .col(Seat::SeatId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    GuildId,
    SeatId,
    Office,
    State,
    CurrentHolder,
    CurrentHolderId,
    UpForElection,
    SpecialElection,
    TermEnd,
}
