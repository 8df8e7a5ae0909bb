use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecialElection::Table)
                    .if_not_exists()
                    .col(string(SpecialElection::GuildId).primary_key())
                    .col(json(SpecialElection::ActiveElections))
                    .col(json(SpecialElection::CompletedElections))
                    .col(
                        timestamp(SpecialElection::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecialElection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SpecialElection {
    Table,
    GuildId,
    ActiveElections,
    CompletedElections,
    UpdatedAt,
}
