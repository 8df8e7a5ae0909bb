//! Campaign action cooldown rows: one per (guild, user, action), upserted.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "special_election_cooldowns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild ID (u64, stored as string).
    pub guild_id: String,
    /// Discord ID of the user on cooldown (u64, stored as string).
    pub user_id: String,
    /// Action kind name: "speech", "poster", or "ad".
    pub action: String,
    /// Seat the action was performed against, for auditing.
    pub seat_id: String,
    pub last_used_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
