//! Per-guild special election document.
//!
//! One row per guild holding the full active and completed election lists as
//! JSON. All mutations are whole-document read-modify-write in the data layer.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "special_elections")]
pub struct Model {
    /// Discord guild ID (u64, stored as string).
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    /// JSON array of active elections (at most one per seat_id).
    pub active_elections: Json,
    /// JSON array of completed/cancelled elections.
    pub completed_elections: Json,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
