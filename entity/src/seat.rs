//! Seat registry rows: one electable office slot per (guild, seat).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "seat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild ID (u64, stored as string).
    pub guild_id: String,
    /// Office slot identifier, e.g. "REP-05". Unique within a guild.
    pub seat_id: String,
    pub office: String,
    pub state: String,
    /// Display name of the current holder, if the seat is filled.
    pub current_holder: Option<String>,
    /// Discord ID of the current holder (u64, stored as string).
    pub current_holder_id: Option<String>,
    pub up_for_election: bool,
    pub special_election: bool,
    /// End of the current holder's term, if the seat is filled.
    pub term_end: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
