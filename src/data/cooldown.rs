use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::action::ActionKind;

/// Repository over per-user campaign action cooldowns.
///
/// One row exists per (guild, user, action) with upsert semantics: a repeat
/// use overwrites the previous timestamp instead of inserting a second row.
pub struct CooldownRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CooldownRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns when the user last used the action, if ever.
    ///
    /// # Returns
    /// - `Ok(Some(timestamp))`: Last use of this action by this user
    /// - `Ok(None)`: No cooldown row exists
    /// - `Err(DbErr)`: Database error
    pub async fn last_used(
        &self,
        guild_id: u64,
        user_id: u64,
        action: ActionKind,
    ) -> Result<Option<DateTime<Utc>>, DbErr> {
        let row = self.find_row(guild_id, user_id, action).await?;

        Ok(row.map(|r| r.last_used_at))
    }

    /// Records a use of the action, upserting the (guild, user, action) row.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `user_id`: Discord ID of the payer going on cooldown
    /// - `action`: Action kind used
    /// - `seat_id`: Seat the action targeted, for auditing
    /// - `used_at`: Timestamp of the use
    pub async fn touch(
        &self,
        guild_id: u64,
        user_id: u64,
        action: ActionKind,
        seat_id: &str,
        used_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        match self.find_row(guild_id, user_id, action).await? {
            Some(model) => {
                let mut row: entity::special_election_cooldown::ActiveModel = model.into();
                row.seat_id = ActiveValue::Set(seat_id.to_string());
                row.last_used_at = ActiveValue::Set(used_at);
                row.update(self.db).await?;
            }
            None => {
                entity::special_election_cooldown::ActiveModel {
                    id: ActiveValue::NotSet,
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    user_id: ActiveValue::Set(user_id.to_string()),
                    action: ActiveValue::Set(action.name().to_string()),
                    seat_id: ActiveValue::Set(seat_id.to_string()),
                    last_used_at: ActiveValue::Set(used_at),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    async fn find_row(
        &self,
        guild_id: u64,
        user_id: u64,
        action: ActionKind,
    ) -> Result<Option<entity::special_election_cooldown::Model>, DbErr> {
        entity::prelude::SpecialElectionCooldown::find()
            .filter(entity::special_election_cooldown::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::special_election_cooldown::Column::UserId.eq(user_id.to_string()))
            .filter(entity::special_election_cooldown::Column::Action.eq(action.name()))
            .one(self.db)
            .await
    }
}
