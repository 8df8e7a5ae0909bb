//! Factory for campaign action cooldown rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cooldown row for a (guild, user, action) triple.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the cooldown belongs to
/// - `user_id` - User on cooldown
/// - `action` - Action kind name ("speech", "poster", "ad")
/// - `last_used_at` - Timestamp of the last use
///
/// # Returns
/// - `Ok(entity::special_election_cooldown::Model)` - Created cooldown row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cooldown(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    user_id: impl Into<String>,
    action: impl Into<String>,
    last_used_at: DateTime<Utc>,
) -> Result<entity::special_election_cooldown::Model, DbErr> {
    entity::special_election_cooldown::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        user_id: ActiveValue::Set(user_id.into()),
        action: ActiveValue::Set(action.into()),
        seat_id: ActiveValue::Set("REP-01".to_string()),
        last_used_at: ActiveValue::Set(last_used_at),
    }
    .insert(db)
    .await
}
