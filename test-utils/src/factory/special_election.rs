//! Factory for per-guild special election document rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Creates an empty election document row for a guild.
///
/// Both the active and completed election lists start as empty JSON arrays.
/// Tests that need populated documents should write them through the
/// repository under test rather than constructing raw JSON here.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the document belongs to
///
/// # Returns
/// - `Ok(entity::special_election::Model)` - Created document row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_empty_doc(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::special_election::Model, DbErr> {
    entity::special_election::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.into()),
        active_elections: ActiveValue::Set(json!([])),
        completed_elections: ActiveValue::Set(json!([])),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
