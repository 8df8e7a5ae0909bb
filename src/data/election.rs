use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use serde_json::json;

use crate::model::election::{CompletedElection, Election};

/// A guild's full election document: the active and completed lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElectionDocument {
    pub active: Vec<Election>,
    pub completed: Vec<CompletedElection>,
}

/// Repository over the per-guild special election document.
///
/// All mutations are whole-document read-modify-write: the guild row's JSON
/// lists are loaded, modified in memory, and written back. Concurrent command
/// invocations for the same guild can race and lose updates; callers accept
/// this (a production upgrade would move to per-field atomic increments or
/// version-checked writes keyed by guild, seat, and candidate).
pub struct ElectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ElectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a guild's election document, creating an empty one if absent.
    ///
    /// # Returns
    /// - `Ok(ElectionDocument)`: The guild's document (possibly freshly created)
    /// - `Err(DbErr)`: Database error or corrupt stored JSON
    pub async fn get_or_create(&self, guild_id: u64) -> Result<ElectionDocument, DbErr> {
        match self.find_row(guild_id).await? {
            Some(model) => parse_document(&model),
            None => {
                entity::special_election::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    active_elections: ActiveValue::Set(json!([])),
                    completed_elections: ActiveValue::Set(json!([])),
                    updated_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?;

                Ok(ElectionDocument::default())
            }
        }
    }

    /// Finds the active election for a specific seat.
    ///
    /// # Returns
    /// - `Ok(Some(Election))`: The seat's active election
    /// - `Ok(None)`: No active election for this seat
    /// - `Err(DbErr)`: Database error
    pub async fn find_active_for_seat(
        &self,
        guild_id: u64,
        seat_id: &str,
    ) -> Result<Option<Election>, DbErr> {
        let doc = self.get_or_create(guild_id).await?;

        Ok(doc.active.into_iter().find(|e| e.seat_id == seat_id))
    }

    /// Finds the first active election in the guild, regardless of seat.
    ///
    /// This is the documented fallback for commands that omit a seat: with
    /// multiple concurrent elections it operates on whichever is listed
    /// first. Callers must opt into this behavior explicitly rather than
    /// defaulting to it.
    pub async fn find_any_active(&self, guild_id: u64) -> Result<Option<Election>, DbErr> {
        let doc = self.get_or_create(guild_id).await?;

        Ok(doc.active.into_iter().next())
    }

    /// Overwrites a guild's active election list.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `active`: The complete replacement list
    pub async fn save_active(&self, guild_id: u64, active: &[Election]) -> Result<(), DbErr> {
        let mut doc = self.get_or_create(guild_id).await?;
        doc.active = active.to_vec();

        self.write(guild_id, &doc).await
    }

    /// Moves a seat's active election into the completed list.
    ///
    /// The active entry for `seat_id` is removed and `outcome` is appended to
    /// the completed list in a single document write.
    ///
    /// # Returns
    /// - `Ok(true)`: The election was moved
    /// - `Ok(false)`: No active election for this seat; nothing written
    /// - `Err(DbErr)`: Database error
    pub async fn complete(
        &self,
        guild_id: u64,
        seat_id: &str,
        outcome: CompletedElection,
    ) -> Result<bool, DbErr> {
        let mut doc = self.get_or_create(guild_id).await?;

        let before = doc.active.len();
        doc.active.retain(|e| e.seat_id != seat_id);
        if doc.active.len() == before {
            return Ok(false);
        }

        doc.completed.push(outcome);
        self.write(guild_id, &doc).await?;

        Ok(true)
    }

    /// Lists a guild's completed elections, oldest first.
    pub async fn list_completed(&self, guild_id: u64) -> Result<Vec<CompletedElection>, DbErr> {
        let doc = self.get_or_create(guild_id).await?;

        Ok(doc.completed)
    }

    async fn find_row(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::special_election::Model>, DbErr> {
        entity::prelude::SpecialElection::find()
            .filter(entity::special_election::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    async fn write(&self, guild_id: u64, doc: &ElectionDocument) -> Result<(), DbErr> {
        let active = serde_json::to_value(&doc.active)
            .map_err(|e| DbErr::Custom(format!("failed to serialize active elections: {}", e)))?;
        let completed = serde_json::to_value(&doc.completed).map_err(|e| {
            DbErr::Custom(format!("failed to serialize completed elections: {}", e))
        })?;

        match self.find_row(guild_id).await? {
            Some(model) => {
                let mut row: entity::special_election::ActiveModel = model.into();
                row.active_elections = ActiveValue::Set(active);
                row.completed_elections = ActiveValue::Set(completed);
                row.updated_at = ActiveValue::Set(Utc::now());
                row.update(self.db).await?;
            }
            None => {
                entity::special_election::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    active_elections: ActiveValue::Set(active),
                    completed_elections: ActiveValue::Set(completed),
                    updated_at: ActiveValue::Set(Utc::now()),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}

fn parse_document(model: &entity::special_election::Model) -> Result<ElectionDocument, DbErr> {
    let active = serde_json::from_value(model.active_elections.clone())
        .map_err(|e| DbErr::Custom(format!("corrupt active election document: {}", e)))?;
    let completed = serde_json::from_value(model.completed_elections.clone())
        .map_err(|e| DbErr::Custom(format!("corrupt completed election document: {}", e)))?;

    Ok(ElectionDocument { active, completed })
}
