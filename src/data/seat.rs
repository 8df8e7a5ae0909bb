use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::seat::{CreateSeatParams, Seat};

pub struct SeatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new seat in a guild's registry.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `params`: Seat creation data
    ///
    /// # Returns
    /// - `Ok(Seat)`: The created seat
    /// - `Err(DbErr)`: Database error (including unique violation on a
    ///   duplicate seat_id within the guild)
    pub async fn create(&self, guild_id: u64, params: CreateSeatParams) -> Result<Seat, DbErr> {
        let (holder, holder_id) = match params.holder {
            Some((name, id)) => (Some(name), Some(id.to_string())),
            None => (None, None),
        };

        let model = entity::seat::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(guild_id.to_string()),
            seat_id: ActiveValue::Set(params.seat_id),
            office: ActiveValue::Set(params.office),
            state: ActiveValue::Set(params.state),
            current_holder: ActiveValue::Set(holder),
            current_holder_id: ActiveValue::Set(holder_id),
            up_for_election: ActiveValue::Set(false),
            special_election: ActiveValue::Set(false),
            term_end: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(Seat::from_entity(model))
    }

    /// Looks up a seat by its identifier within a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Seat))`: The seat
    /// - `Ok(None)`: No such seat in this guild
    /// - `Err(DbErr)`: Database error
    pub async fn get(&self, guild_id: u64, seat_id: &str) -> Result<Option<Seat>, DbErr> {
        let model = self.find_row(guild_id, seat_id).await?;

        Ok(model.map(Seat::from_entity))
    }

    /// Lists all seats registered for a guild, ordered by seat_id.
    pub async fn list_by_guild(&self, guild_id: u64) -> Result<Vec<Seat>, DbErr> {
        let models = entity::prelude::Seat::find()
            .filter(entity::seat::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::seat::Column::SeatId)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Seat::from_entity).collect())
    }

    /// Searches a guild's seats by partial seat_id or office match.
    ///
    /// Backs the dispatcher's autocomplete callback.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `partial`: Substring to match against seat_id and office
    /// - `limit`: Maximum number of results
    pub async fn search(
        &self,
        guild_id: u64,
        partial: &str,
        limit: u64,
    ) -> Result<Vec<Seat>, DbErr> {
        let models = entity::prelude::Seat::find()
            .filter(entity::seat::Column::GuildId.eq(guild_id.to_string()))
            .filter(
                Condition::any()
                    .add(entity::seat::Column::SeatId.contains(partial))
                    .add(entity::seat::Column::Office.contains(partial)),
            )
            .order_by_asc(entity::seat::Column::SeatId)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Seat::from_entity).collect())
    }

    /// Marks a seat vacant and flags it as holding a special election.
    ///
    /// Clears the current holder and term. Called when an election is called
    /// for the seat.
    ///
    /// # Returns
    /// - `Ok(true)`: Seat updated
    /// - `Ok(false)`: No such seat in this guild
    /// - `Err(DbErr)`: Database error
    pub async fn mark_vacant(&self, guild_id: u64, seat_id: &str) -> Result<bool, DbErr> {
        let Some(model) = self.find_row(guild_id, seat_id).await? else {
            return Ok(false);
        };

        let mut active: entity::seat::ActiveModel = model.into();
        active.current_holder = ActiveValue::Set(None);
        active.current_holder_id = ActiveValue::Set(None);
        active.up_for_election = ActiveValue::Set(true);
        active.special_election = ActiveValue::Set(true);
        active.term_end = ActiveValue::Set(None);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Assigns an election winner as the seat's holder.
    ///
    /// Clears the election flags and records the holder's term end.
    ///
    /// # Returns
    /// - `Ok(true)`: Seat updated
    /// - `Ok(false)`: No such seat in this guild
    /// - `Err(DbErr)`: Database error
    pub async fn assign_holder(
        &self,
        guild_id: u64,
        seat_id: &str,
        holder_name: &str,
        holder_id: u64,
        term_end: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let Some(model) = self.find_row(guild_id, seat_id).await? else {
            return Ok(false);
        };

        let mut active: entity::seat::ActiveModel = model.into();
        active.current_holder = ActiveValue::Set(Some(holder_name.to_string()));
        active.current_holder_id = ActiveValue::Set(Some(holder_id.to_string()));
        active.up_for_election = ActiveValue::Set(false);
        active.special_election = ActiveValue::Set(false);
        active.term_end = ActiveValue::Set(Some(term_end));
        active.update(self.db).await?;

        Ok(true)
    }

    /// Clears the election flags without assigning a holder.
    ///
    /// Called when an election is cancelled; the seat stays vacant.
    ///
    /// # Returns
    /// - `Ok(true)`: Seat updated
    /// - `Ok(false)`: No such seat in this guild
    /// - `Err(DbErr)`: Database error
    pub async fn clear_election_flags(&self, guild_id: u64, seat_id: &str) -> Result<bool, DbErr> {
        let Some(model) = self.find_row(guild_id, seat_id).await? else {
            return Ok(false);
        };

        let mut active: entity::seat::ActiveModel = model.into();
        active.up_for_election = ActiveValue::Set(false);
        active.special_election = ActiveValue::Set(false);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find_row(
        &self,
        guild_id: u64,
        seat_id: &str,
    ) -> Result<Option<entity::seat::Model>, DbErr> {
        entity::prelude::Seat::find()
            .filter(entity::seat::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::seat::Column::SeatId.eq(seat_id))
            .one(self.db)
            .await
    }
}
