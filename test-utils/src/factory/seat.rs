//! Seat factory for creating test seat entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seats with customizable fields.
///
/// Provides a builder pattern for creating seat entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::seat::SeatFactory;
///
/// let seat = SeatFactory::new(&db, "1000", "REP-05")
///     .office("House Representative")
///     .holder(Some(("Jane Doe", "42")))
///     .build()
///     .await?;
/// ```
pub struct SeatFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    seat_id: String,
    office: String,
    state: String,
    current_holder: Option<String>,
    current_holder_id: Option<String>,
    up_for_election: bool,
    special_election: bool,
}

impl<'a> SeatFactory<'a> {
    /// Creates a new SeatFactory with default values.
    ///
    /// Defaults:
    /// - office: `"House Representative"`
    /// - state: `"State {id}"` where id is auto-incremented
    /// - no current holder, not up for election
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the seat belongs to
    /// - `seat_id` - Seat identifier, e.g. "REP-05"
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        seat_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            seat_id: seat_id.into(),
            office: "House Representative".to_string(),
            state: format!("State {}", id),
            current_holder: None,
            current_holder_id: None,
            up_for_election: false,
            special_election: false,
        }
    }

    /// Sets the office name.
    pub fn office(mut self, office: impl Into<String>) -> Self {
        self.office = office.into();
        self
    }

    /// Sets the state name.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the current holder (display name, discord id).
    pub fn holder(mut self, holder: Option<(&str, &str)>) -> Self {
        self.current_holder = holder.map(|(name, _)| name.to_string());
        self.current_holder_id = holder.map(|(_, id)| id.to_string());
        self
    }

    /// Sets the up_for_election and special_election flags together.
    pub fn up_for_election(mut self, up: bool) -> Self {
        self.up_for_election = up;
        self.special_election = up;
        self
    }

    /// Builds and inserts the seat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::seat::Model)` - Created seat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::seat::Model, DbErr> {
        entity::seat::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            seat_id: ActiveValue::Set(self.seat_id),
            office: ActiveValue::Set(self.office),
            state: ActiveValue::Set(self.state),
            current_holder: ActiveValue::Set(self.current_holder),
            current_holder_id: ActiveValue::Set(self.current_holder_id),
            up_for_election: ActiveValue::Set(self.up_for_election),
            special_election: ActiveValue::Set(self.special_election),
            term_end: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a house seat with default values.
///
/// Shorthand for `SeatFactory::new(db, guild_id, seat_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the seat belongs to
/// - `seat_id` - Seat identifier
///
/// # Returns
/// - `Ok(entity::seat::Model)` - Created seat entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_seat(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    seat_id: impl Into<String>,
) -> Result<entity::seat::Model, DbErr> {
    SeatFactory::new(db, guild_id, seat_id).build().await
}
