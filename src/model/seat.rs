//! Seat registry domain models.

use chrono::{DateTime, Utc};

/// An electable office slot owned by a guild's seat registry.
///
/// Mutated by the election lifecycle: calling an election marks the seat
/// vacant, ending one assigns the winner with a fixed two-year term.
#[derive(Debug, Clone, PartialEq)]
pub struct Seat {
    /// Seat identifier, unique within the guild, e.g. "REP-05".
    pub seat_id: String,
    pub office: String,
    pub state: String,
    /// Display name of the current holder, if the seat is filled.
    pub current_holder: Option<String>,
    /// Discord ID of the current holder, if the seat is filled.
    pub current_holder_id: Option<u64>,
    pub up_for_election: bool,
    pub special_election: bool,
    /// End of the current holder's term, if the seat is filled.
    pub term_end: Option<DateTime<Utc>>,
}

impl Seat {
    /// Whether this seat is a house seat eligible for a special election.
    ///
    /// House seats carry a `REP-` prefix or a district designation in the ID.
    pub fn is_house_seat(&self) -> bool {
        self.seat_id.starts_with("REP-") || self.seat_id.contains("District")
    }

    /// Converts an entity model to a seat domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Seat` - The converted seat domain model
    pub fn from_entity(entity: entity::seat::Model) -> Self {
        Self {
            seat_id: entity.seat_id,
            office: entity.office,
            state: entity.state,
            current_holder: entity.current_holder,
            current_holder_id: entity
                .current_holder_id
                .and_then(|id| id.parse::<u64>().ok()),
            up_for_election: entity.up_for_election,
            special_election: entity.special_election,
            term_end: entity.term_end,
        }
    }
}

/// Parameters for registering a new seat in a guild's registry.
#[derive(Debug, Clone)]
pub struct CreateSeatParams {
    pub seat_id: String,
    pub office: String,
    pub state: String,
    /// Initial holder (display name, discord id), if the seat starts filled.
    pub holder: Option<(String, u64)>,
}
