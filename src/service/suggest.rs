//! Autocomplete suggestions for seats and candidates.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::{election::ElectionRepository, seat::SeatRepository},
    dispatch::{Suggester, MAX_SUGGESTIONS},
    error::AppError,
};

/// Backs the dispatcher's autocomplete callbacks with registry and roster
/// lookups. Results are capped at [`MAX_SUGGESTIONS`], the most the platform
/// will display.
pub struct SuggestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SuggestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Suggests seat identifiers matching the partial input.
    ///
    /// Matches against both seat_id and office, so "District" finds
    /// district-numbered house seats.
    pub async fn seats(&self, guild_id: u64, partial: &str) -> Result<Vec<String>, AppError> {
        let seats = SeatRepository::new(self.db)
            .search(guild_id, partial, MAX_SUGGESTIONS as u64)
            .await?;

        Ok(seats.into_iter().map(|s| s.seat_id).collect())
    }

    /// Suggests candidate names from the active election's roster.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `seat_id`: Seat whose roster to search; `None` uses the guild's
    ///   first active election
    /// - `partial`: Case-insensitive substring of the candidate name
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Matching names in signup order; empty when no
    ///   election is active
    pub async fn candidates(
        &self,
        guild_id: u64,
        seat_id: Option<&str>,
        partial: &str,
    ) -> Result<Vec<String>, AppError> {
        let elections = ElectionRepository::new(self.db);

        let election = match seat_id {
            Some(seat_id) => elections.find_active_for_seat(guild_id, seat_id).await?,
            None => elections.find_any_active(guild_id).await?,
        };
        let Some(election) = election else {
            return Ok(Vec::new());
        };

        let needle = partial.to_ascii_lowercase();
        let names = election
            .candidates
            .into_iter()
            .map(|c| c.name)
            .filter(|name| name.to_ascii_lowercase().contains(&needle))
            .take(MAX_SUGGESTIONS)
            .collect();

        Ok(names)
    }
}

#[async_trait]
impl Suggester for SuggestService<'_> {
    async fn suggest(&self, guild_id: u64, partial: &str) -> Result<Vec<String>, AppError> {
        self.seats(guild_id, partial).await
    }
}
