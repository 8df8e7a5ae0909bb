//! Poll simulation.
//!
//! Polls are ephemeral: each invocation recomputes standings from the live
//! candidate list and applies fresh per-candidate noise. Nothing is persisted
//! and two polls taken back to back will disagree.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::election::ElectionRepository,
    error::{AppError, ElectionError},
    model::{election::Election, poll::PollResult},
};

/// Floor applied to a candidate's true share when any points exist.
const POLL_FLOOR: f64 = 5.0;
/// Half-width of the uniform polling noise, in percentage points.
const POLL_NOISE: f64 = 7.0;
/// Clamp bounds for the displayed percentage.
const POLL_MIN: f64 = 0.1;
const POLL_MAX: f64 = 99.9;

/// Produces simulated poll standings for an active election.
pub struct PollSimulator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollSimulator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Simulates a poll for the seat's active election.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `seat_id`: Seat to poll; `None` polls the guild's first active
    ///   election
    /// - `highlight_user`: Requesting user, whose own candidacy row is
    ///   flagged in the results
    ///
    /// # Returns
    /// - `Ok(Vec<PollResult>)`: Rows sorted by polled percentage, descending
    /// - `Err(AppError)`: No active election, or the roster is empty
    pub async fn run_poll(
        &self,
        guild_id: u64,
        seat_id: Option<&str>,
        highlight_user: Option<u64>,
    ) -> Result<Vec<PollResult>, AppError> {
        let elections = ElectionRepository::new(self.db);

        let election = match seat_id {
            Some(seat_id) => elections.find_active_for_seat(guild_id, seat_id).await?,
            None => elections.find_any_active(guild_id).await?,
        }
        .ok_or(ElectionError::NoActiveElection)?;

        if election.candidates.is_empty() {
            return Err(ElectionError::NoCandidates(election.seat_id).into());
        }

        let mut rng = rand::rng();
        Ok(simulate(&election, highlight_user, &mut rng))
    }
}

/// Computes one poll from an election's current standings.
///
/// Each candidate's true share is their fraction of all points, floored at
/// 5%; with no points on the board the share is an even split. The displayed
/// number adds independent uniform noise of ±7 points and is clamped to
/// [0.1, 99.9]. The rows are not renormalized, so they need not sum to 100.
pub fn simulate<R: Rng + ?Sized>(
    election: &Election,
    highlight_user: Option<u64>,
    rng: &mut R,
) -> Vec<PollResult> {
    let total: f64 = election.candidates.iter().map(|c| c.points).sum();

    let mut results: Vec<PollResult> = election
        .candidates
        .iter()
        .map(|candidate| {
            let actual = if total > 0.0 {
                (candidate.points / total * 100.0).max(POLL_FLOOR)
            } else {
                100.0 / election.candidates.len() as f64
            };
            let noise = rng.random_range(-POLL_NOISE..=POLL_NOISE);

            PollResult {
                candidate: candidate.name.clone(),
                actual_percentage: actual,
                poll_percentage: (actual + noise).clamp(POLL_MIN, POLL_MAX),
                is_highlighted: highlight_user == Some(candidate.user_id),
            }
        })
        .collect();

    results.sort_by(|a, b| b.poll_percentage.total_cmp(&a.poll_percentage));

    results
}
