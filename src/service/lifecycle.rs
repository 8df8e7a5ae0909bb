//! Admin lifecycle operations: calling, ending, and cancelling elections.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    data::{election::ElectionRepository, seat::SeatRepository},
    error::{AppError, ElectionError},
    model::election::{CallElectionParams, CompletedElection, Election},
};

/// Length of the signup phase after an election is called.
const SIGNUP_DAYS: i64 = 1;
/// Length of the campaign phase after signups close.
const CAMPAIGN_DAYS: i64 = 3;
/// Fixed term length assigned to a seat winner.
const TERM_DAYS: i64 = 2 * 365;

/// Orchestrates state transitions between active and completed elections and
/// the corresponding seat-holder updates.
///
/// Permission enforcement is the dispatcher's job; these methods assume the
/// invoking user has already passed the admin gate.
pub struct ElectionLifecycle<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ElectionLifecycle<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Calls a special election for a vacant house seat.
    ///
    /// Signups run for one day from now; the campaign runs for three more
    /// days. The seat is marked vacant immediately.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `params`: Seat, reason, and the calling administrator
    ///
    /// # Returns
    /// - `Ok(Election)`: The newly active election
    /// - `Err(AppError)`: Seat unknown or ineligible, or an election is
    ///   already active for the seat
    pub async fn call_election(
        &self,
        guild_id: u64,
        params: CallElectionParams,
    ) -> Result<Election, AppError> {
        let seats = SeatRepository::new(self.db);
        let elections = ElectionRepository::new(self.db);

        let seat = seats
            .get(guild_id, &params.seat_id)
            .await?
            .ok_or_else(|| ElectionError::SeatNotFound(params.seat_id.clone()))?;

        if !seat.is_house_seat() {
            return Err(ElectionError::SeatNotEligible(params.seat_id).into());
        }

        if elections
            .find_active_for_seat(guild_id, &params.seat_id)
            .await?
            .is_some()
        {
            return Err(ElectionError::ElectionAlreadyActive(params.seat_id).into());
        }

        let now = Utc::now();
        let signup_end = now + Duration::days(SIGNUP_DAYS);
        let election = Election {
            seat_id: params.seat_id.clone(),
            reason: params.reason,
            election_start: now,
            signup_end,
            election_end: signup_end + Duration::days(CAMPAIGN_DAYS),
            candidates: Vec::new(),
            called_by: params.called_by,
        };

        let mut doc = elections.get_or_create(guild_id).await?;
        doc.active.push(election.clone());
        elections.save_active(guild_id, &doc.active).await?;

        seats.mark_vacant(guild_id, &params.seat_id).await?;

        info!(
            guild_id,
            seat_id = %election.seat_id,
            called_by = params.called_by,
            "special election called"
        );

        Ok(election)
    }

    /// Ends an election, declares the winner, and seats them.
    ///
    /// The winner is the stable maximum by points: the first candidate in
    /// signup order with the highest total. The seat is assigned with a
    /// two-year term from now and the election moves to the completed list.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `seat_id`: Seat whose election ends; `None` ends the guild's first
    ///   active election (explicit any-active fallback)
    ///
    /// # Returns
    /// - `Ok(CompletedElection)`: The completed record with its winner
    /// - `Err(AppError)`: No active election, or the roster is empty
    pub async fn end_election(
        &self,
        guild_id: u64,
        seat_id: Option<&str>,
    ) -> Result<CompletedElection, AppError> {
        let seats = SeatRepository::new(self.db);
        let elections = ElectionRepository::new(self.db);

        let election = self
            .resolve_active(&elections, guild_id, seat_id)
            .await?
            .ok_or(ElectionError::NoActiveElection)?;

        if election.candidates.is_empty() {
            return Err(ElectionError::NoCandidates(election.seat_id).into());
        }

        let winner = election
            .winner()
            .cloned()
            .ok_or_else(|| AppError::InternalError("non-empty roster without winner".to_string()))?;

        let now = Utc::now();
        let seated = seats
            .assign_holder(
                guild_id,
                &election.seat_id,
                &winner.name,
                winner.user_id,
                now + Duration::days(TERM_DAYS),
            )
            .await?;
        if !seated {
            warn!(guild_id, seat_id = %election.seat_id, "seat missing during end_election");
        }

        let completed = CompletedElection {
            election,
            winner: Some(winner),
            completed_date: now,
            cancelled: false,
            cancellation_reason: None,
        };

        let moved = elections
            .complete(guild_id, &completed.election.seat_id, completed.clone())
            .await?;
        if !moved {
            return Err(ElectionError::NoActiveElection.into());
        }

        info!(
            guild_id,
            seat_id = %completed.election.seat_id,
            winner = %completed.winner.as_ref().map(|w| w.name.as_str()).unwrap_or(""),
            "special election ended"
        );

        Ok(completed)
    }

    /// Cancels an election without declaring a winner.
    ///
    /// The election moves to the completed list with `cancelled = true` and
    /// the given reason. The seat's election flags are cleared; it stays
    /// vacant until the next completed election.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `seat_id`: Seat whose election is cancelled; `None` cancels the
    ///   guild's first active election (explicit any-active fallback)
    /// - `reason`: Cancellation reason recorded on the completed entry
    ///
    /// # Returns
    /// - `Ok(CompletedElection)`: The cancelled record
    /// - `Err(AppError)`: No active election
    pub async fn cancel_election(
        &self,
        guild_id: u64,
        seat_id: Option<&str>,
        reason: String,
    ) -> Result<CompletedElection, AppError> {
        let seats = SeatRepository::new(self.db);
        let elections = ElectionRepository::new(self.db);

        let election = self
            .resolve_active(&elections, guild_id, seat_id)
            .await?
            .ok_or(ElectionError::NoActiveElection)?;

        let cleared = seats.clear_election_flags(guild_id, &election.seat_id).await?;
        if !cleared {
            warn!(guild_id, seat_id = %election.seat_id, "seat missing during cancel_election");
        }

        let completed = CompletedElection {
            election,
            winner: None,
            completed_date: Utc::now(),
            cancelled: true,
            cancellation_reason: Some(reason),
        };

        let moved = elections
            .complete(guild_id, &completed.election.seat_id, completed.clone())
            .await?;
        if !moved {
            return Err(ElectionError::NoActiveElection.into());
        }

        info!(guild_id, seat_id = %completed.election.seat_id, "special election cancelled");

        Ok(completed)
    }

    async fn resolve_active(
        &self,
        elections: &ElectionRepository<'_>,
        guild_id: u64,
        seat_id: Option<&str>,
    ) -> Result<Option<Election>, AppError> {
        let election = match seat_id {
            Some(seat_id) => elections.find_active_for_seat(guild_id, seat_id).await?,
            None => elections.find_any_active(guild_id).await?,
        };

        Ok(election)
    }
}
