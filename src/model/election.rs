//! Election and candidate domain models.
//!
//! These structs live inside the per-guild election document and are
//! (de)serialized as JSON by the election repository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::phase::{self, Phase};

/// A special election for a single seat.
///
/// Lives in the guild's active election list from `call_election` until it is
/// ended or cancelled, at which point it moves to the completed list. At most
/// one active election exists per seat_id at a time. An election owns its
/// candidate list; no candidate exists outside an election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub seat_id: String,
    /// Reason given by the administrator who called the election.
    pub reason: String,
    pub election_start: DateTime<Utc>,
    /// End of the signup phase (inclusive).
    pub signup_end: DateTime<Utc>,
    /// End of the campaign phase (inclusive).
    pub election_end: DateTime<Utc>,
    pub candidates: Vec<Candidate>,
    /// Discord ID of the administrator who called the election.
    pub called_by: u64,
}

impl Election {
    /// Returns the election's lifecycle phase at the given instant.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        phase::phase_at(now, self.signup_end, self.election_end)
    }

    /// Finds a candidate by user ID.
    pub fn candidate_by_user(&self, user_id: u64) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.user_id == user_id)
    }

    /// Finds a candidate index by display name, case-insensitively.
    pub fn candidate_index_by_name(&self, name: &str) -> Option<usize> {
        self.candidates
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Returns the winning candidate: stable max by points.
    ///
    /// Ties are broken by signup order — the first candidate to reach the
    /// highest point total wins.
    pub fn winner(&self) -> Option<&Candidate> {
        let mut best: Option<&Candidate> = None;
        for candidate in &self.candidates {
            match best {
                Some(current) if candidate.points <= current.points => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

/// A participant registered for one election.
///
/// Points only increase through campaign actions; stamina only decreases
/// through action costs, floored at 0, with no regeneration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: u64,
    pub name: String,
    pub party: String,
    pub points: f64,
    pub office: String,
    pub state: String,
    pub signup_date: DateTime<Utc>,
    /// Remaining campaign stamina, in [0, 100].
    pub stamina: i32,
}

/// A finished election in the guild's completed list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedElection {
    #[serde(flatten)]
    pub election: Election,
    /// The declared winner; `None` for cancelled elections.
    pub winner: Option<Candidate>,
    pub completed_date: DateTime<Utc>,
    #[serde(default)]
    pub cancelled: bool,
    pub cancellation_reason: Option<String>,
}

/// Parameters for calling a new special election.
#[derive(Debug, Clone)]
pub struct CallElectionParams {
    pub seat_id: String,
    pub reason: String,
    /// Discord ID of the administrator calling the election.
    pub called_by: u64,
}
