//! Election lifecycle phase clock.
//!
//! Pure functions mapping the current time and an election's timestamps to a
//! lifecycle phase. Phases partition time with no gaps or overlaps: both
//! boundaries are inclusive on the earlier phase.

use chrono::{DateTime, Duration, Utc};

/// Lifecycle stage of an election.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Users may register as candidates.
    Signup,
    /// Registered candidates may perform campaign actions.
    Campaign,
    /// The election is past its end and awaits resolution.
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Signup => write!(f, "signup"),
            Phase::Campaign => write!(f, "campaign"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// Returns the phase at `now` for an election with the given boundaries.
///
/// `now == signup_end` is still Signup; `now == election_end` is still
/// Campaign.
pub fn phase_at(
    now: DateTime<Utc>,
    signup_end: DateTime<Utc>,
    election_end: DateTime<Utc>,
) -> Phase {
    if now <= signup_end {
        Phase::Signup
    } else if now <= election_end {
        Phase::Campaign
    } else {
        Phase::Complete
    }
}

/// Returns the time remaining in the current phase, or `None` once complete.
pub fn remaining(
    now: DateTime<Utc>,
    signup_end: DateTime<Utc>,
    election_end: DateTime<Utc>,
) -> Option<Duration> {
    match phase_at(now, signup_end, election_end) {
        Phase::Signup => Some(signup_end - now),
        Phase::Campaign => Some(election_end - now),
        Phase::Complete => None,
    }
}
