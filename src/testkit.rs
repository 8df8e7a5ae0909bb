//! Shared fixtures for in-crate tests.

use chrono::{Duration, Utc};

use crate::model::action::STARTING_STAMINA;
use crate::model::election::{Candidate, Election};

pub fn candidate(user_id: u64, name: &str, points: f64) -> Candidate {
    candidate_with_stamina(user_id, name, points, STARTING_STAMINA)
}

pub fn candidate_with_stamina(user_id: u64, name: &str, points: f64, stamina: i32) -> Candidate {
    Candidate {
        user_id,
        name: name.to_string(),
        party: "Independent".to_string(),
        points,
        office: "House Representative".to_string(),
        state: "Ohio".to_string(),
        signup_date: Utc::now(),
        stamina,
    }
}

/// An election currently in its signup phase.
pub fn signup_election(seat_id: &str, candidates: Vec<Candidate>) -> Election {
    let now = Utc::now();
    Election {
        seat_id: seat_id.to_string(),
        reason: "resignation".to_string(),
        election_start: now,
        signup_end: now + Duration::days(1),
        election_end: now + Duration::days(4),
        candidates,
        called_by: 999,
    }
}

/// An election whose signups have closed; the campaign is underway.
pub fn campaign_election(seat_id: &str, candidates: Vec<Candidate>) -> Election {
    let now = Utc::now();
    Election {
        seat_id: seat_id.to_string(),
        reason: "resignation".to_string(),
        election_start: now - Duration::days(2),
        signup_end: now - Duration::hours(1),
        election_end: now + Duration::days(3),
        candidates,
        called_by: 999,
    }
}

/// An election past its end date, awaiting the admin's end command.
pub fn overdue_election(seat_id: &str, candidates: Vec<Candidate>) -> Election {
    let now = Utc::now();
    Election {
        seat_id: seat_id.to_string(),
        reason: "resignation".to_string(),
        election_start: now - Duration::days(5),
        signup_end: now - Duration::days(4),
        election_end: now - Duration::hours(1),
        candidates,
        called_by: 999,
    }
}
