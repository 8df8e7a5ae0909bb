//! Derived poll results. Ephemeral: recomputed on every invocation, never
//! persisted.

/// A single candidate's row in a simulated poll.
///
/// `poll_percentage` carries independent per-candidate noise and the set of
/// rows need not sum to 100 — the simulation mimics real polling error, not a
/// sum-constrained allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    /// Candidate display name.
    pub candidate: String,
    /// True point share, floored at 5.0 (even split when no points exist).
    pub actual_percentage: f64,
    /// Noised share shown to users, clamped to [0.1, 99.9].
    pub poll_percentage: f64,
    /// Whether this row belongs to the requesting user's own candidacy.
    pub is_highlighted: bool,
}
