//! Campaign action kinds and their balance constants.

use chrono::Duration;

/// Minimum character count for a collected speech.
pub const SPEECH_MIN_CHARS: usize = 700;
/// Maximum character count for a collected speech.
pub const SPEECH_MAX_CHARS: usize = 3000;
/// Maximum attachment size accepted for posters and ads.
pub const MAX_ATTACHMENT_BYTES: u64 = 25 * 1024 * 1024;
/// Stamina assigned to a freshly registered candidate.
pub const STARTING_STAMINA: i32 = 100;

/// A point-awarding campaign action.
///
/// Signup is not an `ActionKind`: it has no cooldown, no stamina cost, and
/// awards no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Speech,
    Poster,
    Ad,
}

impl ActionKind {
    /// Stable name used for cooldown rows and user-facing messages.
    pub fn name(self) -> &'static str {
        match self {
            ActionKind::Speech => "speech",
            ActionKind::Poster => "poster",
            ActionKind::Ad => "ad",
        }
    }

    /// Stamina threshold checked before the action runs.
    ///
    /// This is only a pre-check; the amount actually deducted on commit is
    /// [`deducted_amount`](Self::deducted_amount). The two values differ and
    /// are kept separate pending a product decision on which is intended.
    pub fn gate_cost(self) -> i32 {
        match self {
            ActionKind::Speech => 6,
            ActionKind::Poster => 4,
            ActionKind::Ad => 5,
        }
    }

    /// Stamina actually deducted from the payer when the action commits.
    pub fn deducted_amount(self) -> i32 {
        match self {
            ActionKind::Speech => 20,
            ActionKind::Poster => 15,
            ActionKind::Ad => 25,
        }
    }

    /// Inclusive range of points awarded to the target on success.
    pub fn point_range(self) -> (f64, f64) {
        match self {
            ActionKind::Speech => (2.0, 4.0),
            ActionKind::Poster => (1.0, 3.0),
            ActionKind::Ad => (3.0, 6.0),
        }
    }

    /// Minimum interval between repeats of this action by the same payer.
    pub fn cooldown(self) -> Duration {
        Duration::hours(1)
    }
}

/// Outcome of a committed campaign action, for dispatcher-side reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReport {
    pub action: ActionKind,
    /// Candidate the points were awarded to.
    pub target_name: String,
    pub points_gained: f64,
    /// User whose stamina paid for the action.
    pub payer_id: u64,
    pub stamina_deducted: i32,
    /// Payer's stamina after the deduction.
    pub payer_stamina_after: i32,
}
