use thiserror::Error;

use crate::model::phase::Phase;

/// User-visible errors produced by the election game logic.
///
/// Variants fall into the following groups:
///
/// - configuration: [`SeatNotFound`](Self::SeatNotFound) — the seat registry
///   has no such seat; surfaced verbatim
/// - state: [`NoActiveElection`](Self::NoActiveElection),
///   [`ElectionAlreadyActive`](Self::ElectionAlreadyActive),
///   [`AlreadyRegistered`](Self::AlreadyRegistered),
///   [`NoCandidates`](Self::NoCandidates),
///   [`SeatNotEligible`](Self::SeatNotEligible) — non-retryable
/// - phase: [`WrongPhase`](Self::WrongPhase)
/// - validation: [`ContentInvalid`](Self::ContentInvalid),
///   [`TargetNotFound`](Self::TargetNotFound)
/// - resource: [`InsufficientStamina`](Self::InsufficientStamina) — names the
///   payer whose stamina fell short
/// - cooldown: [`CooldownActive`](Self::CooldownActive) — remaining time to
///   two-decimal precision
/// - timeout: [`ContentTimeout`](Self::ContentTimeout) — the collection
///   window elapsed; guaranteed no partial mutation, the user may retry
///
/// All of these are terminal for the single command invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElectionError {
    /// The seat registry has no seat with the given ID for this guild.
    #[error("seat '{0}' was not found in this server's seat registry")]
    SeatNotFound(String),

    /// Special elections can only be called for house seats.
    #[error("seat '{0}' is not eligible for a special election")]
    SeatNotEligible(String),

    /// At most one active election may exist per seat.
    #[error("an election is already active for seat '{0}'")]
    ElectionAlreadyActive(String),

    /// No active election matches the command.
    #[error("there is no active special election")]
    NoActiveElection,

    /// The user already appears in this election's candidate list.
    #[error("{0} is already registered as a candidate in this election")]
    AlreadyRegistered(String),

    /// The election cannot be ended with an empty candidate roster.
    #[error("the election for seat '{0}' has no candidates")]
    NoCandidates(String),

    /// The action is not available in the election's current phase.
    #[error("this action is only available during the {required} phase (currently {current})")]
    WrongPhase { required: Phase, current: Phase },

    /// No candidate matches the named target.
    #[error("no candidate named '{0}' is registered in this election")]
    TargetNotFound(String),

    /// The determined payer cannot cover the action's stamina gate.
    #[error("<@{user_id}> has {have} stamina but this action requires {need}")]
    InsufficientStamina { user_id: u64, have: i32, need: i32 },

    /// The payer used this action less than an hour ago.
    #[error("you must wait {hours_remaining:.2} more hours before using {action} again")]
    CooldownActive {
        action: &'static str,
        hours_remaining: f64,
    },

    /// Collected or supplied content failed validation.
    #[error("invalid content: {reason}")]
    ContentInvalid { reason: String },

    /// No qualifying reply arrived within the collection window.
    #[error("timed out waiting for your reply; the action was not performed, try again")]
    ContentTimeout,
}
