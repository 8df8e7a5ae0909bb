//! Capability traits implemented by the hosting chat platform.
//!
//! The core never talks to a chat transport directly. The dispatcher layer
//! delivers validated command invocations, implements these traits, and feeds
//! follow-up messages into the collection hub. Admin permission checks and
//! autocomplete live here as injected capabilities rather than inside the
//! game-state machine.

use async_trait::async_trait;

use crate::error::AppError;

/// Maximum number of autocomplete suggestions returned to the platform.
pub const MAX_SUGGESTIONS: usize = 25;

/// A payload sent back through the dispatcher's reply channel.
#[derive(Debug, Clone, PartialEq)]
pub enum OutboundReply {
    /// Plain message content.
    Message(String),
    /// A prompt asking the actor for follow-up content.
    ///
    /// The dispatcher must arrange for replies referencing
    /// `correlation_token` to be delivered to the collection hub.
    Prompt {
        text: String,
        correlation_token: String,
    },
}

/// Reply channel for a single command invocation.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn send(&self, reply: OutboundReply) -> Result<(), AppError>;
}

/// Admin gate owned by the dispatcher layer.
///
/// Lifecycle commands (call/end/cancel) must only be dispatched for users
/// this check approves; the core does not re-verify.
pub trait PermissionChecker: Send + Sync {
    fn is_admin(&self, guild_id: u64, user_id: u64) -> bool;
}

/// Autocomplete callback: partial input to at most
/// [`MAX_SUGGESTIONS`] suggestions.
#[async_trait]
pub trait Suggester: Send + Sync {
    async fn suggest(&self, guild_id: u64, partial: &str) -> Result<Vec<String>, AppError>;
}
