//! Error types for the election core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps infrastructure errors and the
//! domain-specific `ElectionError` taxonomy. Domain errors are user-visible
//! and terminal for the single command invocation; nothing is retried by the
//! core. The dispatcher-facing layer is responsible for catching genuinely
//! unexpected errors and reporting a generic failure without crashing.

pub mod config;
pub mod election;

use thiserror::Error;

pub use config::ConfigError;
pub use election::ElectionError;

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the core. Most variants use
/// `#[from]` for automatic conversion. `ElectionError` carries the
/// user-visible game errors; infrastructure variants are surfaced to the
/// dispatcher as generic failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// User-visible game error (wrong phase, cooldown, insufficient
    /// stamina, invalid content, ...).
    #[error(transparent)]
    ElectionErr(#[from] ElectionError),

    /// Internal error with custom message.
    ///
    /// The message is logged server-side; dispatchers should report a generic
    /// failure to the user.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Returns the wrapped domain error, if this is a user-visible game error.
    ///
    /// Dispatchers use this to decide between relaying the message verbatim
    /// and reporting a generic failure.
    pub fn as_election_error(&self) -> Option<&ElectionError> {
        match self {
            Self::ElectionErr(err) => Some(err),
            _ => None,
        }
    }
}
