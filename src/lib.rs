//! Special-election mini-game core.
//!
//! This crate implements the game-state machine behind a chat-platform
//! "special election" bot: administrators call elections for vacant seats,
//! users sign up as candidates, perform campaign actions (speeches, posters,
//! ads) within time-boxed phases, and a winner is declared by accumulated
//! points.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Model Layer** (`model/`) - Domain models, per-action constants, and the
//!   pure phase clock
//! - **Data Layer** (`data/`) - Database repositories and entity-to-domain
//!   model conversion
//! - **Service Layer** (`service/`) - Business logic: election lifecycle,
//!   campaign action engine, stamina ledger, poll simulation, reply collection
//! - **Dispatch Layer** (`dispatch`) - Capability traits implemented by the
//!   hosting chat platform (reply channel, permission checks, autocomplete)
//! - **Error Layer** (`error/`) - Application error types
//!
//! The core is transport-agnostic: command registration, message formatting,
//! and permission enforcement belong to the hosting dispatcher. A typical
//! command flows dispatcher → service → repository → database, with the
//! collection hub suspending speech/ad commands until the actor's follow-up
//! message arrives.

pub mod config;
pub mod data;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;

#[cfg(test)]
pub(crate) mod testkit;
