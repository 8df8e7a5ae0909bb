//! Domain models for the election game.
//!
//! Plain structs and pure logic shared by the data and service layers.
//! Entity conversion happens at the repository boundary; everything in here
//! is database-agnostic.

pub mod action;
pub mod election;
pub mod message;
pub mod phase;
pub mod poll;
pub mod seat;
