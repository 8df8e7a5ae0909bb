//! Factory methods for creating test entities with sensible defaults.
//!
//! Each factory inserts an entity row with default values that can be
//! overridden for specific test scenarios, reducing boilerplate in tests.

pub mod cooldown;
pub mod helpers;
pub mod seat;
pub mod special_election;
