//! SeaORM entity models for the electionboard database schema.
//!
//! Entities map one-to-one onto the persisted tables: per-guild seat records,
//! the per-guild special election document, and per-user action cooldowns.
//! Domain conversion happens in the root crate's data layer; these types stay
//! as close to the raw rows as possible.

pub mod seat;
pub mod special_election;
pub mod special_election_cooldown;

pub mod prelude {
    pub use super::seat::Entity as Seat;
    pub use super::special_election::Entity as SpecialElection;
    pub use super::special_election_cooldown::Entity as SpecialElectionCooldown;
}
