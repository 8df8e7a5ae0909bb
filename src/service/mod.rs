//! Business logic services.
//!
//! Services orchestrate repositories and pure model logic into the game's
//! operations: lifecycle transitions, campaign actions, stamina accounting,
//! poll simulation, reply collection, and autocomplete suggestions.

pub mod action;
pub mod collect;
pub mod lifecycle;
pub mod poll;
pub mod stamina;
pub mod suggest;

#[cfg(test)]
mod test;
