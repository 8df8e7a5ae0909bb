//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each domain in the application. Repositories use SeaORM entity models
//! internally and return domain models to maintain separation between the data
//! layer and the business logic layer.

pub mod cooldown;
pub mod election;
pub mod seat;
