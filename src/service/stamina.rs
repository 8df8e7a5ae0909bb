//! Stamina accounting for campaign actions.

use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

use crate::data::election::ElectionRepository;
use crate::model::election::Candidate;

/// Resolves which participant pays an action's stamina cost and applies the
/// deduction.
///
/// The contract is deliberately two-step: [`determine_payer`] only selects
/// who pays, and the caller re-checks sufficiency before committing. When
/// neither participant can afford the action the target is still selected,
/// so the caller's re-check fails while knowing whose stamina fell short.
/// Do not merge the steps; downstream messaging depends on the split.
///
/// [`determine_payer`]: Self::determine_payer
pub struct StaminaLedger<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaminaLedger<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects the user who pays for an action against `target`.
    ///
    /// 1. The actor pays if they are a signed-up candidate in the guild's
    ///    first active election and can cover the gate cost.
    /// 2. Otherwise the target pays if they can cover it.
    /// 3. Otherwise the target is selected anyway; the caller's sufficiency
    ///    re-check will reject the action.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `actor_id`: User invoking the action
    /// - `target`: Candidate the action is aimed at
    /// - `gate_cost`: Stamina threshold for the action kind
    ///
    /// # Returns
    /// - `Ok(user_id)`: The selected payer
    /// - `Err(DbErr)`: Database error
    pub async fn determine_payer(
        &self,
        guild_id: u64,
        actor_id: u64,
        target: &Candidate,
        gate_cost: i32,
    ) -> Result<u64, DbErr> {
        let elections = ElectionRepository::new(self.db);

        if let Some(election) = elections.find_any_active(guild_id).await? {
            if let Some(actor) = election.candidate_by_user(actor_id) {
                if actor.stamina >= gate_cost {
                    return Ok(actor_id);
                }
            }
        }

        if target.stamina >= gate_cost {
            return Ok(target.user_id);
        }

        // Neither can afford it; the target is reported as the short payer.
        Ok(target.user_id)
    }

    /// Deducts stamina from a candidate, flooring the result at 0.
    ///
    /// Searches the guild's active elections for the first candidate with the
    /// given user ID and persists the updated document.
    ///
    /// # Returns
    /// - `Ok(Some(stamina))`: Remaining stamina after the deduction
    /// - `Ok(None)`: No active candidate with this user ID
    /// - `Err(DbErr)`: Database error
    pub async fn deduct(
        &self,
        guild_id: u64,
        user_id: u64,
        amount: i32,
    ) -> Result<Option<i32>, DbErr> {
        let elections = ElectionRepository::new(self.db);
        let mut doc = elections.get_or_create(guild_id).await?;

        let mut remaining = None;
        'outer: for election in &mut doc.active {
            for candidate in &mut election.candidates {
                if candidate.user_id == user_id {
                    candidate.stamina = (candidate.stamina - amount).max(0);
                    remaining = Some(candidate.stamina);
                    break 'outer;
                }
            }
        }

        if remaining.is_some() {
            elections.save_active(guild_id, &doc.active).await?;
            debug!(guild_id, user_id, amount, "stamina deducted");
        }

        Ok(remaining)
    }
}
