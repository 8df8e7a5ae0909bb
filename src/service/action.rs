//! Campaign action engine: signup, speech, poster, and ad.
//!
//! Preconditions are checked in a fixed order and the first failure wins:
//! active election → campaign phase → target resolution → roster membership →
//! payer determination and stamina gate → payer cooldown. Content is
//! collected and validated after the prechecks; only then does the engine
//! commit (cooldown touch, point award to the target, stamina deduction from
//! the payer). A validation failure or collection timeout therefore leaves
//! points, stamina, and cooldowns untouched and the actor may retry
//! immediately.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::{
    data::{cooldown::CooldownRepository, election::ElectionRepository, seat::SeatRepository},
    dispatch::{OutboundReply, Replier},
    error::{AppError, ElectionError},
    model::{
        action::{
            ActionKind, ActionReport, MAX_ATTACHMENT_BYTES, SPEECH_MAX_CHARS, SPEECH_MIN_CHARS,
            STARTING_STAMINA,
        },
        election::{Candidate, Election},
        message::{AttachmentMeta, IncomingMessage},
        phase::Phase,
    },
    service::{collect::CollectionHub, collect::COLLECT_TIMEOUT, stamina::StaminaLedger},
};

/// Parameters for registering as a candidate.
#[derive(Debug, Clone)]
pub struct SignupParams {
    /// Seat to sign up for; `None` targets the guild's first active election.
    pub seat_id: Option<String>,
    pub user_id: u64,
    /// Display name recorded on the candidate.
    pub name: String,
    pub party: String,
}

/// Parameters shared by the point-awarding campaign actions.
#[derive(Debug, Clone)]
pub struct CampaignParams {
    /// Seat whose election the action applies to; `None` uses the guild's
    /// first active election.
    pub seat_id: Option<String>,
    pub actor_id: u64,
    /// Actor's display name, used when the actor self-targets without being
    /// registered (the resulting lookup failure names them).
    pub actor_name: String,
    /// Explicit target candidate name; `None` self-targets.
    pub target: Option<String>,
}

/// Validates and applies campaign actions against an election's candidates.
pub struct ActionEngine<'a> {
    db: &'a DatabaseConnection,
    collect_timeout: Duration,
}

impl<'a> ActionEngine<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            collect_timeout: COLLECT_TIMEOUT,
        }
    }

    /// Overrides the reply collection window (used by tests).
    pub fn with_collect_timeout(mut self, timeout: Duration) -> Self {
        self.collect_timeout = timeout;
        self
    }

    /// Registers the user as a candidate in the signup phase.
    ///
    /// Signup has no cooldown and no stamina cost. The new candidate starts
    /// with zero points and full stamina; office and state are copied from
    /// the seat registry.
    ///
    /// # Returns
    /// - `Ok(Candidate)`: The registered candidate
    /// - `Err(AppError)`: No active election, wrong phase, duplicate signup,
    ///   or the seat vanished from the registry
    pub async fn signup(&self, guild_id: u64, params: SignupParams) -> Result<Candidate, AppError> {
        let elections = ElectionRepository::new(self.db);
        let seats = SeatRepository::new(self.db);

        let election = self
            .resolve_active(&elections, guild_id, params.seat_id.as_deref())
            .await?
            .ok_or(ElectionError::NoActiveElection)?;

        let phase = election.phase(Utc::now());
        if phase != Phase::Signup {
            return Err(ElectionError::WrongPhase {
                required: Phase::Signup,
                current: phase,
            }
            .into());
        }

        if election.candidate_by_user(params.user_id).is_some() {
            return Err(ElectionError::AlreadyRegistered(params.name).into());
        }

        let seat = seats
            .get(guild_id, &election.seat_id)
            .await?
            .ok_or_else(|| ElectionError::SeatNotFound(election.seat_id.clone()))?;

        let candidate = Candidate {
            user_id: params.user_id,
            name: params.name,
            party: params.party,
            points: 0.0,
            office: seat.office,
            state: seat.state,
            signup_date: Utc::now(),
            stamina: STARTING_STAMINA,
        };

        let mut doc = elections.get_or_create(guild_id).await?;
        let entry = doc
            .active
            .iter_mut()
            .find(|e| e.seat_id == election.seat_id)
            .ok_or(ElectionError::NoActiveElection)?;
        entry.candidates.push(candidate.clone());
        elections.save_active(guild_id, &doc.active).await?;

        info!(
            guild_id,
            seat_id = %election.seat_id,
            user_id = candidate.user_id,
            "candidate signed up"
        );

        Ok(candidate)
    }

    /// Gives a campaign speech for a candidate.
    ///
    /// Prompts the actor through the reply channel, then suspends until their
    /// follow-up message referencing `correlation_token` arrives. The speech
    /// must run 700–3000 characters.
    pub async fn give_speech(
        &self,
        guild_id: u64,
        params: CampaignParams,
        correlation_token: &str,
        hub: &CollectionHub,
        replier: &dyn Replier,
    ) -> Result<ActionReport, AppError> {
        let ready = self.precheck(guild_id, &params, ActionKind::Speech).await?;

        replier
            .send(OutboundReply::Prompt {
                text: format!(
                    "Post your campaign speech ({}-{} characters) as a reply to this prompt.",
                    SPEECH_MIN_CHARS, SPEECH_MAX_CHARS
                ),
                correlation_token: correlation_token.to_string(),
            })
            .await?;

        let reply = hub
            .await_reply(params.actor_id, correlation_token, self.collect_timeout, |_| true)
            .await?;

        let chars = reply.content.chars().count();
        if !(SPEECH_MIN_CHARS..=SPEECH_MAX_CHARS).contains(&chars) {
            return Err(ElectionError::ContentInvalid {
                reason: format!(
                    "speech must be between {} and {} characters, got {}",
                    SPEECH_MIN_CHARS, SPEECH_MAX_CHARS, chars
                ),
            }
            .into());
        }

        self.commit(guild_id, ready, ActionKind::Speech).await
    }

    /// Puts up a campaign poster for a candidate.
    ///
    /// The poster image is supplied synchronously with the command; no
    /// collection session is opened.
    pub async fn put_up_poster(
        &self,
        guild_id: u64,
        params: CampaignParams,
        attachment: AttachmentMeta,
    ) -> Result<ActionReport, AppError> {
        let ready = self.precheck(guild_id, &params, ActionKind::Poster).await?;

        validate_attachment(&attachment, "image/")?;

        self.commit(guild_id, ready, ActionKind::Poster).await
    }

    /// Runs a campaign ad for a candidate.
    ///
    /// Prompts the actor, then suspends until a follow-up message carrying at
    /// least one attachment arrives. The attachment must be a video of at
    /// most 25 MB.
    pub async fn run_ad(
        &self,
        guild_id: u64,
        params: CampaignParams,
        correlation_token: &str,
        hub: &CollectionHub,
        replier: &dyn Replier,
    ) -> Result<ActionReport, AppError> {
        let ready = self.precheck(guild_id, &params, ActionKind::Ad).await?;

        replier
            .send(OutboundReply::Prompt {
                text: "Post your campaign video as a reply to this prompt.".to_string(),
                correlation_token: correlation_token.to_string(),
            })
            .await?;

        let reply = hub
            .await_reply(
                params.actor_id,
                correlation_token,
                self.collect_timeout,
                |m: &IncomingMessage| !m.attachments.is_empty(),
            )
            .await?;

        let attachment = reply
            .attachments
            .first()
            .ok_or(ElectionError::ContentInvalid {
                reason: "reply carried no attachment".to_string(),
            })?;
        validate_attachment(attachment, "video/")?;

        self.commit(guild_id, ready, ActionKind::Ad).await
    }

    /// Runs the ordered preconditions for a point-awarding action.
    async fn precheck(
        &self,
        guild_id: u64,
        params: &CampaignParams,
        kind: ActionKind,
    ) -> Result<ReadyAction, AppError> {
        let elections = ElectionRepository::new(self.db);
        let ledger = StaminaLedger::new(self.db);

        let election = self
            .resolve_active(&elections, guild_id, params.seat_id.as_deref())
            .await?
            .ok_or(ElectionError::NoActiveElection)?;

        let phase = election.phase(Utc::now());
        if phase != Phase::Campaign {
            return Err(ElectionError::WrongPhase {
                required: Phase::Campaign,
                current: phase,
            }
            .into());
        }

        let target_name = match &params.target {
            Some(name) => name.clone(),
            None => election
                .candidate_by_user(params.actor_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| params.actor_name.clone()),
        };

        let target_index = election
            .candidate_index_by_name(&target_name)
            .ok_or_else(|| ElectionError::TargetNotFound(target_name.clone()))?;
        let target = &election.candidates[target_index];

        let payer_id = ledger
            .determine_payer(guild_id, params.actor_id, target, kind.gate_cost())
            .await?;

        let payer_stamina = if payer_id == target.user_id {
            target.stamina
        } else {
            // The actor qualifies as payer through the guild's first active
            // election, which is not necessarily the one being acted on.
            elections
                .find_any_active(guild_id)
                .await?
                .and_then(|e| e.candidate_by_user(payer_id).map(|c| c.stamina))
                .unwrap_or(0)
        };

        if payer_stamina < kind.gate_cost() {
            return Err(ElectionError::InsufficientStamina {
                user_id: payer_id,
                have: payer_stamina,
                need: kind.gate_cost(),
            }
            .into());
        }

        let cooldowns = CooldownRepository::new(self.db);
        if let Some(last) = cooldowns.last_used(guild_id, payer_id, kind).await? {
            let elapsed = Utc::now() - last;
            if elapsed < kind.cooldown() {
                let remaining = kind.cooldown() - elapsed;
                return Err(ElectionError::CooldownActive {
                    action: kind.name(),
                    hours_remaining: remaining.num_milliseconds() as f64 / 3_600_000.0,
                }
                .into());
            }
        }

        Ok(ReadyAction {
            seat_id: election.seat_id,
            target_name,
            payer_id,
        })
    }

    /// Applies a validated action: cooldown touch, point award, deduction.
    async fn commit(
        &self,
        guild_id: u64,
        ready: ReadyAction,
        kind: ActionKind,
    ) -> Result<ActionReport, AppError> {
        let elections = ElectionRepository::new(self.db);
        let cooldowns = CooldownRepository::new(self.db);
        let ledger = StaminaLedger::new(self.db);

        let now = Utc::now();
        cooldowns
            .touch(guild_id, ready.payer_id, kind, &ready.seat_id, now)
            .await?;

        let (min, max) = kind.point_range();
        let points_gained = {
            let mut rng = rand::rng();
            rng.random_range(min..=max)
        };

        let mut doc = elections.get_or_create(guild_id).await?;
        let entry = doc
            .active
            .iter_mut()
            .find(|e| e.seat_id == ready.seat_id)
            .ok_or(ElectionError::NoActiveElection)?;
        let index = entry
            .candidate_index_by_name(&ready.target_name)
            .ok_or_else(|| ElectionError::TargetNotFound(ready.target_name.clone()))?;
        entry.candidates[index].points += points_gained;
        elections.save_active(guild_id, &doc.active).await?;

        let payer_stamina_after = ledger
            .deduct(guild_id, ready.payer_id, kind.deducted_amount())
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "payer {} vanished from active elections during commit",
                    ready.payer_id
                ))
            })?;

        debug!(
            guild_id,
            seat_id = %ready.seat_id,
            action = kind.name(),
            target = %ready.target_name,
            points_gained,
            payer_id = ready.payer_id,
            "campaign action committed"
        );

        Ok(ActionReport {
            action: kind,
            target_name: ready.target_name,
            points_gained,
            payer_id: ready.payer_id,
            stamina_deducted: kind.deducted_amount(),
            payer_stamina_after,
        })
    }

    async fn resolve_active(
        &self,
        elections: &ElectionRepository<'_>,
        guild_id: u64,
        seat_id: Option<&str>,
    ) -> Result<Option<Election>, AppError> {
        let election = match seat_id {
            Some(seat_id) => elections.find_active_for_seat(guild_id, seat_id).await?,
            None => elections.find_any_active(guild_id).await?,
        };

        Ok(election)
    }
}

/// A fully prechecked action awaiting content validation and commit.
struct ReadyAction {
    seat_id: String,
    target_name: String,
    payer_id: u64,
}

fn validate_attachment(attachment: &AttachmentMeta, mime_prefix: &str) -> Result<(), ElectionError> {
    let kind = mime_prefix.trim_end_matches('/');

    match &attachment.content_type {
        Some(content_type) if content_type.starts_with(mime_prefix) => {}
        _ => {
            return Err(ElectionError::ContentInvalid {
                reason: format!("attachment must be a {} file", kind),
            })
        }
    }

    if attachment.size_bytes > MAX_ATTACHMENT_BYTES {
        return Err(ElectionError::ContentInvalid {
            reason: format!(
                "attachment is too large ({} bytes, limit {})",
                attachment.size_bytes, MAX_ATTACHMENT_BYTES
            ),
        });
    }

    Ok(())
}
