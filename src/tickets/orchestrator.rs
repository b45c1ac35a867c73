//! The ticket creation state machine.
//!
//! One [`TicketOrchestrator::on_ticket_trigger`] call handles one button
//! click: policy checks, rate limiting, resolving the user's thread (reuse or
//! create), idempotent reactivation, caching, activity recording, the welcome
//! sequence and the final confirmation. The orchestrator exclusively owns the
//! per-system ticket caches and the recent-creation guard; no other component
//! mutates them.
//!
//! Concurrency: interactions for different users run as independent tasks and
//! never serialize on a global lock. Two rapid clicks by the same user are
//! collapsed by the guard's atomic check-and-mark, which happens before any
//! remote I/O.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::ChannelId;

use crate::data::SupportSolicitationRepository;
use crate::error::AppError;
use crate::model::trigger::TicketTrigger;
use crate::tickets::cache::{ActiveTicket, TicketCache};
use crate::tickets::guard::{CreationGate, RecentCreationGuard};
use crate::tickets::messages;
use crate::tickets::registry::{TicketSystemRegistry, TicketSystemType};
use crate::tickets::responder::TicketResponder;
use crate::tickets::thread_api::{ThreadApi, ThreadPatch};

/// Attempts at surfacing a usable thread within one trigger. The second
/// attempt only runs after a stale cache entry was invalidated, so it always
/// takes the fresh-create path.
const MAX_SURFACE_ATTEMPTS: u32 = 2;

/// Why a trigger was rejected without touching the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    /// The requester holds the system's disqualifying role.
    DisqualifyingRole,
    /// The requester created a ticket within the cooldown window.
    RecentlyCreated { retry_at: i64 },
}

/// Terminal outcome of one trigger. Policy rejections are outcomes, not
/// errors; the user-visible reply has already been sent in both cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicketOutcome {
    Rejected(RejectionReason),
    Opened {
        thread_id: ChannelId,
        /// Whether the thread was created by this trigger, as opposed to
        /// reactivated from the cache.
        fresh: bool,
    },
}

pub struct TicketOrchestrator {
    registry: Arc<TicketSystemRegistry>,
    caches: HashMap<TicketSystemType, TicketCache>,
    guard: RecentCreationGuard,
    thread_api: Arc<dyn ThreadApi>,
    db: DatabaseConnection,
}

impl TicketOrchestrator {
    /// Builds the orchestrator with one ticket cache per registered system
    /// type.
    pub fn new(
        registry: Arc<TicketSystemRegistry>,
        thread_api: Arc<dyn ThreadApi>,
        db: DatabaseConnection,
    ) -> Self {
        let caches = TicketSystemType::ALL
            .into_iter()
            .map(|system_type| (system_type, TicketCache::new()))
            .collect();

        Self {
            registry,
            caches,
            guard: RecentCreationGuard::new(),
            thread_api,
            db,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_guard(mut self, guard: RecentCreationGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn cache(&self, system_type: TicketSystemType) -> Result<&TicketCache, AppError> {
        self.caches
            .get(&system_type)
            .ok_or_else(|| {
                crate::error::config::ConfigError::UnregisteredTicketSystem(
                    system_type.to_string(),
                )
                .into()
            })
    }

    pub fn guard(&self) -> &RecentCreationGuard {
        &self.guard
    }

    /// Entry point for the button-dispatch layer: one user clicked the
    /// "open ticket" control of `system_type`.
    pub async fn on_ticket_trigger(
        &self,
        system_type: TicketSystemType,
        trigger: &TicketTrigger,
        responder: &dyn TicketResponder,
    ) -> Result<TicketOutcome, AppError> {
        let info = self.registry.lookup(system_type)?;
        let cache = self.cache(system_type)?;

        // RoleCheck. Terminal, no guard or cache mutation.
        if let Some(disqualifying) = &info.disqualifying_role {
            if trigger.has_role(disqualifying.role_id) {
                responder.reply_ephemeral(&disqualifying.notice).await?;
                return Ok(TicketOutcome::Rejected(RejectionReason::DisqualifyingRole));
            }
        }

        // RateCheck and Mark are one atomic step, and the mark must happen
        // before any remote call: two simultaneous clicks by the same user
        // must not both decide "no recent ticket" and both create a thread.
        if let CreationGate::RecentlyCreated { retry_at } =
            self.guard.check_and_mark(trigger.user_id)
        {
            responder
                .reply_ephemeral(&messages::recently_created(info.locale, retry_at))
                .await?;
            return Ok(TicketOutcome::Rejected(RejectionReason::RecentlyCreated {
                retry_at,
            }));
        }

        // The remote thread calls are not guaranteed to finish within the
        // interaction's response budget, so acknowledge first.
        responder
            .reply_ephemeral(&messages::creating_ticket(info.locale))
            .await?;

        let thread_name = trigger.thread_name();
        let mut attempt = 0;

        let (thread_id, fresh) = loop {
            attempt += 1;

            let (thread_id, fresh) = match cache.get(trigger.user_id) {
                Some(ticket) => (ticket.thread_id, false),
                None => {
                    let created = self
                        .thread_api
                        .create_thread(
                            info.parent_channel_id,
                            &thread_name,
                            info.archive_duration,
                            &format!("Ticket created for {}", trigger.user_id),
                        )
                        .await;

                    match created {
                        Ok(thread_id) => (thread_id, true),
                        Err(err) => {
                            // Nothing was created; let the user retry
                            // immediately instead of waiting out the window.
                            self.guard.release(trigger.user_id);
                            return Err(err);
                        }
                    }
                }
            };

            // Reactivate unconditionally, even on the freshly-created path:
            // the patch is idempotent and guarantees convergence regardless
            // of which path resolved the thread.
            match self
                .reactivate(thread_id, &thread_name, trigger)
                .await
            {
                Ok(()) => break (thread_id, fresh),
                Err(err) if !fresh && attempt < MAX_SURFACE_ATTEMPTS => {
                    // The cached thread id no longer matches a thread Discord
                    // will patch. This should never happen while the cache is
                    // consistent with the remote state.
                    tracing::warn!(
                        user_id = trigger.user_id.get(),
                        thread_id = thread_id.get(),
                        error = %err,
                        "cached ticket thread could not be reactivated, invalidating and retrying"
                    );
                    cache.remove(trigger.user_id);
                    continue;
                }
                Err(err) => {
                    cache.remove(trigger.user_id);
                    self.guard.release(trigger.user_id);
                    return Err(err);
                }
            }
        };

        cache.insert(ActiveTicket {
            owner: trigger.user_id,
            thread_id,
        });

        if fresh {
            self.record_solicitation(system_type, trigger, thread_id)
                .await;
        }

        for message in &info.welcome {
            self.thread_api
                .post_message(thread_id, &message.render(trigger.user_id))
                .await?;
        }

        responder
            .reply_ephemeral(&messages::ticket_ready(info.locale, thread_id))
            .await?;

        Ok(TicketOutcome::Opened { thread_id, fresh })
    }

    /// Unarchives, unlocks and renames the thread, then re-adds the owner as
    /// a member. Member addition only works on an unarchived thread, so the
    /// patch runs first.
    async fn reactivate(
        &self,
        thread_id: ChannelId,
        thread_name: &str,
        trigger: &TicketTrigger,
    ) -> Result<(), AppError> {
        self.thread_api
            .patch_thread(
                thread_id,
                ThreadPatch::reactivate(thread_name),
                &format!(
                    "Unarchival request via button by {} ({})",
                    trigger.user_name, trigger.user_id
                ),
            )
            .await?;

        self.thread_api
            .add_thread_member(thread_id, trigger.user_id)
            .await
    }

    /// Records the started-solicitation row consumed by the stats
    /// aggregator. A failure here only loses a stats data point, so it is
    /// logged instead of aborting the user-visible flow.
    async fn record_solicitation(
        &self,
        system_type: TicketSystemType,
        trigger: &TicketTrigger,
        thread_id: ChannelId,
    ) {
        let repo = SupportSolicitationRepository::new(&self.db);

        if let Err(err) = repo
            .create(
                trigger.user_id.get(),
                thread_id.get(),
                system_type,
                Utc::now(),
            )
            .await
        {
            tracing::warn!(
                user_id = trigger.user_id.get(),
                thread_id = thread_id.get(),
                error = %err,
                "failed to record started support solicitation"
            );
        }
    }
}
