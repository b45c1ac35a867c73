//! Rate limit on ticket (re)creation attempts.
//!
//! Entries expire a fixed duration after being written, regardless of read
//! activity. The guard is best-effort: it lives in process memory only and is
//! lost on restart, which is acceptable since it exists purely to stop users
//! from closing and reopening tickets constantly.

use std::time::Duration;

use chrono::Utc;
use moka::sync::Cache;
use serenity::all::UserId;

/// How long a user must wait between ticket creation attempts.
pub const CREATION_COOLDOWN: Duration = Duration::from_secs(5 * 60);

/// Result of the atomic check-and-mark step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreationGate {
    /// No live entry existed; one was recorded for this attempt.
    Allowed,
    /// A live entry exists. `retry_at` is the Unix timestamp at which the
    /// entry expires and a new attempt becomes allowed.
    RecentlyCreated { retry_at: i64 },
}

/// Time-bounded map from user id to the timestamp of their last creation
/// attempt.
pub struct RecentCreationGuard {
    recent: Cache<UserId, i64>,
    cooldown: Duration,
}

impl RecentCreationGuard {
    pub fn new() -> Self {
        Self::with_cooldown(CREATION_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            recent: Cache::builder().time_to_live(cooldown).build(),
            cooldown,
        }
    }

    /// Checks for a live entry and, if absent, atomically marks one with the
    /// current timestamp.
    ///
    /// The check and the mark are a single atomic step: two concurrent calls
    /// for the same user cannot both observe "no entry" and both proceed.
    pub fn check_and_mark(&self, user: UserId) -> CreationGate {
        let entry = self
            .recent
            .entry(user)
            .or_insert_with(|| Utc::now().timestamp());

        if entry.is_fresh() {
            CreationGate::Allowed
        } else {
            let marked_at = *entry.value();
            CreationGate::RecentlyCreated {
                retry_at: marked_at + self.cooldown.as_secs() as i64,
            }
        }
    }

    /// Invalidates the user's entry so they can retry immediately.
    ///
    /// Called after a failed creation, instead of making the user wait out
    /// the window for a ticket that never materialized.
    pub fn release(&self, user: UserId) {
        self.recent.invalidate(&user);
    }
}

impl Default for RecentCreationGuard {
    fn default() -> Self {
        Self::new()
    }
}
