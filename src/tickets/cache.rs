//! In-memory cache of active ticket threads, one instance per ticket system.
//!
//! The cache has no eviction policy: entries are only removed explicitly by
//! the orchestrator when a cached thread id turns out to be stale. At most one
//! active ticket exists per user per system; the orchestrator is the sole
//! writer.

use dashmap::DashMap;
use serenity::all::{ChannelId, UserId};

/// A currently tracked, possibly archived, ticket thread owned by one user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTicket {
    pub owner: UserId,
    pub thread_id: ChannelId,
}

/// Mapping from user to their active ticket under one system type.
///
/// Backed by a concurrent map with per-key locking so that unrelated users'
/// flows never serialize on a global lock.
#[derive(Default)]
pub struct TicketCache {
    tickets: DashMap<UserId, ActiveTicket>,
}

impl TicketCache {
    pub fn new() -> Self {
        Self {
            tickets: DashMap::new(),
        }
    }

    pub fn get(&self, user: UserId) -> Option<ActiveTicket> {
        self.tickets.get(&user).map(|entry| *entry)
    }

    /// Inserts or overwrites the user's active ticket. Overwrite-safe: the
    /// orchestrator re-inserts the same ticket on reactivation.
    pub fn insert(&self, ticket: ActiveTicket) {
        self.tickets.insert(ticket.owner, ticket);
    }

    pub fn remove(&self, user: UserId) {
        self.tickets.remove(&user);
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}
