//! The ticket lifecycle subsystem.
//!
//! Routes "open ticket" button clicks into per-user private threads: at most
//! one active ticket per user per support system, recreation rate-limited to
//! one attempt per five minutes, and idempotent re-activation of existing
//! threads. See [`orchestrator::TicketOrchestrator`] for the state machine.

pub mod cache;
pub mod guard;
pub mod messages;
pub mod orchestrator;
pub mod registry;
pub mod responder;
pub mod thread_api;

#[cfg(test)]
mod test;
