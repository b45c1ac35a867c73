//! Error types for the helper bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors. Most
//! variants use `#[from]` for automatic error conversion; `serenity::Error` is
//! boxed due to its size.
//!
//! Policy rejections (rate-limited user, disqualifying role) are not errors:
//! they are modeled as `TicketOutcome::Rejected` by the orchestrator, since
//! they are expected, user-visible outcomes rather than failures.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers every transport-level failure of the
    /// remote thread-management API (create/patch/add-member/post-message)
    /// and of interaction replies.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
