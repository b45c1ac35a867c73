//! Seam over the remote thread-management API.
//!
//! The orchestrator only ever talks to Discord through [`ThreadApi`], so the
//! state machine can be exercised in tests without a gateway connection. No
//! retries happen at this layer; failures surface as transport errors.

use std::sync::Arc;

use serenity::all::{
    AutoArchiveDuration, ChannelId, ChannelType, CreateMessage, CreateThread, EditThread, UserId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

/// Parameters of the idempotent thread patch operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThreadPatch {
    pub name: String,
    pub archived: bool,
    pub locked: bool,
    pub invitable: bool,
}

impl ThreadPatch {
    /// The reactivation patch: rename, unarchive, unlock, keep non-invitable.
    ///
    /// Kept unlocked to avoid a Discord Mobile bug showing "You don't have
    /// permission!" in locked threads.
    pub fn reactivate(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            archived: false,
            locked: false,
            invitable: false,
        }
    }
}

#[async_trait]
pub trait ThreadApi: Send + Sync {
    /// Creates a private thread under `parent` and returns its id.
    async fn create_thread(
        &self,
        parent: ChannelId,
        name: &str,
        auto_archive: AutoArchiveDuration,
        reason: &str,
    ) -> Result<ChannelId, AppError>;

    /// Applies `patch` to the thread. Idempotent on the remote side.
    async fn patch_thread(
        &self,
        thread: ChannelId,
        patch: ThreadPatch,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Adds the user as a thread member. Must run after unarchival.
    async fn add_thread_member(&self, thread: ChannelId, user: UserId) -> Result<(), AppError>;

    /// Posts a plain content message into the thread.
    async fn post_message(&self, thread: ChannelId, content: &str) -> Result<(), AppError>;
}

/// [`ThreadApi`] implementation over Serenity's HTTP client.
pub struct DiscordThreadApi {
    http: Arc<Http>,
}

impl DiscordThreadApi {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ThreadApi for DiscordThreadApi {
    async fn create_thread(
        &self,
        parent: ChannelId,
        name: &str,
        auto_archive: AutoArchiveDuration,
        reason: &str,
    ) -> Result<ChannelId, AppError> {
        let thread = parent
            .create_thread(
                &self.http,
                CreateThread::new(name)
                    .kind(ChannelType::PrivateThread)
                    .auto_archive_duration(auto_archive)
                    .audit_log_reason(reason),
            )
            .await?;

        Ok(thread.id)
    }

    async fn patch_thread(
        &self,
        thread: ChannelId,
        patch: ThreadPatch,
        reason: &str,
    ) -> Result<(), AppError> {
        thread
            .edit_thread(
                &self.http,
                EditThread::new()
                    .name(patch.name)
                    .archived(patch.archived)
                    .locked(patch.locked)
                    .invitable(patch.invitable)
                    .audit_log_reason(reason),
            )
            .await?;

        Ok(())
    }

    async fn add_thread_member(&self, thread: ChannelId, user: UserId) -> Result<(), AppError> {
        self.http.add_thread_channel_member(thread, user).await?;

        Ok(())
    }

    async fn post_message(&self, thread: ChannelId, content: &str) -> Result<(), AppError> {
        thread
            .send_message(&self.http, CreateMessage::new().content(content))
            .await?;

        Ok(())
    }
}
