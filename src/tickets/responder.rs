//! Seam over the interaction reply channel.
//!
//! Discord allows a single initial response per interaction; everything after
//! that must go through follow-ups. [`InteractionResponder`] hides that
//! platform constraint from the orchestrator, which just emits a sequence of
//! ephemeral replies.

use std::sync::atomic::{AtomicBool, Ordering};

use serenity::all::{
    ComponentInteraction, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::error::AppError;

#[async_trait]
pub trait TicketResponder: Send + Sync {
    /// Sends a reply visible only to the triggering user.
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError>;
}

/// Responder backed by a live component interaction.
pub struct InteractionResponder<'a> {
    http: &'a Http,
    interaction: &'a ComponentInteraction,
    responded: AtomicBool,
}

impl<'a> InteractionResponder<'a> {
    pub fn new(http: &'a Http, interaction: &'a ComponentInteraction) -> Self {
        Self {
            http,
            interaction,
            responded: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl TicketResponder for InteractionResponder<'_> {
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        if self.responded.swap(true, Ordering::SeqCst) {
            self.interaction
                .create_followup(
                    self.http,
                    CreateInteractionResponseFollowup::new()
                        .content(content)
                        .ephemeral(true),
                )
                .await?;
        } else {
            self.interaction
                .create_response(
                    self.http,
                    CreateInteractionResponse::Message(
                        CreateInteractionResponseMessage::new()
                            .content(content)
                            .ephemeral(true),
                    ),
                )
                .await?;
        }

        Ok(())
    }
}
