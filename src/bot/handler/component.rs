use std::sync::Arc;

use serenity::all::{ComponentInteraction, Context};

use crate::bot::handler::CREATE_TICKET_PREFIX;
use crate::model::trigger::TicketTrigger;
use crate::tickets::orchestrator::TicketOrchestrator;
use crate::tickets::registry::TicketSystemType;
use crate::tickets::responder::InteractionResponder;

/// Routes an "open ticket" button click into the orchestrator.
pub async fn handle_create_ticket(
    orchestrator: &Arc<TicketOrchestrator>,
    ctx: Context,
    interaction: ComponentInteraction,
) {
    let Some(raw_system) = interaction.data.custom_id.strip_prefix(CREATE_TICKET_PREFIX) else {
        return;
    };

    let system_type = match raw_system.parse::<TicketSystemType>() {
        Ok(system_type) => system_type,
        Err(e) => {
            tracing::warn!("Ignoring ticket button with unknown system type: {}", e);
            return;
        }
    };

    // Ticket buttons only live in guild channels; a missing member snapshot
    // means the interaction came from somewhere we do not serve.
    let Some(member) = &interaction.member else {
        return;
    };

    let trigger = TicketTrigger {
        user_id: interaction.user.id,
        user_name: interaction.user.name.clone(),
        member_roles: member.roles.clone(),
    };

    let responder = InteractionResponder::new(&ctx.http, &interaction);

    match orchestrator
        .on_ticket_trigger(system_type, &trigger, &responder)
        .await
    {
        Ok(outcome) => {
            tracing::debug!(
                user_id = trigger.user_id.get(),
                system_type = %system_type,
                ?outcome,
                "ticket trigger handled"
            );
        }
        Err(e) => {
            tracing::error!(
                user_id = trigger.user_id.get(),
                system_type = %system_type,
                "Failed to handle ticket trigger: {:?}",
                e
            );
        }
    }
}
