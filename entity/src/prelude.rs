pub use super::started_support_solicitation::Entity as StartedSupportSolicitation;
pub use super::ticket_message_activity::Entity as TicketMessageActivity;
