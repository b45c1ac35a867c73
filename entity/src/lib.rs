pub mod prelude;

pub mod started_support_solicitation;
pub mod ticket_message_activity;
