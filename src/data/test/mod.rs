mod support_solicitation;
mod ticket_message_activity;
