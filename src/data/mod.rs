pub mod support_solicitation;
pub mod ticket_message_activity;

pub use support_solicitation::SupportSolicitationRepository;
pub use ticket_message_activity::TicketMessageActivityRepository;

#[cfg(test)]
mod test;
