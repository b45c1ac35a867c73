use serenity::all::{RoleId, UserId};

/// Guild-member snapshot of the user that clicked the ticket button.
///
/// Role membership is taken from the interaction payload, not fetched; the
/// orchestrator never queries the guild for it.
#[derive(Clone, Debug)]
pub struct TicketTrigger {
    pub user_id: UserId,
    pub user_name: String,
    pub member_roles: Vec<RoleId>,
}

impl TicketTrigger {
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.member_roles.contains(&role_id)
    }

    /// Thread name for this user's ticket.
    ///
    /// Max username size (32) + id digits + decoration stays well below
    /// Discord's 100 character thread-name limit.
    pub fn thread_name(&self) -> String {
        format!("📨 {} ({})", self.user_name, self.user_id)
    }
}
