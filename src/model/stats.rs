/// Aggregated ticket activity of one user under one support system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserTicketStats {
    pub user_id: u64,
    /// Number of distinct support solicitations the user wrote messages in.
    pub tickets_replied: i64,
}
