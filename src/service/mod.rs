pub mod stats;

pub use stats::TicketStatsService;

#[cfg(test)]
mod test;
