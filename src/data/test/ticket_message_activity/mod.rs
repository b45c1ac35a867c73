use crate::data::ticket_message_activity::TicketMessageActivityRepository;
use crate::tickets::registry::TicketSystemType;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_distinct_solicitations_since;
mod create;
