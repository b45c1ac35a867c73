use crate::service::TicketStatsService;
use crate::tickets::registry::TicketSystemType;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod top_responders;
