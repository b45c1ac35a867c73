use crate::data::support_solicitation::SupportSolicitationRepository;
use crate::tickets::registry::TicketSystemType;
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_latest_by_thread;
