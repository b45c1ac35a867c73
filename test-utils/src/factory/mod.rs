//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with
//! sensible defaults, reducing boilerplate in tests. Each entity has its own
//! factory module with both a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let solicitation = factory::support_solicitation::SupportSolicitationFactory::new(&db)
//!         .user_id(123)
//!         .system_type("HELP_DESK_PORTUGUESE")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod support_solicitation;
pub mod ticket_message_activity;
