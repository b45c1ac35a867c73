//! Loritta Helper Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests
//! for the helper bot. This crate offers a builder pattern for creating test
//! contexts with in-memory SQLite databases and customizable table schemas,
//! plus factories for the ticket activity entities.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::StartedSupportSolicitation;
//!
//! #[tokio::test]
//! async fn test_solicitations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(StartedSupportSolicitation)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
