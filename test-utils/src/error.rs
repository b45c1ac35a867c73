use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or create its schema.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
