use thiserror::Error;

/// Errors raised while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Writing a fixture to disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
