use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write the seeded file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to serialize or parse seeded JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
