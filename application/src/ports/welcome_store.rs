//! Welcome text storage port.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WelcomeStoreError {
    #[error("Welcome text I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent location of the welcome text.
pub trait WelcomeStore: Send + Sync {
    /// Stored text, or `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, WelcomeStoreError>;

    /// Replace the stored text.
    fn write(&self, content: &str) -> Result<(), WelcomeStoreError>;
}
