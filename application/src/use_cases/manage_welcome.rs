//! View or replace the welcome text.

use crate::ports::welcome_store::{WelcomeStore, WelcomeStoreError};
use std::sync::Arc;
use strands_domain::{WelcomeAction, present_welcome};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WelcomeError {
    #[error(transparent)]
    Store(#[from] WelcomeStoreError),
}

/// Result of a welcome action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeOutcome {
    /// Text to display
    Viewed(String),
    /// The stored text was replaced
    Updated,
}

impl WelcomeOutcome {
    pub fn message(&self) -> &str {
        match self {
            WelcomeOutcome::Viewed(text) => text,
            WelcomeOutcome::Updated => "Welcome text updated successfully",
        }
    }
}

pub struct ManageWelcomeUseCase {
    store: Arc<dyn WelcomeStore>,
}

impl ManageWelcomeUseCase {
    pub fn new(store: Arc<dyn WelcomeStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self, action: WelcomeAction) -> Result<WelcomeOutcome, WelcomeError> {
        match action {
            WelcomeAction::View => {
                let stored = self.store.read()?;
                Ok(WelcomeOutcome::Viewed(present_welcome(stored.as_deref())))
            }
            WelcomeAction::Edit { content } => {
                self.store.write(&content)?;
                Ok(WelcomeOutcome::Updated)
            }
        }
    }
}
