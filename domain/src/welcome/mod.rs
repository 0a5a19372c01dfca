//! Welcome text scratchpad.
//!
//! The welcome text is shown at start-up and doubles as a shared scratchpad
//! between sessions started in the same directory.

use crate::core::error::DomainError;
use std::str::FromStr;

/// Text shown when no welcome text has been stored yet.
pub const DEFAULT_WELCOME_TEXT: &str = "\
# Strands

Agent progress is rendered live in this terminal:

- a **thinking** indicator while the model works
- one spinner per running tool, with its input size as it streams in
- a final line per tool with its elapsed time

## Commands

- `strands replay <file>` replays recorded event-loop callbacks
- `strands store <text>` saves a note to the knowledge base
- `strands welcome edit --content <text>` replaces this text

Edit this text to leave notes for the next session.";

const STORED_MARKER: &str = "*.*";
const DEFAULT_MARKER: &str = "*welcome to strands!*";

/// Action requested on the welcome text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WelcomeAction {
    View,
    Edit { content: String },
}

impl WelcomeAction {
    /// Build an action from its name and the optional edit content.
    pub fn parse(action: &str, content: Option<String>) -> Result<Self, DomainError> {
        match action.parse::<WelcomeActionKind>()? {
            WelcomeActionKind::View => Ok(WelcomeAction::View),
            WelcomeActionKind::Edit => content
                .map(|content| WelcomeAction::Edit { content })
                .ok_or(DomainError::MissingWelcomeContent),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WelcomeActionKind {
    View,
    Edit,
}

impl FromStr for WelcomeActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(WelcomeActionKind::View),
            "edit" => Ok(WelcomeActionKind::Edit),
            other => Err(DomainError::UnknownWelcomeAction(other.to_string())),
        }
    }
}

/// The text returned by `view`: stored text, or the default when none exists.
pub fn present_welcome(stored: Option<&str>) -> String {
    match stored {
        Some(text) => format!("{}\n{}", STORED_MARKER, text),
        None => format!("{}\n{}", DEFAULT_MARKER, DEFAULT_WELCOME_TEXT),
    }
}
