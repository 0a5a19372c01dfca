//! `.welcome` file storage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use strands_application::ports::welcome_store::{WelcomeStore, WelcomeStoreError};

pub const WELCOME_FILE: &str = ".welcome";

/// Welcome text stored in a `.welcome` file.
#[derive(Debug, Clone)]
pub struct FileWelcomeStore {
    path: PathBuf,
}

impl FileWelcomeStore {
    /// Store inside the given directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(WELCOME_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WelcomeStore for FileWelcomeStore {
    fn read(&self) -> Result<Option<String>, WelcomeStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, content: &str) -> Result<(), WelcomeStoreError> {
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
