//! JSONL reader for recorded callback sessions.
//!
//! Each non-blank line holds one [`CallbackRecord`] as a JSON object.
//! Lines that fail to parse are logged and skipped; only I/O errors end
//! the stream.

use std::path::Path;
use strands_domain::CallbackRecord;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::warn;

#[derive(Error, Debug)]
pub enum RecordSourceError {
    #[error("Failed to read callback records: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid callback record at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads callback records line by line from any async buffered reader.
pub struct JsonlRecordSource<R> {
    lines: Lines<R>,
    line_number: usize,
    skipped: usize,
}

impl JsonlRecordSource<Box<dyn AsyncBufRead + Send + Unpin>> {
    /// Open a file, or stdin when `path` is `-`.
    pub async fn open(path: &Path) -> Result<Self, RecordSourceError> {
        let reader: Box<dyn AsyncBufRead + Send + Unpin> = if path == Path::new("-") {
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        };
        Ok(Self::new(reader))
    }
}

impl<R: AsyncBufRead + Unpin> JsonlRecordSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            skipped: 0,
        }
    }

    /// Next valid record, or `None` at end of input.
    pub async fn next_record(&mut self) -> Result<Option<CallbackRecord>, RecordSourceError> {
        while let Some(line) = self.lines.next_line().await? {
            self.line_number += 1;
            match parse_line(self.line_number, &line) {
                Ok(Some(record)) => return Ok(Some(record)),
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping record: {}", e);
                    self.skipped += 1;
                }
            }
        }
        Ok(None)
    }

    /// Number of lines skipped because they failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Parse one line. Blank lines yield `Ok(None)`.
pub(crate) fn parse_line(
    line_number: usize,
    line: &str,
) -> Result<Option<CallbackRecord>, RecordSourceError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|source| RecordSourceError::Parse {
            line: line_number,
            source,
        })
}
