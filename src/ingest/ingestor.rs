//! Bulk ingestion of an uploaded event file
//!
//! Every line is parsed before anything is written. The parsed rows go to
//! the store in a single `insert_all`, so an upload either lands completely
//! or not at all.

use std::io::BufRead;
use std::sync::Arc;

use thiserror::Error;

use crate::event_store::{EventStore, StoreError};

use super::parser::{parse_line, ParseError};

const UTF8_BOM: char = '\u{feff}';

/// Why an upload was rejected
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("failed to read upload: {0}")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IngestError {
    /// The row-level error, if the upload failed while parsing
    pub fn parse_error(&self) -> Option<(usize, &ParseError)> {
        match self {
            IngestError::Parse { line, source } => Some((*line, source)),
            _ => None,
        }
    }
}

/// Result type for ingestion
pub type IngestResult<T> = Result<T, IngestError>;

/// Outcome of a committed upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Records written to the store
    pub inserted: usize,
    /// Blank lines that were skipped
    pub skipped_blank: usize,
}

/// Drives the parser over an input stream and commits the batch
#[derive(Clone)]
pub struct Ingestor {
    store: Arc<dyn EventStore>,
}

impl Ingestor {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Parse every line of `reader` and insert the result in one batch
    pub fn ingest<R: BufRead>(&self, reader: R) -> IngestResult<IngestSummary> {
        let mut events = Vec::new();
        let mut skipped_blank = 0;

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line = if index == 0 {
                line.trim_start_matches(UTF8_BOM)
            } else {
                line.as_str()
            };

            if line.trim().is_empty() {
                skipped_blank += 1;
                continue;
            }

            let event = parse_line(line).map_err(|source| IngestError::Parse {
                line: index + 1,
                source,
            })?;
            events.push(event);
        }

        let inserted = self.store.insert_all(events)?.len();
        tracing::info!(inserted, skipped_blank, "ingested upload");

        Ok(IngestSummary {
            inserted,
            skipped_blank,
        })
    }

    /// Convenience wrapper over `ingest` for in-memory content
    pub fn ingest_str(&self, content: &str) -> IngestResult<IngestSummary> {
        self.ingest(content.as_bytes())
    }
}
