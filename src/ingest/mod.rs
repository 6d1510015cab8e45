//! Upload ingestion: row parsing and the all-or-nothing bulk write

pub mod ingestor;
pub mod parser;

pub use ingestor::{IngestError, IngestResult, IngestSummary, Ingestor};
pub use parser::{parse_line, split_fields, ParseError};
