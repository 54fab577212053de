// src/error.rs
//
// Typed failure surface, one enum per layer:
// - ScrapeError: transport/page-shape problems while fetching raw tables (fatal).
// - IngestError: rows the normalizer cannot make sense of (fatal).
// - QueryError:  per-query misses from the analyzer (recoverable).
// - StoreError:  export/cache I/O and reload parsing (fatal).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("no population tables found on page")]
    NoTables,
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// More marker rows than canonical names. The upstream page layout
    /// changed and the group table needs updating.
    #[error("no canonical area name for series group {0}")]
    UnmappedGroup(u32),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no data for {area} in {year}")]
    NotFound { area: String, year: i32 },

    #[error("no earlier sample for {area} before {year}")]
    InsufficientData { area: String, year: i32 },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bad cached row in {file}: {reason}")]
    BadRow { file: String, reason: String },
}
