//! Error type shared by the sampler, keyspace builder and generator.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The secure byte source failed or could not fill the buffer.
    #[error("secure random source failed: {0}")]
    EntropySource(String),

    /// No character class enabled, or an empty keyspace was supplied.
    #[error("keyspace is empty: enable at least one character class")]
    EmptyKeyspace,

    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// Rejection loop gave up; only reachable with a broken byte source.
    #[error("no value accepted after {0} attempts")]
    RetryLimit(u32),

    #[error("cannot write output: {0}")]
    Output(String),

    #[error("unknown character class: {0}")]
    UnknownClass(String),
}

pub type Result<T> = std::result::Result<T, Error>;
