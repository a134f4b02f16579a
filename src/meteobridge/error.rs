use std::fmt;
use std::num::ParseFloatError;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single poll cycle. None of these are fatal; the caller keeps
/// serving its last good snapshot.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("failed to reach Meteobridge at {host}")]
    Transport {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Meteobridge at {host} answered {status}")]
    Status { host: String, status: StatusCode },

    #[error("failed to decode Meteobridge response")]
    Decode(#[from] DecodeError),

    #[error("failed to parse Meteobridge reading")]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollErrorKind {
    Transport,
    Decode,
    Parse,
}

impl PollError {
    pub fn kind(&self) -> PollErrorKind {
        match self {
            PollError::Transport { .. } | PollError::Status { .. } => PollErrorKind::Transport,
            PollError::Decode(_) => PollErrorKind::Decode,
            PollError::Parse(_) => PollErrorKind::Parse,
        }
    }
}

impl fmt::Display for PollErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollErrorKind::Transport => f.write_str("transport"),
            PollErrorKind::Decode => f.write_str("decode"),
            PollErrorKind::Parse => f.write_str("parse"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is empty")]
    EmptyBody,

    #[error("malformed response")]
    Malformed(#[from] csv::Error),

    #[error("line {line}: expected {expected} fields, got {actual}")]
    FieldCount {
        line: u64,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid timestamp: {value}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp does not exist in {timezone}: {value}")]
    NonexistentTime { value: String, timezone: String },

    #[error("invalid {field}: {value:?}")]
    Number {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}
