use std::fmt;
use std::path::PathBuf;

use payroll_core::{Cents, PayError, PeriodError};
use thiserror::Error;

use crate::report::ReportError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    InvalidJson,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::InvalidJson => write!(f, "invalid json"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// What one desk run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskSummary {
    pub desk: String,
    /// Posts inside the pay window.
    pub posts: usize,
    pub sheets: usize,
    pub total: Cents,
    /// `None` when nobody on the desk earned anything.
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("{desk} desk: fetch failed: {source}")]
    Fetch {
        desk: String,
        #[source]
        source: FetchError,
    },
    #[error("{desk} desk: {source}")]
    Pay {
        desk: String,
        #[source]
        source: PayError,
    },
    #[error("{desk} desk: report failed: {source}")]
    Report {
        desk: String,
        #[source]
        source: ReportError,
    },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid pay period: {0}")]
    Period(#[from] PeriodError),
    #[error("failed to build http client: {0}")]
    Client(#[source] FetchError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
