use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::models::CandidateId;

/// Failures of the in-memory ledger. The display strings double as the
/// `detail` field of the HTTP error body.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("No candidates found")]
    NoCandidates,
    #[error("Candidate not found")]
    CandidateNotFound(CandidateId),
    #[error("No votes found")]
    NoVotes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
