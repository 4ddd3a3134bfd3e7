use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::{self, Json};
use shared::{ErrorResponse, LedgerError};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unprocessable(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
            ApiError::PayloadTooLarge => Status::PayloadTooLarge,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal Server Error".into(),
            other => other.to_string(),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        ApiError::NotFound(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Ledger(e) => e.into(),
            poisoned @ StoreError::LockPoisoned => ApiError::Internal(poisoned.to_string()),
        }
    }
}

/// Request bodies are all-or-nothing: syntax errors, missing fields and
/// type mismatches are reported alike as 422.
impl<'r> From<json::Error<'r>> for ApiError {
    fn from(e: json::Error<'r>) -> Self {
        match e {
            json::Error::Io(io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
                ApiError::PayloadTooLarge
            }
            json::Error::Io(io) => ApiError::Unprocessable(io.to_string()),
            json::Error::Parse(_, parse) => ApiError::Unprocessable(parse.to_string()),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        match &self {
            ApiError::Internal(cause) => error!("{} {} failed: {}", req.method(), req.uri(), cause),
            other => warn!("{} {} rejected: {}", req.method(), req.uri(), other),
        }

        rocket::Response::build_from(Json(ErrorResponse::new(self.detail())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
