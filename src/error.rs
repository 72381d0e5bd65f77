//! @acp:module "Errors"
//! @acp:summary "Error types for catalog, navigation and submission failures"
//! @acp:domain core
//! @acp:layer types

use thiserror::Error;

use crate::flow::FlowError;
use crate::submission::{SubmissionError, ValidationError};
use crate::values::CatalogError;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Navigation error: {0}")]
    Flow(#[from] FlowError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}
