// scorecard-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    // --- DOMAIN (bad month names, fiscal range, invalid captures) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (backends, IO, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for ScorecardError {
    fn from(err: std::io::Error) -> Self {
        ScorecardError::Infrastructure(InfrastructureError::Io(err))
    }
}
