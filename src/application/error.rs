// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("enrichment failed: {0}")]
    Enrichment(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn enrichment(msg: impl Into<String>) -> Self {
        Self::Enrichment(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Caller-side failures: nothing downstream was touched.
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(err) => err.is_validation(),
            _ => false,
        }
    }

    /// Store failures raised while the pipeline was persisting. Domain
    /// validation errors pass through untouched.
    pub fn from_store(err: DomainError) -> Self {
        if err.is_validation() {
            Self::Domain(err)
        } else {
            Self::Persistence(err.to_string())
        }
    }
}
