use crate::core::error::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EngineError {
    #[error("the optimized library backend is not compiled into this build")]
    LibraryUnavailable,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
