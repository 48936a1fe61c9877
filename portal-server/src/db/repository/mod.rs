//! Repository Module
//!
//! CRUD operations over the in-memory [`PortalStore`] collections. Every
//! business operation goes through a repository; nothing outside this module
//! touches the raw collections. Methods are synchronous: the store is
//! process memory and no lock is ever held across an `await`.

pub mod criteria;
pub mod department;
pub mod document;
pub mod employee;
pub mod evaluation;
pub mod policy;
pub mod user;

// Re-exports
pub use criteria::CriteriaRepository;
pub use department::DepartmentRepository;
pub use document::DocumentRepository;
pub use employee::EmployeeRepository;
pub use evaluation::EvaluationRepository;
pub use policy::PolicyRepository;
pub use user::UserRepository;

use thiserror::Error;

use crate::utils::AppError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::BusinessRule(msg) => AppError::business_rule(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
