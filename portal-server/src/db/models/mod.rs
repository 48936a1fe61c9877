//! Data models for the in-memory portal store
//!
//! One file per entity, each with its Create/Update payloads where the
//! entity is client-mutable.

pub mod department;
pub mod document;
pub mod employee;
pub mod evaluation;
pub mod policy;
pub mod user;

pub mod criterion;

// Re-exports
pub use criterion::{CriterionCreate, CriterionUpdate, EvaluationCriterion};
pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use document::{Document, DocumentCreate, DocumentReview, DocumentStatus};
pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use evaluation::{CriteriaScore, Evaluation, EvaluationStatus, EvaluationSubmit};
pub use policy::Policy;
pub use user::User;
