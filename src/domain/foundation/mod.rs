//! Foundation module - Shared domain primitives.
//!
//! Contains the error types and error codes that form the failure
//! vocabulary of the Decision Compass domain.

mod errors;

pub use errors::{AnalysisError, ErrorCode, ValidationError};
