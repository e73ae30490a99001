//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error types and error codes
//! - `decision` - Value objects: options, outcomes, criteria, evaluations
//! - `analysis` - Pure scoring services (normalization, risk adjustment,
//!   strategies, agent, sensitivity sweep)

pub mod analysis;
pub mod decision;
pub mod foundation;
