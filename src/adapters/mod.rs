//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `scenario` - Scenario sources (filesystem documents, in-memory)

pub mod scenario;

pub use scenario::{FileScenarioSource, InMemoryScenarioSource, ScenarioDocument};
