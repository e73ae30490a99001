//! Scenario adapters - implementations of the ScenarioSource port.
//!
//! - `FileScenarioSource` - Reads a YAML or JSON scenario document from disk
//! - `InMemoryScenarioSource` - Serves a scenario built in code

mod document;
mod file_source;
mod in_memory;

pub use document::{DocumentFormat, OptionDocument, ScenarioDocument};
pub use file_source::FileScenarioSource;
pub use in_memory::InMemoryScenarioSource;
