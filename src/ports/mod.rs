//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScenarioSource` - Supplies the criteria and evaluations to score

mod scenario_source;

pub use scenario_source::ScenarioSource;
