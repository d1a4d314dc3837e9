//! Task posting for the FixFlex marketplace client.
//!
//! A poster describes a task through a four-step wizard (title and date,
//! location, details, budget). Each step is gated by a pure validator and
//! the completed draft is handed to the marketplace's task-creation API. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
