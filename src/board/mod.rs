//! Scrum board records, representations and write validation.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Write rules in [`validation`]
//! - Read-path shapes in [`representation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod representation;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
