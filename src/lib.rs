//! Scrumboard: record adapters for a scrum board API.
//!
//! This crate shapes sprint, task and user records into their API
//! representations, embeds hypermedia links to related resources, and
//! enforces the date and status rules that guard sprint and task writes.
//!
//! # Architecture
//!
//! Scrumboard follows hexagonal architecture principles:
//!
//! - **Domain**: Typed records with no infrastructure dependencies
//! - **Ports**: Lookup, URL reversal and signing contracts
//! - **Adapters**: In-memory repositories, path-template routes and a
//!   timestamp signer
//!
//! # Modules
//!
//! - [`board`]: Records, representations and write validation
//! - [`config`]: Link-building configuration
//!
//! # Example
//!
//! ```
//! use chrono::{Days, Utc};
//! use scrumboard::board::{
//!     domain::{RecordName, Sprint, SprintFields},
//!     ports::RequestContext,
//!     services::RepresentationService,
//! };
//! use scrumboard::config::BoardConfig;
//! use mockable::DefaultClock;
//! use std::sync::Arc;
//!
//! let service = RepresentationService::from_config(&BoardConfig::default(), Arc::new(DefaultClock))
//!     .expect("default secret keys the signer");
//! let end = Utc::now().date_naive() + Days::new(14);
//! let sprint = Sprint::new(SprintFields::new(RecordName::new("Sprint 1").expect("valid name"), end));
//!
//! let shaped = service.sprint(&sprint, &RequestContext::relative());
//! assert_eq!(shaped.links.tasks, format!("/api/tasks/?sprint={}", sprint.id()));
//! ```

pub mod board;
pub mod config;
