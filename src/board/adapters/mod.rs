//! Adapter implementations of the board ports.

pub mod memory;
pub mod routes;
pub mod signer;

pub use routes::{ApiRoutes, DEFAULT_API_PREFIX};
pub use signer::{SignatureError, TimestampSigner};
