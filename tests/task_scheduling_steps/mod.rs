//! Step definitions for sprint and task scheduling scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
