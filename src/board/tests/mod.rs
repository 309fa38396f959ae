//! Unit tests for the board module.

mod rules_tests;
mod support;
