//! Integration tests for etla-access
//!
//! These tests verify the interaction between the role table, the evaluator,
//! the session store and the guards without mocking.

pub mod config_validation_tests;
pub mod error_handling_tests;
pub mod evaluator_tests;
pub mod route_guard_tests;
