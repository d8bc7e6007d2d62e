//! Common test utilities for etla-access
//!
//! - Session fixtures for every known role
//! - Assertions over evaluator and guard outcomes

pub mod assertions;
pub mod fixtures;

pub use fixtures::{SessionFactory, access_control};
