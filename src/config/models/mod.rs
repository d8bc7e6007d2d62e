//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

pub mod access;

pub use access::*;
