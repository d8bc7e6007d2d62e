//! Error handling for access control
//!
//! This module defines all error types used throughout the crate.

mod helpers;
#[cfg(test)]
mod tests;
mod types;

pub use types::{AccessError, Result};
