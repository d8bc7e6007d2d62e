//! Utility modules
//!
//! - **error**: Error types and helpers shared by every module

pub mod error;
