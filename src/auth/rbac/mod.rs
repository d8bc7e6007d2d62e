//! Role-Based Access Control (RBAC) system
//!
//! Static feature × permission × role matrix and the evaluator that answers
//! authorization queries against it.

mod catalog;
mod evaluator;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use catalog::{Feature, Permission, Scope};
pub use evaluator::PermissionEvaluator;
pub use roles::RoleId;
pub use system::{FALLBACK_ROLE, RbacSystem, RoleGrants};
pub use types::{Grant, GrantSource, PermissionCheck, permission_denied_message};
