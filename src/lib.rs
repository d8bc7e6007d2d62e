//! # ETLA Access
//!
//! Role-based access control for the ETLA HR, payroll and talent platform.
//!
//! ## Features
//!
//! - **Closed catalog**: features, permission verbs and scopes are enums
//! - **Static role table**: every role's grants are enumerated in source
//! - **Two short-circuit rules**: demo mode and `host_admin` grant everything
//! - **Guards**: a conditional render gate and a route guard state machine
//!
//! ## Quick Start
//!
//! ```rust
//! use etla_access::{AccessControl, AuthSnapshot, Feature, Permission};
//! use etla_access::config::AccessConfig;
//!
//! let access = AccessControl::new(AccessConfig::default())?;
//! access
//!     .session()
//!     .resolve(AuthSnapshot::authenticated("client_user"));
//!
//! assert!(access.has_permission(Feature::WorkRequests, Permission::Create));
//! assert!(!access.has_permission(Feature::WorkRequests, Permission::Delete));
//! # Ok::<(), etla_access::AccessError>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod guard;
pub mod utils;

// Re-export main types
pub use auth::rbac::{GrantSource, PermissionCheck};
pub use auth::{
    AccessControl, AuthSnapshot, AuthState, Feature, Permission, PermissionEvaluator,
    RbacSystem, RoleId, Scope, SessionStore,
};
pub use config::Config;
pub use guard::{PermissionGate, Requirement, RouteGuard, RouteTable, RouteView};
pub use utils::error::{AccessError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
