//! Guard constructs
//!
//! Adapt evaluator queries to conditional rendering and route protection
//! without depending on any UI framework.

mod gate;
mod route;
mod routes;

pub use gate::{GateDecision, PermissionGate, Requirement};
pub use route::{Denial, DenialReason, GuardState, RecoveryAction, RouteGuard, RouteView};
pub use routes::{RouteMatch, RouteRequirement, RouteTable, normalize_path};
