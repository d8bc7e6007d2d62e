//! Test fixtures and session factories
//!
//! All fixtures build real sessions, not mocks.

use etla_access::config::AccessConfig;
use etla_access::{AccessControl, AuthSnapshot, AuthState};

/// Factory for auth states
pub struct SessionFactory;

impl SessionFactory {
    /// Signed-in user with `role`
    pub fn signed_in(role: &str) -> AuthState {
        AuthState::Resolved(AuthSnapshot::authenticated(role))
    }

    /// Signed-in user with demo mode on
    pub fn demo(role: &str) -> AuthState {
        AuthState::Resolved(AuthSnapshot::authenticated(role).with_demo_mode(true))
    }

    /// Signed-out visitor
    pub fn anonymous() -> AuthState {
        AuthState::Resolved(AuthSnapshot::anonymous())
    }

    /// Role resolution still running
    pub fn pending() -> AuthState {
        AuthState::Pending
    }
}

/// Access control with default configuration
pub fn access_control() -> AccessControl {
    AccessControl::new(AccessConfig::default()).expect("default config is valid")
}
