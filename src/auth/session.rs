//! Session state consumed by the evaluator and guards
//!
//! The auth collaborator is the single writer. Readers take an
//! `Arc<Session>` snapshot and run every check against it, so a check never
//! observes a half-applied role change.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Resolved authentication facts for the current user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    /// Raw role string as reported by the auth backend
    pub role: Option<String>,
    pub is_authenticated: bool,
    pub is_demo_mode: bool,
}

impl AuthSnapshot {
    /// Signed-in user with the given role
    pub fn authenticated(role: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            is_authenticated: true,
            is_demo_mode: false,
        }
    }

    /// Signed-out user
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_demo_mode(mut self, enabled: bool) -> Self {
        self.is_demo_mode = enabled;
        self
    }
}

/// Authentication state as seen by the evaluator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Role resolution has not completed yet
    #[default]
    Pending,
    /// Role resolution completed
    Resolved(AuthSnapshot),
}

impl AuthState {
    pub fn is_pending(&self) -> bool {
        matches!(self, AuthState::Pending)
    }

    pub fn snapshot(&self) -> Option<&AuthSnapshot> {
        match self {
            AuthState::Pending => None,
            AuthState::Resolved(snapshot) => Some(snapshot),
        }
    }
}

impl From<AuthSnapshot> for AuthState {
    fn from(snapshot: AuthSnapshot) -> Self {
        AuthState::Resolved(snapshot)
    }
}

/// A versioned auth state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub state: AuthState,
    /// Bumped on every change
    pub generation: u64,
}

/// Holder of the current session
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: ArcSwap<Session>,
}

impl SessionStore {
    /// New store in the pending state
    pub fn new() -> Self {
        Self::default()
    }

    /// Consistent view of the current session
    pub fn load(&self) -> Arc<Session> {
        self.inner.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.inner.load().generation
    }

    /// Authentication started, or the role is being re-resolved
    pub fn begin_resolution(&self) {
        self.replace(AuthState::Pending);
    }

    /// Authentication completed
    pub fn resolve(&self, snapshot: AuthSnapshot) {
        self.replace(AuthState::Resolved(snapshot));
    }

    /// Toggle demo mode on the resolved session. No-op while pending.
    pub fn set_demo_mode(&self, enabled: bool) {
        let current = self.load();
        if let AuthState::Resolved(snapshot) = &current.state {
            if snapshot.is_demo_mode != enabled {
                self.replace(AuthState::Resolved(
                    snapshot.clone().with_demo_mode(enabled),
                ));
            }
        }
    }

    /// Logout or session expiry: clears the role and demo mode
    pub fn logout(&self) {
        self.replace(AuthState::Resolved(AuthSnapshot::anonymous()));
    }

    fn replace(&self, state: AuthState) {
        let previous = self.inner.rcu(|current| Session {
            state: state.clone(),
            generation: current.generation + 1,
        });
        debug!(
            "Session changed (generation {} -> {})",
            previous.generation,
            previous.generation + 1
        );
    }
}
