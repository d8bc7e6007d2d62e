//! Authentication state and authorization system
//!
//! Authentication itself is performed by the hosted backend; this module
//! holds the resolved session and answers permission queries against it.

pub mod rbac;
pub mod session;

pub use rbac::{Feature, Permission, PermissionEvaluator, RbacSystem, RoleId, Scope};
pub use session::{AuthSnapshot, AuthState, Session, SessionStore};

use crate::config::AccessConfig;
use crate::guard::{RouteGuard, RouteTable};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Main access control system
#[derive(Debug, Clone)]
pub struct AccessControl {
    /// Access configuration
    config: Arc<AccessConfig>,
    /// Static role table
    rbac: Arc<RbacSystem>,
    /// Current session
    session: Arc<SessionStore>,
    /// Route requirements
    routes: Arc<RouteTable>,
}

impl AccessControl {
    /// Create a new access control system
    pub fn new(config: AccessConfig) -> Result<Self> {
        info!("Initializing access control system");

        let rbac = Arc::new(RbacSystem::new(&config));
        let routes = Arc::new(RouteTable::from_config(&config)?);

        Ok(Self {
            config: Arc::new(config),
            rbac,
            session: Arc::new(SessionStore::new()),
            routes,
        })
    }

    pub fn config(&self) -> &AccessConfig {
        &self.config
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    /// Session store; the auth collaborator writes to it
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Run queries against one consistent session snapshot
    pub fn with_evaluator<R>(&self, f: impl FnOnce(&PermissionEvaluator<'_>) -> R) -> R {
        let session = self.session.load();
        let evaluator = self.rbac.evaluator(&session.state);
        f(&evaluator)
    }

    /// Shorthand for a single permission check
    pub fn has_permission(&self, feature: Feature, permission: Permission) -> bool {
        self.with_evaluator(|evaluator| evaluator.has_permission(feature, permission))
    }

    /// New route guard bound to this system
    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(Arc::clone(&self.rbac), Arc::clone(&self.routes))
    }
}
