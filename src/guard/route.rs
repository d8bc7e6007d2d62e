//! Route guard
//!
//! Per navigation: `Pending -> Authorized | Unauthorized(denial)`. The
//! decision is cached until the next navigation or session change.

use crate::auth::rbac::{Feature, Permission, RbacSystem, permission_denied_message};
use crate::auth::session::{AuthState, Session};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::routes::{RouteMatch, RouteTable, normalize_path};

/// Why navigation was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DenialReason {
    LoginRequired,
    AdminRequired,
    HostAdminRequired,
    MissingPermission {
        feature: Feature,
        permission: Permission,
    },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::LoginRequired => write!(f, "You must be logged in to view this page"),
            DenialReason::AdminRequired => write!(f, "This page requires administrator privileges"),
            DenialReason::HostAdminRequired => {
                write!(f, "This page requires host administrator privileges")
            }
            DenialReason::MissingPermission {
                feature,
                permission,
            } => f.write_str(&permission_denied_message(*feature, *permission)),
        }
    }
}

/// Way out of a denial screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum RecoveryAction {
    /// Navigate to a fixed path
    Redirect(String),
    /// One step back in history
    GoBack,
}

/// Terminal denial state rendered instead of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denial {
    pub path: String,
    pub reason: DenialReason,
    pub message: String,
    pub actions: [RecoveryAction; 2],
}

impl Denial {
    fn new(path: &str, reason: DenialReason, redirect: &str) -> Self {
        Self {
            path: path.to_string(),
            message: reason.to_string(),
            reason,
            actions: [
                RecoveryAction::Redirect(redirect.to_string()),
                RecoveryAction::GoBack,
            ],
        }
    }
}

/// Route guard state for the current navigation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Waiting for a navigation or for auth resolution
    #[default]
    Pending,
    Authorized,
    Unauthorized(Denial),
}

/// What to render for the current navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteView<T> {
    Loading,
    Page(T),
    Denied(Denial),
}

/// Gate between navigation and page content
#[derive(Debug, Clone)]
pub struct RouteGuard {
    rbac: Arc<RbacSystem>,
    routes: Arc<RouteTable>,
    path: Option<String>,
    state: GuardState,
    generation: Option<u64>,
}

impl RouteGuard {
    pub fn new(rbac: Arc<RbacSystem>, routes: Arc<RouteTable>) -> Self {
        Self {
            rbac,
            routes,
            path: None,
            state: GuardState::Pending,
            generation: None,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// New navigation: back to `Pending`
    pub fn navigate(&mut self, path: &str) {
        debug!("Navigating to {}", path);
        self.path = Some(path.to_string());
        self.state = GuardState::Pending;
    }

    /// Bring the cached decision up to date with `session`.
    ///
    /// Re-enters `Pending` only when the session generation changed; a
    /// settled decision is otherwise returned as is.
    pub fn sync(&mut self, session: &Session) -> &GuardState {
        if self.generation != Some(session.generation) {
            self.generation = Some(session.generation);
            self.state = GuardState::Pending;
        }

        if self.state == GuardState::Pending && !session.state.is_pending() {
            if let Some(path) = &self.path {
                self.state = self.decide(path, &session.state);
            }
        }

        &self.state
    }

    /// Render `page` if authorized, otherwise the loading or denial view
    pub fn render<T>(&mut self, session: &Session, page: impl FnOnce() -> T) -> RouteView<T> {
        match self.sync(session) {
            GuardState::Pending => RouteView::Loading,
            GuardState::Authorized => RouteView::Page(page()),
            GuardState::Unauthorized(denial) => RouteView::Denied(denial.clone()),
        }
    }

    /// Decide a path against a resolved auth state. Pending auth stays pending.
    pub fn decide(&self, path: &str, state: &AuthState) -> GuardState {
        if state.is_pending() {
            return GuardState::Pending;
        }

        let path = normalize_path(path);
        match self.check(path, state) {
            Ok(()) => GuardState::Authorized,
            Err(reason) => {
                info!("Denied navigation to {}: {}", path, reason);
                let redirect = match reason {
                    DenialReason::LoginRequired => self.routes.login_path(),
                    _ => self.routes.default_redirect(),
                };
                GuardState::Unauthorized(Denial::new(path, reason, redirect))
            }
        }
    }

    fn check(&self, path: &str, state: &AuthState) -> Result<(), DenialReason> {
        if self.routes.is_public(path) {
            return Ok(());
        }

        let evaluator = self.rbac.evaluator(state);

        if !evaluator.is_authenticated() {
            return Err(DenialReason::LoginRequired);
        }
        if self.routes.is_admin_only(path) && !evaluator.is_admin() {
            return Err(DenialReason::AdminRequired);
        }
        if self.routes.is_host_admin_only(path) && !evaluator.is_host_admin() {
            return Err(DenialReason::HostAdminRequired);
        }

        match self.routes.requirement_for(path) {
            Some(route) => {
                let requirement = route.requirement();
                if let RouteMatch::Dynamic { index, pattern, .. } = &route {
                    debug!("{} matched dynamic route #{} ({})", path, index, pattern);
                }
                if evaluator.has_permission(requirement.feature, requirement.permission) {
                    Ok(())
                } else {
                    Err(DenialReason::MissingPermission {
                        feature: requirement.feature,
                        permission: requirement.permission,
                    })
                }
            }
            None => {
                if self.routes.logs_unmapped() {
                    debug!("No route entry for {}, allowing", path);
                }
                Ok(())
            }
        }
    }
}
