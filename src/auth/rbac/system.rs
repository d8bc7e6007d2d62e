//! RBAC system core functionality

use crate::auth::session::AuthState;
use crate::config::{AccessConfig, UnknownRolePolicy};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::evaluator::PermissionEvaluator;
use super::roles::RoleId;
use super::types::Grant;

/// Role that unknown role strings fall back to
pub const FALLBACK_ROLE: RoleId = RoleId::ClientUser;

/// RBAC system: the static role table plus the unknown-role policy
#[derive(Debug)]
pub struct RbacSystem {
    /// What to do with role strings missing from the table
    pub(super) unknown_role_policy: UnknownRolePolicy,
    /// Unknown role strings already reported at `warn`
    reported_unknown_roles: Mutex<HashSet<String>>,
}

/// One row of the role-permission matrix
#[derive(Debug, Clone, Serialize)]
pub struct RoleGrants {
    pub role: RoleId,
    pub is_admin: bool,
    /// `true` for `host_admin`, whose access does not come from `grants`
    pub wildcard: bool,
    pub grants: &'static [Grant],
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &AccessConfig) -> Self {
        info!("Initializing RBAC system with {} roles", RoleId::ALL.len());

        if config.unknown_role_policy == UnknownRolePolicy::Fallback {
            debug!(
                "Unknown roles fall back to '{}' grants",
                FALLBACK_ROLE.as_str()
            );
        }

        Self {
            unknown_role_policy: config.unknown_role_policy,
            reported_unknown_roles: Mutex::new(HashSet::new()),
        }
    }

    /// Resolve a raw role string into a known role.
    ///
    /// Unknown strings resolve to [`FALLBACK_ROLE`] under the `fallback`
    /// policy and to `None` under `deny`. Never fails. Each distinct unknown
    /// string is logged at `warn` once and at `debug` afterwards.
    pub fn resolve_role(&self, raw: &str) -> Option<RoleId> {
        if let Ok(role) = raw.parse::<RoleId>() {
            return Some(role);
        }

        let resolved = match self.unknown_role_policy {
            UnknownRolePolicy::Fallback => Some(FALLBACK_ROLE),
            UnknownRolePolicy::Deny => None,
        };
        let outcome = match resolved {
            Some(role) => format!("falling back to '{}'", role),
            None => "denying all permissions".to_string(),
        };
        if self.first_report(raw) {
            warn!("Unknown role '{}', {}", raw, outcome);
        } else {
            debug!("Unknown role '{}', {}", raw, outcome);
        }
        resolved
    }

    /// `true` the first time `raw` is seen as an unknown role
    pub(super) fn first_report(&self, raw: &str) -> bool {
        let mut reported = self.reported_unknown_roles.lock();
        if reported.contains(raw) {
            return false;
        }
        reported.insert(raw.to_string())
    }

    /// Grant list for a raw role string
    pub fn grants_for(&self, raw: &str) -> &'static [Grant] {
        self.resolve_role(raw)
            .map(|role| role.grants())
            .unwrap_or(&[])
    }

    /// Configured unknown-role policy
    pub fn unknown_role_policy(&self) -> UnknownRolePolicy {
        self.unknown_role_policy
    }

    /// The full role-permission matrix, for read-only display
    pub fn matrix(&self) -> Vec<RoleGrants> {
        RoleId::ALL
            .iter()
            .map(|role| RoleGrants {
                role: *role,
                is_admin: role.is_admin(),
                wildcard: *role == RoleId::HostAdmin,
                grants: role.grants(),
            })
            .collect()
    }

    /// Build an evaluator over one auth snapshot
    pub fn evaluator<'a>(&'a self, state: &'a AuthState) -> PermissionEvaluator<'a> {
        PermissionEvaluator::new(self, state)
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new(&AccessConfig::default())
    }
}
