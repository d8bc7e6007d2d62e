//! RBAC type definitions

use super::catalog::{Feature, Permission, Scope};
use serde::{Deserialize, Serialize};

/// A single authorization fact held by a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grant {
    /// Feature this grant applies to
    pub feature: Feature,
    /// Verb granted on the feature
    pub permission: Permission,
    /// Breadth of the grant (informational)
    pub scope: Scope,
}

impl Grant {
    /// Tenant-scoped grant
    pub const fn new(feature: Feature, permission: Permission) -> Self {
        Self {
            feature,
            permission,
            scope: Scope::Tenant,
        }
    }

    /// Same grant with a different scope
    pub const fn with_scope(self, scope: Scope) -> Self {
        Self { scope, ..self }
    }

    /// Whether this grant is exactly `(feature, permission)`
    pub fn matches(&self, feature: Feature, permission: Permission) -> bool {
        self.feature == feature && self.permission == permission
    }
}

/// Why a permission check was granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantSource {
    /// Demo mode bypasses the role table
    DemoMode,
    /// `host_admin` is an implicit wildcard
    HostAdmin,
    /// The role holds the exact `(feature, permission)` pair
    ExplicitGrant,
    /// The role holds `(feature, manage)`
    ManageGrant,
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// What granted the permission
    pub granted_by: Option<GrantSource>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}

impl PermissionCheck {
    pub(crate) fn granted(source: GrantSource) -> Self {
        Self {
            granted: true,
            granted_by: Some(source),
            denial_reason: None,
        }
    }

    pub(crate) fn denied(reason: String) -> Self {
        Self {
            granted: false,
            granted_by: None,
            denial_reason: Some(reason),
        }
    }
}

/// Denial message shared by the evaluator and the route guard
pub fn permission_denied_message(feature: Feature, permission: Permission) -> String {
    format!(
        "You don't have permission to {} {}",
        permission,
        feature.display_name()
    )
}
