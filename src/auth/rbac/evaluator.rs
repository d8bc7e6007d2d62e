//! Permission evaluator
//!
//! Answers authorization queries against one [`AuthState`] snapshot. Every
//! query applies two short-circuit rules before the role table is consulted:
//!
//! 1. demo mode grants everything;
//! 2. `host_admin` is an implicit wildcard.
//!
//! Anything else is denied unless the role's grant list holds the pair, or
//! holds `manage` on the same feature.

use crate::auth::session::AuthState;
use std::collections::BTreeSet;
use tracing::debug;

use super::catalog::{Feature, Permission};
use super::roles::RoleId;
use super::system::RbacSystem;
use super::types::{Grant, GrantSource, PermissionCheck, permission_denied_message};

/// Synchronous permission queries for the current session
#[derive(Debug, Clone, Copy)]
pub struct PermissionEvaluator<'a> {
    state: &'a AuthState,
    role: Option<RoleId>,
}

impl<'a> PermissionEvaluator<'a> {
    /// Resolve the session role once; later queries reuse it
    pub fn new(system: &RbacSystem, state: &'a AuthState) -> Self {
        let role = state
            .snapshot()
            .filter(|snapshot| snapshot.is_authenticated)
            .and_then(|snapshot| snapshot.role.as_deref())
            .and_then(|raw| system.resolve_role(raw));

        Self { state, role }
    }

    /// Role resolution still in progress
    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .snapshot()
            .is_some_and(|snapshot| snapshot.is_authenticated)
    }

    pub fn is_demo_mode(&self) -> bool {
        self.state
            .snapshot()
            .is_some_and(|snapshot| snapshot.is_demo_mode)
    }

    /// Effective role after unknown-role handling
    pub fn role(&self) -> Option<RoleId> {
        self.role
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|role| role.is_admin())
    }

    pub fn is_host_admin(&self) -> bool {
        self.role == Some(RoleId::HostAdmin)
    }

    /// The two rules that grant access without looking at the table
    fn short_circuit(&self) -> Option<GrantSource> {
        if self.is_demo_mode() {
            return Some(GrantSource::DemoMode);
        }
        if self.is_host_admin() {
            return Some(GrantSource::HostAdmin);
        }
        None
    }

    fn grants(&self) -> &'static [Grant] {
        self.role.map(|role| role.grants()).unwrap_or(&[])
    }

    fn holds(&self, feature: Feature, permission: Permission) -> bool {
        self.grants()
            .iter()
            .any(|grant| grant.matches(feature, permission))
    }

    /// Whether the session may perform `permission` on `feature`
    pub fn has_permission(&self, feature: Feature, permission: Permission) -> bool {
        if self.short_circuit().is_some() {
            return true;
        }
        self.holds(feature, permission) || self.holds(feature, Permission::Manage)
    }

    /// Same as [`has_permission`](Self::has_permission) with the reason attached
    pub fn check_permission_detailed(
        &self,
        feature: Feature,
        permission: Permission,
    ) -> PermissionCheck {
        if let Some(source) = self.short_circuit() {
            return PermissionCheck::granted(source);
        }

        if self.holds(feature, permission) {
            return PermissionCheck::granted(GrantSource::ExplicitGrant);
        }
        if self.holds(feature, Permission::Manage) {
            return PermissionCheck::granted(GrantSource::ManageGrant);
        }

        let reason = if self.is_pending() {
            "Authorization is still being resolved".to_string()
        } else if !self.is_authenticated() {
            "You must be logged in".to_string()
        } else {
            permission_denied_message(feature, permission)
        };
        debug!(
            "Denied {} on {} for role {:?}: {}",
            permission, feature, self.role, reason
        );
        PermissionCheck::denied(reason)
    }

    /// Whether the session holds any grant on `feature`
    pub fn can_access_feature(&self, feature: Feature) -> bool {
        if self.short_circuit().is_some() {
            return true;
        }
        self.grants().iter().any(|grant| grant.feature == feature)
    }

    /// `view` is implied by any stronger right on the feature
    pub fn can_view(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::View)
            || self.has_permission(feature, Permission::Create)
            || self.has_permission(feature, Permission::Update)
    }

    pub fn can_create(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Create)
    }

    pub fn can_update(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Update)
    }

    pub fn can_delete(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Delete)
    }

    pub fn can_approve(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Approve)
    }

    pub fn can_export(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Export)
    }

    pub fn can_import(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Import)
    }

    pub fn can_manage(&self, feature: Feature) -> bool {
        self.has_permission(feature, Permission::Manage)
    }

    /// At least one of the pairs is permitted. Empty input is `false`.
    pub fn has_any_permission(&self, required: &[(Feature, Permission)]) -> bool {
        required
            .iter()
            .any(|(feature, permission)| self.has_permission(*feature, *permission))
    }

    /// Every pair is permitted. Empty input is `true`.
    pub fn has_all_permissions(&self, required: &[(Feature, Permission)]) -> bool {
        required
            .iter()
            .all(|(feature, permission)| self.has_permission(*feature, *permission))
    }

    /// Verbs held on `feature`, in catalog order.
    ///
    /// Returns just `[manage]` under demo mode or for `host_admin`.
    pub fn permission_level(&self, feature: Feature) -> Vec<Permission> {
        if self.short_circuit().is_some() {
            return vec![Permission::Manage];
        }
        Permission::ALL
            .iter()
            .copied()
            .filter(|permission| self.holds(feature, *permission))
            .collect()
    }

    /// Features with at least one grant (the whole catalog for wildcards)
    pub fn accessible_features(&self) -> BTreeSet<Feature> {
        if self.short_circuit().is_some() {
            return Feature::ALL.iter().copied().collect();
        }
        self.grants().iter().map(|grant| grant.feature).collect()
    }
}
