//! Conditional render gate

use crate::auth::rbac::{Feature, Permission, PermissionEvaluator};

/// What a gate needs before it shows its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    /// A single `(feature, permission)` pair
    Permission(Feature, Permission),
    /// Any grant on the feature
    Feature(Feature),
    /// At least one of the pairs
    AnyOf(Vec<(Feature, Permission)>),
    /// Every pair
    AllOf(Vec<(Feature, Permission)>),
    /// `host_admin` or `client_admin`
    Admin,
    HostAdmin,
}

impl Requirement {
    pub fn is_satisfied(&self, evaluator: &PermissionEvaluator<'_>) -> bool {
        match self {
            Requirement::Permission(feature, permission) => {
                evaluator.has_permission(*feature, *permission)
            }
            Requirement::Feature(feature) => evaluator.can_access_feature(*feature),
            Requirement::AnyOf(pairs) => evaluator.has_any_permission(pairs),
            Requirement::AllOf(pairs) => evaluator.has_all_permissions(pairs),
            Requirement::Admin => evaluator.is_admin(),
            Requirement::HostAdmin => evaluator.is_host_admin(),
        }
    }
}

/// Outcome of a gate for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Loading,
    Allowed,
    Denied,
}

/// Shows content only when the session satisfies a requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    requirement: Requirement,
}

impl PermissionGate {
    pub fn new(feature: Feature, permission: Permission) -> Self {
        Self::requiring(Requirement::Permission(feature, permission))
    }

    pub fn requiring(requirement: Requirement) -> Self {
        Self { requirement }
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    pub fn decide(&self, evaluator: &PermissionEvaluator<'_>) -> GateDecision {
        if evaluator.is_pending() {
            GateDecision::Loading
        } else if self.requirement.is_satisfied(evaluator) {
            GateDecision::Allowed
        } else {
            GateDecision::Denied
        }
    }

    /// Allowed content, or nothing while loading or when denied
    pub fn render<T>(
        &self,
        evaluator: &PermissionEvaluator<'_>,
        allowed: impl FnOnce() -> T,
    ) -> Option<T> {
        match self.decide(evaluator) {
            GateDecision::Allowed => Some(allowed()),
            GateDecision::Loading | GateDecision::Denied => None,
        }
    }

    /// Allowed content, or `fallback` while loading or when denied
    pub fn render_or<T>(
        &self,
        evaluator: &PermissionEvaluator<'_>,
        allowed: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        match self.decide(evaluator) {
            GateDecision::Allowed => allowed(),
            GateDecision::Loading | GateDecision::Denied => fallback(),
        }
    }
}
