//! Custom test assertions
//!
//! Domain-specific assertions for route guard outcomes.

use etla_access::guard::{Denial, DenialReason, GuardState, RecoveryAction};

/// Assertions for route guard states
pub trait GuardStateAssertions {
    /// Assert the route was authorized
    fn assert_authorized(&self);

    /// Assert the route was denied and return the denial
    fn assert_denied(&self) -> &Denial;
}

impl GuardStateAssertions for GuardState {
    fn assert_authorized(&self) {
        assert_eq!(
            self,
            &GuardState::Authorized,
            "Expected route to be authorized"
        );
    }

    fn assert_denied(&self) -> &Denial {
        match self {
            GuardState::Unauthorized(denial) => {
                assert_eq!(
                    denial.actions.len(),
                    2,
                    "Denials must offer two recovery actions"
                );
                assert_eq!(denial.actions[1], RecoveryAction::GoBack);
                assert!(!denial.message.is_empty(), "Denial message must not be empty");
                denial
            }
            other => panic!("Expected route to be denied, got {:?}", other),
        }
    }
}

/// Assert a denial is a missing-permission denial naming verb and feature
pub fn assert_missing_permission(denial: &Denial, verb: &str, feature_name: &str) {
    assert!(
        matches!(denial.reason, DenialReason::MissingPermission { .. }),
        "Expected missing permission denial, got {:?}",
        denial.reason
    );
    assert!(
        denial.message.contains(verb),
        "Denial message '{}' does not mention '{}'",
        denial.message,
        verb
    );
    assert!(
        denial.message.contains(feature_name),
        "Denial message '{}' does not mention '{}'",
        denial.message,
        feature_name
    );
}
