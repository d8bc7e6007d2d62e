//! Error handling integration tests
//!
//! Identifier parsing at the boundary with the untyped backend.

#[cfg(test)]
mod tests {
    use etla_access::{AccessError, Feature, Permission, RoleId, Scope};

    /// Unknown features are typed errors, not silent denials
    #[test]
    fn test_unknown_feature_error() {
        let err = "anything-unmapped".parse::<Feature>().unwrap_err();
        assert!(matches!(err, AccessError::UnknownFeature(ref s) if s == "anything-unmapped"));
        assert_eq!(err.to_string(), "Unknown feature: anything-unmapped");
    }

    /// Permission verbs are case sensitive wire identifiers
    #[test]
    fn test_unknown_permission_error() {
        assert_eq!("export".parse::<Permission>().unwrap(), Permission::Export);
        assert!(matches!(
            "Export".parse::<Permission>(),
            Err(AccessError::UnknownPermission(_))
        ));
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!("tenant".parse::<Scope>().unwrap(), Scope::Tenant);
        assert!(matches!(
            "everyone".parse::<Scope>(),
            Err(AccessError::UnknownScope(ref s)) if s == "everyone"
        ));
    }

    /// Roles parse strictly; fallback is the RBAC system's decision
    #[test]
    fn test_unknown_role_error() {
        assert_eq!("user".parse::<RoleId>().unwrap(), RoleId::User);
        let err = "garbage_unknown_role".parse::<RoleId>().unwrap_err();
        assert!(matches!(err, AccessError::UnknownRole(ref s) if s == "garbage_unknown_role"));
    }
}
