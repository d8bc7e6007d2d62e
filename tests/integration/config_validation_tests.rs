//! Configuration integration tests
//!
//! Configuration flows from YAML into the access control system.

#[cfg(test)]
mod tests {
    use crate::common::SessionFactory;
    use etla_access::config::{AccessConfig, UnknownRolePolicy};
    use etla_access::{AccessControl, Config, Feature, Permission};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// The deny policy locks out unknown roles end to end
    #[tokio::test]
    async fn test_deny_policy_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"access:\n  unknown_role_policy: deny\n").unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let access = AccessControl::new(config.access).unwrap();
        let state = SessionFactory::signed_in("garbage_unknown_role");

        assert_eq!(access.rbac().unknown_role_policy(), UnknownRolePolicy::Deny);
        assert!(!access.rbac().evaluator(&state).can_access_feature(Feature::Reporting));
    }

    /// Extra routes from configuration are enforced by the guard
    #[tokio::test]
    async fn test_extra_routes_from_file() {
        let yaml = r#"
access:
  default_redirect: "/home"
  extra_routes:
    - pattern: "^/benefits/plans/[^/]+/edit$"
      feature: benefits
      permission: update
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let access = AccessControl::new(config.access).unwrap();
        let guard = access.route_guard();

        let state = guard.decide(
            "/benefits/plans/dental/edit",
            &SessionFactory::signed_in("client_user"),
        );
        match state {
            etla_access::guard::GuardState::Unauthorized(denial) => {
                assert_eq!(
                    denial.reason,
                    etla_access::guard::DenialReason::MissingPermission {
                        feature: Feature::Benefits,
                        permission: Permission::Update,
                    }
                );
                assert_eq!(
                    denial.actions[0],
                    etla_access::guard::RecoveryAction::Redirect("/home".to_string())
                );
            }
            other => panic!("expected denial, got {:?}", other),
        }
    }

    /// Invalid configurations are rejected before any system is built
    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(Config::from_yaml("access:\n  unknown_role_policy: maybe\n").is_err());
        assert!(Config::from_yaml("access:\n  login_path: login\n").is_err());
    }

    /// A route pattern that bypassed validation still fails system construction
    #[test]
    fn test_access_control_rejects_bad_pattern() {
        let config = AccessConfig {
            extra_routes: vec![etla_access::config::RouteRuleConfig {
                pattern: "^/broken/(".to_string(),
                feature: Feature::Documents,
                permission: Permission::View,
            }],
            ..Default::default()
        };

        let err = AccessControl::new(config).unwrap_err();
        assert!(matches!(
            err,
            etla_access::AccessError::InvalidRoutePattern { .. }
        ));
    }
}
