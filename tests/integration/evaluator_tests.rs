//! Evaluator integration tests
//!
//! Drives permission queries through `AccessControl` and its session store,
//! the way page code does.

#[cfg(test)]
mod tests {
    use crate::common::{SessionFactory, access_control};
    use etla_access::{Feature, Permission, RoleId};

    /// client_user holds create on work requests, not delete
    #[test]
    fn test_client_user_work_requests() {
        let access = access_control();
        access
            .session()
            .resolve(etla_access::AuthSnapshot::authenticated("client_user"));

        assert!(access.has_permission(Feature::WorkRequests, Permission::Create));
        assert!(!access.has_permission(Feature::WorkRequests, Permission::Delete));
    }

    /// host_admin passes every check, on every feature
    #[test]
    fn test_host_admin_wildcard() {
        let access = access_control();
        let state = SessionFactory::signed_in("host_admin");
        let evaluator = access.rbac().evaluator(&state);

        assert!(evaluator.has_permission(Feature::SystemSettings, Permission::Delete));
        assert!(evaluator.can_import(Feature::Payroll));
    }

    /// Unknown roles fall back to client_user, which can view reporting
    #[test]
    fn test_unknown_role_reporting_access() {
        let access = access_control();
        let state = SessionFactory::signed_in("garbage_unknown_role");
        let evaluator = access.rbac().evaluator(&state);

        assert!(evaluator.can_access_feature(Feature::Reporting));
        assert_eq!(evaluator.role(), Some(RoleId::ClientUser));
    }

    /// Demo mode overrides the table for a client_user
    #[test]
    fn test_demo_mode_tenant_management() {
        let access = access_control();
        let state = SessionFactory::demo("client_user");
        let evaluator = access.rbac().evaluator(&state);

        assert!(evaluator.has_permission(Feature::TenantManagement, Permission::Manage));
    }

    /// Demo toggles apply on the next check with no stale cache
    #[test]
    fn test_demo_toggle_reverts_immediately() {
        let access = access_control();
        access
            .session()
            .resolve(etla_access::AuthSnapshot::authenticated("client_user"));

        assert!(!access.has_permission(Feature::Payroll, Permission::Approve));
        access.session().set_demo_mode(true);
        assert!(access.has_permission(Feature::Payroll, Permission::Approve));
        assert!(access.with_evaluator(|e| e.can_access_feature(Feature::AuditLogs)));
        access.session().set_demo_mode(false);
        assert!(!access.has_permission(Feature::Payroll, Permission::Approve));
        assert!(!access.with_evaluator(|e| e.can_access_feature(Feature::AuditLogs)));
    }

    /// Checks before resolution and after logout deny silently
    #[test]
    fn test_pending_and_logged_out_sessions_deny() {
        let access = access_control();
        assert!(!access.has_permission(Feature::Dashboard, Permission::View));

        access
            .session()
            .resolve(etla_access::AuthSnapshot::authenticated("client_admin"));
        assert!(access.with_evaluator(|e| e.is_admin()));

        access.session().logout();
        assert!(!access.has_permission(Feature::Dashboard, Permission::View));
        assert!(!access.with_evaluator(|e| e.is_admin()));
    }

    /// Each role only reaches its own features
    #[test]
    fn test_accessible_features_by_role() {
        let access = access_control();

        let pm = SessionFactory::signed_in("program_manager");
        let pm_features = access.rbac().evaluator(&pm).accessible_features();
        assert!(pm_features.contains(&Feature::EtlJobs));
        assert!(!pm_features.contains(&Feature::Payroll));

        let pending = SessionFactory::pending();
        assert!(access.rbac().evaluator(&pending).accessible_features().is_empty());

        let anonymous = SessionFactory::anonymous();
        assert!(access.rbac().evaluator(&anonymous).accessible_features().is_empty());
    }

    /// The legacy `user` role is indistinguishable from client_user
    #[test]
    fn test_legacy_user_alias() {
        let access = access_control();
        let legacy = SessionFactory::signed_in("user");
        let client = SessionFactory::signed_in("client_user");
        let legacy = access.rbac().evaluator(&legacy);
        let client = access.rbac().evaluator(&client);

        for feature in Feature::ALL {
            assert_eq!(legacy.permission_level(feature), client.permission_level(feature));
            assert_eq!(legacy.can_view(feature), client.can_view(feature));
        }
    }
}
