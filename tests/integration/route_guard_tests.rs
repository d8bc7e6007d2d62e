//! Route guard integration tests
//!
//! Navigation flows through `AccessControl::route_guard` and a live session.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{GuardStateAssertions, assert_missing_permission};
    use crate::common::{SessionFactory, access_control};
    use etla_access::guard::{DenialReason, GuardState, RecoveryAction};
    use etla_access::{AuthSnapshot, RouteView};

    /// Edit page without update on work requests is denied with a templated reason
    #[test]
    fn test_edit_page_denied_for_client_user() {
        let guard = access_control().route_guard();
        let state = guard.decide(
            "/work-requests/abc123/edit",
            &SessionFactory::signed_in("client_user"),
        );

        let denial = state.assert_denied();
        assert_missing_permission(denial, "update", "work requests");
        assert_eq!(
            denial.message,
            "You don't have permission to update work requests"
        );
        assert_eq!(
            denial.actions[0],
            RecoveryAction::Redirect("/dashboard".to_string())
        );
    }

    /// Unmapped paths render the page
    #[test]
    fn test_unrouted_page_is_authorized() {
        let guard = access_control().route_guard();
        guard
            .decide(
                "/some/future/unrouted-page",
                &SessionFactory::signed_in("client_user"),
            )
            .assert_authorized();
    }

    /// Static routes enforce their requirement per role
    #[test]
    fn test_static_route_requirements() {
        let guard = access_control().route_guard();

        let denial = guard
            .decide("/payroll/export", &SessionFactory::signed_in("client_user"))
            .assert_denied()
            .clone();
        assert_missing_permission(&denial, "export", "payroll");

        guard
            .decide("/payroll/export", &SessionFactory::signed_in("client_admin"))
            .assert_authorized();
    }

    /// Detail pages with an identifier segment use dynamic patterns
    #[test]
    fn test_dynamic_detail_routes() {
        let guard = access_control().route_guard();
        let client = SessionFactory::signed_in("client_user");

        guard.decide("/work-requests/abc123", &client).assert_authorized();
        guard.decide("/work-requests/abc123/", &client).assert_authorized();

        let denial = guard
            .decide("/talent/candidates/c-42", &client)
            .assert_denied()
            .clone();
        assert_missing_permission(&denial, "view", "candidates");
    }

    /// Admin-only and host-admin-only sections
    #[test]
    fn test_admin_sections() {
        let guard = access_control().route_guard();

        let denial = guard
            .decide("/access-control", &SessionFactory::signed_in("program_manager"))
            .assert_denied()
            .clone();
        assert_eq!(denial.reason, DenialReason::AdminRequired);

        let denial = guard
            .decide("/system-settings", &SessionFactory::signed_in("client_admin"))
            .assert_denied()
            .clone();
        assert_eq!(denial.reason, DenialReason::HostAdminRequired);

        guard
            .decide("/system-settings", &SessionFactory::signed_in("host_admin"))
            .assert_authorized();
    }

    /// Demo mode does not make a user an administrator
    #[test]
    fn test_demo_mode_does_not_open_admin_sections() {
        let guard = access_control().route_guard();
        let demo = SessionFactory::demo("client_user");

        guard.decide("/payroll/export", &demo).assert_authorized();
        let denial = guard.decide("/admin", &demo).assert_denied().clone();
        assert_eq!(denial.reason, DenialReason::AdminRequired);
    }

    /// Full flow: pending, login, role change, logout
    #[test]
    fn test_navigation_lifecycle() {
        let access = access_control();
        let mut guard = access.route_guard();

        guard.navigate("/reporting/builder");
        assert_eq!(guard.render(&access.session().load(), || "builder"), RouteView::Loading);

        access
            .session()
            .resolve(AuthSnapshot::authenticated("client_user"));
        match guard.render(&access.session().load(), || "builder") {
            RouteView::Denied(denial) => assert_missing_permission(&denial, "create", "reporting"),
            other => panic!("expected denial, got {:?}", other),
        }

        access.session().begin_resolution();
        assert_eq!(guard.sync(&access.session().load()), &GuardState::Pending);

        access
            .session()
            .resolve(AuthSnapshot::authenticated("program_manager"));
        assert_eq!(
            guard.render(&access.session().load(), || "builder"),
            RouteView::Page("builder")
        );

        access.session().logout();
        guard.navigate("/login");
        assert_eq!(
            guard.render(&access.session().load(), || "login form"),
            RouteView::Page("login form")
        );
    }

    /// Query strings and fragments do not change the decision
    #[test]
    fn test_query_strings_are_ignored() {
        let guard = access_control().route_guard();
        let state = guard.decide(
            "/work-requests/abc123/edit?tab=notes#top",
            &SessionFactory::signed_in("client_user"),
        );
        assert_eq!(state.assert_denied().path, "/work-requests/abc123/edit");
    }
}
