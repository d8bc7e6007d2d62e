//! Route requirement table
//!
//! Static routes are matched exactly; dynamic routes are regular expressions
//! tried in order after static routes, first match wins. Configured patterns
//! come before the built-in ones so they can override them. The dynamic list
//! stays a `Vec` because overlapping patterns rely on order.

use crate::auth::rbac::{Feature, Permission};
use crate::config::AccessConfig;
use crate::utils::error::{AccessError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A `(feature, permission)` pair required to open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RouteRequirement {
    pub feature: Feature,
    pub permission: Permission,
}

impl RouteRequirement {
    pub const fn new(feature: Feature, permission: Permission) -> Self {
        Self {
            feature,
            permission,
        }
    }
}

/// How a path matched the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// Exact static path
    Static(RouteRequirement),
    /// Dynamic pattern at `index` in declaration order
    Dynamic {
        index: usize,
        pattern: String,
        requirement: RouteRequirement,
    },
}

impl RouteMatch {
    pub fn requirement(&self) -> RouteRequirement {
        match self {
            RouteMatch::Static(requirement) => *requirement,
            RouteMatch::Dynamic { requirement, .. } => *requirement,
        }
    }
}

#[derive(Debug, Clone)]
struct DynamicRoute {
    pattern: Regex,
    requirement: RouteRequirement,
}

/// Paths, patterns and redirect targets the route guard works from
#[derive(Debug, Clone)]
pub struct RouteTable {
    login_path: String,
    default_redirect: String,
    public_paths: Vec<String>,
    admin_paths: Vec<String>,
    host_admin_paths: Vec<String>,
    static_routes: HashMap<String, RouteRequirement>,
    dynamic_routes: Vec<DynamicRoute>,
    log_unmapped: bool,
}

const ADMIN_PATHS: &[&str] = &["/admin", "/user-management", "/access-control"];

const HOST_ADMIN_PATHS: &[&str] = &["/host", "/tenant-management", "/system-settings"];

const STATIC_ROUTES: &[(&str, Feature, Permission)] = &[
    ("/dashboard", Feature::Dashboard, Permission::View),
    ("/work-requests", Feature::WorkRequests, Permission::View),
    ("/work-requests/new", Feature::WorkRequests, Permission::Create),
    ("/project-management", Feature::ProjectManagement, Permission::View),
    ("/project-management/new", Feature::ProjectManagement, Permission::Create),
    ("/reporting", Feature::Reporting, Permission::View),
    ("/reporting/builder", Feature::Reporting, Permission::Create),
    ("/etl/jobs", Feature::EtlJobs, Permission::View),
    ("/talent", Feature::TalentAcquisition, Permission::View),
    ("/talent/candidates", Feature::Candidates, Permission::View),
    ("/talent/jobs", Feature::JobPostings, Permission::View),
    ("/talent/jobs/new", Feature::JobPostings, Permission::Create),
    ("/talent/interviews", Feature::Interviews, Permission::View),
    ("/employees", Feature::EmployeeRecords, Permission::View),
    ("/payroll", Feature::Payroll, Permission::View),
    ("/payroll/export", Feature::Payroll, Permission::Export),
    ("/benefits", Feature::Benefits, Permission::View),
    ("/timecards", Feature::Timecards, Permission::View),
    ("/documents", Feature::Documents, Permission::View),
    ("/documents/upload", Feature::Documents, Permission::Create),
    ("/audit-logs", Feature::AuditLogs, Permission::View),
    ("/user-management", Feature::UserManagement, Permission::View),
    ("/access-control", Feature::AccessControl, Permission::View),
];

// Detail pages after their edit/approve variants.
const DYNAMIC_ROUTES: &[(&str, Feature, Permission)] = &[
    (r"^/work-requests/[^/]+/edit$", Feature::WorkRequests, Permission::Update),
    (r"^/work-requests/[^/]+/approve$", Feature::WorkRequests, Permission::Approve),
    (r"^/work-requests/[^/]+$", Feature::WorkRequests, Permission::View),
    (r"^/project-management/[^/]+/edit$", Feature::ProjectManagement, Permission::Update),
    (r"^/project-management/[^/]+$", Feature::ProjectManagement, Permission::View),
    (r"^/talent/candidates/[^/]+/edit$", Feature::Candidates, Permission::Update),
    (r"^/talent/candidates/[^/]+$", Feature::Candidates, Permission::View),
    (r"^/talent/jobs/[^/]+/edit$", Feature::JobPostings, Permission::Update),
    (r"^/talent/jobs/[^/]+$", Feature::JobPostings, Permission::View),
    (r"^/employees/[^/]+/edit$", Feature::EmployeeRecords, Permission::Update),
    (r"^/employees/[^/]+$", Feature::EmployeeRecords, Permission::View),
    (r"^/payroll/runs/[^/]+$", Feature::Payroll, Permission::View),
    (r"^/documents/[^/]+$", Feature::Documents, Permission::View),
];

impl RouteTable {
    /// Table with no routes at all; every authenticated path is allowed
    pub fn empty(login_path: impl Into<String>, default_redirect: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            default_redirect: default_redirect.into(),
            public_paths: Vec::new(),
            admin_paths: Vec::new(),
            host_admin_paths: Vec::new(),
            static_routes: HashMap::new(),
            dynamic_routes: Vec::new(),
            log_unmapped: false,
        }
    }

    /// Built-in platform routes plus configured extras
    pub fn from_config(config: &AccessConfig) -> Result<Self> {
        let mut table = Self::empty(&config.login_path, &config.default_redirect);
        table.log_unmapped = config.log_unmapped_routes;

        for path in &config.public_paths {
            table = table.with_public_path(path);
        }
        for path in ADMIN_PATHS {
            table = table.with_admin_path(*path);
        }
        for path in HOST_ADMIN_PATHS {
            table = table.with_host_admin_path(*path);
        }
        for (path, feature, permission) in STATIC_ROUTES {
            table = table.with_static(*path, *feature, *permission);
        }
        for rule in &config.extra_routes {
            if let Some((_, feature, permission)) = DYNAMIC_ROUTES
                .iter()
                .find(|(pattern, _, _)| *pattern == rule.pattern)
            {
                warn!(
                    "Configured route {} overrides built-in {}:{} with {}:{}",
                    rule.pattern, feature, permission, rule.feature, rule.permission
                );
            }
            table = table.with_pattern(&rule.pattern, rule.feature, rule.permission)?;
        }
        for (pattern, feature, permission) in DYNAMIC_ROUTES {
            table = table.with_pattern(pattern, *feature, *permission)?;
        }

        debug!(
            "Route table built: {} static routes, {} dynamic patterns",
            table.static_routes.len(),
            table.dynamic_routes.len()
        );
        Ok(table)
    }

    pub fn with_public_path(mut self, path: impl Into<String>) -> Self {
        self.public_paths.push(path.into());
        self
    }

    pub fn with_admin_path(mut self, path: impl Into<String>) -> Self {
        self.admin_paths.push(path.into());
        self
    }

    pub fn with_host_admin_path(mut self, path: impl Into<String>) -> Self {
        self.host_admin_paths.push(path.into());
        self
    }

    pub fn with_static(
        mut self,
        path: impl Into<String>,
        feature: Feature,
        permission: Permission,
    ) -> Self {
        self.static_routes
            .insert(path.into(), RouteRequirement::new(feature, permission));
        self
    }

    /// Append a dynamic pattern; it is tried after every earlier one
    pub fn with_pattern(
        mut self,
        pattern: &str,
        feature: Feature,
        permission: Permission,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| AccessError::invalid_route_pattern(pattern, e))?;
        self.dynamic_routes.push(DynamicRoute {
            pattern: regex,
            requirement: RouteRequirement::new(feature, permission),
        });
        Ok(self)
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn default_redirect(&self) -> &str {
        &self.default_redirect
    }

    pub fn logs_unmapped(&self) -> bool {
        self.log_unmapped
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|prefix| is_under(path, prefix))
    }

    pub fn is_admin_only(&self, path: &str) -> bool {
        self.admin_paths.iter().any(|prefix| is_under(path, prefix))
    }

    pub fn is_host_admin_only(&self, path: &str) -> bool {
        self.host_admin_paths.iter().any(|prefix| is_under(path, prefix))
    }

    /// Requirement for `path`: exact static entry first, then the first
    /// matching dynamic pattern. `None` means the route is unmapped.
    pub fn requirement_for(&self, path: &str) -> Option<RouteMatch> {
        if let Some(requirement) = self.static_routes.get(path) {
            return Some(RouteMatch::Static(*requirement));
        }

        self.dynamic_routes
            .iter()
            .enumerate()
            .find(|(_, route)| route.pattern.is_match(path))
            .map(|(index, route)| RouteMatch::Dynamic {
                index,
                pattern: route.pattern.as_str().to_string(),
                requirement: route.requirement,
            })
    }
}

/// Strip query string, fragment and trailing slash
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// `path` equals `prefix` or lies below it
fn is_under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
