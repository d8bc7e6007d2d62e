//! Role definitions and the static role-permission table

use super::catalog::{Feature, Permission, Scope};
use super::types::Grant;
use crate::utils::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known role identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleId {
    /// Host-level administrator, implicit wildcard
    HostAdmin,
    /// Program manager across client projects
    ProgramManager,
    /// Tenant administrator
    ClientAdmin,
    /// Regular tenant user
    ClientUser,
    /// Legacy alias of `client_user`
    User,
}

impl RoleId {
    /// Every role, in declaration order
    pub const ALL: [RoleId; 5] = [
        RoleId::HostAdmin,
        RoleId::ProgramManager,
        RoleId::ClientAdmin,
        RoleId::ClientUser,
        RoleId::User,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleId::HostAdmin => "host_admin",
            RoleId::ProgramManager => "program_manager",
            RoleId::ClientAdmin => "client_admin",
            RoleId::ClientUser => "client_user",
            RoleId::User => "user",
        }
    }

    /// Ordered grant list for this role.
    ///
    /// `host_admin` has no entries: its access comes from the wildcard rule in
    /// the evaluator, not from the table.
    pub fn grants(&self) -> &'static [Grant] {
        match self {
            RoleId::HostAdmin => &[],
            RoleId::ProgramManager => PROGRAM_MANAGER_GRANTS,
            RoleId::ClientAdmin => CLIENT_ADMIN_GRANTS,
            RoleId::ClientUser | RoleId::User => CLIENT_USER_GRANTS,
        }
    }

    /// Tenant or host administrator
    pub fn is_admin(&self) -> bool {
        matches!(self, RoleId::HostAdmin | RoleId::ClientAdmin)
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RoleId {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "host_admin" => Ok(RoleId::HostAdmin),
            "program_manager" => Ok(RoleId::ProgramManager),
            "client_admin" => Ok(RoleId::ClientAdmin),
            "client_user" => Ok(RoleId::ClientUser),
            "user" => Ok(RoleId::User),
            _ => Err(AccessError::UnknownRole(s.to_string())),
        }
    }
}

const fn own(feature: Feature, permission: Permission) -> Grant {
    Grant::new(feature, permission).with_scope(Scope::Own)
}

const fn tenant(feature: Feature, permission: Permission) -> Grant {
    Grant::new(feature, permission)
}

const PROGRAM_MANAGER_GRANTS: &[Grant] = &[
    tenant(Feature::Dashboard, Permission::View),
    // Work requests
    tenant(Feature::WorkRequests, Permission::View),
    tenant(Feature::WorkRequests, Permission::Create),
    tenant(Feature::WorkRequests, Permission::Update),
    tenant(Feature::WorkRequests, Permission::Approve),
    tenant(Feature::ProjectManagement, Permission::Manage),
    // Reporting
    tenant(Feature::Reporting, Permission::View),
    tenant(Feature::Reporting, Permission::Create),
    tenant(Feature::Reporting, Permission::Export),
    tenant(Feature::EtlJobs, Permission::View),
    // Talent acquisition
    tenant(Feature::TalentAcquisition, Permission::View),
    tenant(Feature::Candidates, Permission::View),
    tenant(Feature::JobPostings, Permission::View),
    tenant(Feature::Interviews, Permission::View),
    tenant(Feature::Interviews, Permission::Create),
    tenant(Feature::Interviews, Permission::Update),
    // HR
    tenant(Feature::EmployeeRecords, Permission::View),
    tenant(Feature::Timecards, Permission::View),
    tenant(Feature::Timecards, Permission::Approve),
    tenant(Feature::Documents, Permission::View),
    tenant(Feature::Documents, Permission::Create),
    tenant(Feature::Documents, Permission::Update),
];

const CLIENT_ADMIN_GRANTS: &[Grant] = &[
    tenant(Feature::Dashboard, Permission::View),
    tenant(Feature::WorkRequests, Permission::Manage),
    tenant(Feature::ProjectManagement, Permission::Manage),
    // Reporting
    tenant(Feature::Reporting, Permission::View),
    tenant(Feature::Reporting, Permission::Create),
    tenant(Feature::Reporting, Permission::Export),
    tenant(Feature::EtlJobs, Permission::View),
    // Talent acquisition
    tenant(Feature::TalentAcquisition, Permission::Manage),
    tenant(Feature::Candidates, Permission::Manage),
    tenant(Feature::JobPostings, Permission::Manage),
    tenant(Feature::Interviews, Permission::Manage),
    // HR and payroll
    tenant(Feature::EmployeeRecords, Permission::Manage),
    tenant(Feature::Payroll, Permission::View),
    tenant(Feature::Payroll, Permission::Approve),
    tenant(Feature::Payroll, Permission::Export),
    tenant(Feature::Benefits, Permission::Manage),
    tenant(Feature::Timecards, Permission::View),
    tenant(Feature::Timecards, Permission::Approve),
    tenant(Feature::Timecards, Permission::Export),
    tenant(Feature::Documents, Permission::Manage),
    // Tenant administration
    tenant(Feature::UserManagement, Permission::Manage),
    tenant(Feature::AccessControl, Permission::View),
    tenant(Feature::AuditLogs, Permission::View),
];

const CLIENT_USER_GRANTS: &[Grant] = &[
    tenant(Feature::Dashboard, Permission::View),
    tenant(Feature::WorkRequests, Permission::View),
    own(Feature::WorkRequests, Permission::Create),
    tenant(Feature::ProjectManagement, Permission::View),
    tenant(Feature::Reporting, Permission::View),
    own(Feature::EmployeeRecords, Permission::View),
    own(Feature::Payroll, Permission::View),
    own(Feature::Benefits, Permission::View),
    own(Feature::Timecards, Permission::View),
    own(Feature::Timecards, Permission::Create),
    own(Feature::Timecards, Permission::Update),
    own(Feature::Documents, Permission::View),
    own(Feature::Documents, Permission::Create),
];
