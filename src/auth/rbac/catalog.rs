//! Permission catalog
//!
//! Closed sets of features, permission verbs and grant scopes. Call sites and
//! role tables refer to these enums so a misspelled identifier is a compile
//! error instead of a lookup that silently returns `false`.

use crate::utils::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business capability area subject to access control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Landing dashboard
    Dashboard,
    /// Work request intake and tracking
    WorkRequests,
    /// Projects, milestones and resourcing
    ProjectManagement,
    /// Report builder and saved reports
    Reporting,
    /// ETL job monitoring
    EtlJobs,
    /// Talent acquisition pipeline
    TalentAcquisition,
    /// Candidate profiles
    Candidates,
    /// Job postings
    JobPostings,
    /// Interview scheduling
    Interviews,
    /// Employee records
    EmployeeRecords,
    /// Payroll runs and paystubs
    Payroll,
    /// Benefit plans and enrollment
    Benefits,
    /// Timecards
    Timecards,
    /// Document storage
    Documents,
    /// Tenant user administration
    UserManagement,
    /// Role and permission administration
    AccessControl,
    /// Tenant provisioning (host level)
    TenantManagement,
    /// Audit trail
    AuditLogs,
    /// Platform settings
    SystemSettings,
}

impl Feature {
    /// Every feature, in declaration order
    pub const ALL: [Feature; 19] = [
        Feature::Dashboard,
        Feature::WorkRequests,
        Feature::ProjectManagement,
        Feature::Reporting,
        Feature::EtlJobs,
        Feature::TalentAcquisition,
        Feature::Candidates,
        Feature::JobPostings,
        Feature::Interviews,
        Feature::EmployeeRecords,
        Feature::Payroll,
        Feature::Benefits,
        Feature::Timecards,
        Feature::Documents,
        Feature::UserManagement,
        Feature::AccessControl,
        Feature::TenantManagement,
        Feature::AuditLogs,
        Feature::SystemSettings,
    ];

    /// Wire identifier, e.g. `work-requests`
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Dashboard => "dashboard",
            Feature::WorkRequests => "work-requests",
            Feature::ProjectManagement => "project-management",
            Feature::Reporting => "reporting",
            Feature::EtlJobs => "etl-jobs",
            Feature::TalentAcquisition => "talent-acquisition",
            Feature::Candidates => "candidates",
            Feature::JobPostings => "job-postings",
            Feature::Interviews => "interviews",
            Feature::EmployeeRecords => "employee-records",
            Feature::Payroll => "payroll",
            Feature::Benefits => "benefits",
            Feature::Timecards => "timecards",
            Feature::Documents => "documents",
            Feature::UserManagement => "user-management",
            Feature::AccessControl => "access-control",
            Feature::TenantManagement => "tenant-management",
            Feature::AuditLogs => "audit-logs",
            Feature::SystemSettings => "system-settings",
        }
    }

    /// Human readable name used in denial messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::EtlJobs => "ETL jobs",
            Feature::Dashboard => "dashboard",
            Feature::WorkRequests => "work requests",
            Feature::ProjectManagement => "project management",
            Feature::Reporting => "reporting",
            Feature::TalentAcquisition => "talent acquisition",
            Feature::Candidates => "candidates",
            Feature::JobPostings => "job postings",
            Feature::Interviews => "interviews",
            Feature::EmployeeRecords => "employee records",
            Feature::Payroll => "payroll",
            Feature::Benefits => "benefits",
            Feature::Timecards => "timecards",
            Feature::Documents => "documents",
            Feature::UserManagement => "user management",
            Feature::AccessControl => "access control",
            Feature::TenantManagement => "tenant management",
            Feature::AuditLogs => "audit logs",
            Feature::SystemSettings => "system settings",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .find(|feature| feature.as_str() == s)
            .copied()
            .ok_or_else(|| AccessError::UnknownFeature(s.to_string()))
    }
}

/// Permission verb checked against a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Create,
    Update,
    Delete,
    /// Superset verb: satisfies every other verb on the same feature
    Manage,
    Approve,
    Export,
    Import,
}

impl Permission {
    /// Every verb, in declaration order
    pub const ALL: [Permission; 8] = [
        Permission::View,
        Permission::Create,
        Permission::Update,
        Permission::Delete,
        Permission::Manage,
        Permission::Approve,
        Permission::Export,
        Permission::Import,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::View => "view",
            Permission::Create => "create",
            Permission::Update => "update",
            Permission::Delete => "delete",
            Permission::Manage => "manage",
            Permission::Approve => "approve",
            Permission::Export => "export",
            Permission::Import => "import",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .find(|permission| permission.as_str() == s)
            .copied()
            .ok_or_else(|| AccessError::UnknownPermission(s.to_string()))
    }
}

/// Breadth of a grant. Recorded on every grant but not enforced at check time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The user's own records only
    Own,
    /// All records within the current tenant
    Tenant,
    /// Cross-tenant, host level
    All,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Own => "own",
            Scope::Tenant => "tenant",
            Scope::All => "all",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "own" => Ok(Scope::Own),
            "tenant" => Ok(Scope::Tenant),
            "all" => Ok(Scope::All),
            _ => Err(AccessError::UnknownScope(s.to_string())),
        }
    }
}
