//! Access control configuration

use crate::auth::rbac::{Feature, Permission};
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// What to do with a role string the role table does not know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRolePolicy {
    /// Treat the user as `client_user` (fail open to minimal access)
    #[default]
    Fallback,
    /// Grant nothing
    Deny,
}

impl fmt::Display for UnknownRolePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownRolePolicy::Fallback => write!(f, "fallback"),
            UnknownRolePolicy::Deny => write!(f, "deny"),
        }
    }
}

impl FromStr for UnknownRolePolicy {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fallback" => Ok(UnknownRolePolicy::Fallback),
            "deny" => Ok(UnknownRolePolicy::Deny),
            _ => Err(AccessError::config(format!(
                "Invalid unknown role policy: {}",
                s
            ))),
        }
    }
}

/// Extra dynamic route requirement, tried before the built-in patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRuleConfig {
    /// Regular expression matched against the full path
    pub pattern: String,
    pub feature: Feature,
    pub permission: Permission,
}

/// Access control configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Handling of unknown role strings
    #[serde(default)]
    pub unknown_role_policy: UnknownRolePolicy,
    /// Where denial screens send the user
    #[serde(default = "default_redirect")]
    pub default_redirect: String,
    /// Login page path
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Paths reachable without a session
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
    /// Log navigations that match no route entry
    #[serde(default = "default_log_unmapped_routes")]
    pub log_unmapped_routes: bool,
    /// Additional dynamic route rules
    #[serde(default)]
    pub extra_routes: Vec<RouteRuleConfig>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            unknown_role_policy: UnknownRolePolicy::default(),
            default_redirect: default_redirect(),
            login_path: default_login_path(),
            public_paths: default_public_paths(),
            log_unmapped_routes: default_log_unmapped_routes(),
            extra_routes: Vec::new(),
        }
    }
}

impl AccessConfig {
    /// Load from `ETLA_*` environment variables, defaults for the rest
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let mut config = Self::default();

        if let Some(policy) = get("ETLA_UNKNOWN_ROLE_POLICY") {
            config.unknown_role_policy = policy.parse()?;
        }
        if let Some(redirect) = get("ETLA_DEFAULT_REDIRECT") {
            config.default_redirect = redirect;
        }
        if let Some(login_path) = get("ETLA_LOGIN_PATH") {
            config.login_path = login_path;
        }
        if let Some(paths) = get("ETLA_PUBLIC_PATHS") {
            config.public_paths = paths
                .split(',')
                .map(str::trim)
                .filter(|path| !path.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(value) = get("ETLA_LOG_UNMAPPED_ROUTES") {
            config.log_unmapped_routes = match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => {
                    return Err(AccessError::config(format!(
                        "Invalid boolean for ETLA_LOG_UNMAPPED_ROUTES: {}",
                        value
                    )));
                }
            };
        }

        Ok(config)
    }

    /// Merge access configurations (other takes precedence on non-defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.unknown_role_policy != UnknownRolePolicy::default() {
            self.unknown_role_policy = other.unknown_role_policy;
        }
        if other.default_redirect != default_redirect() {
            self.default_redirect = other.default_redirect;
        }
        if other.login_path != default_login_path() {
            self.login_path = other.login_path;
        }
        if other.public_paths != default_public_paths() {
            self.public_paths = other.public_paths;
        }
        if other.log_unmapped_routes != default_log_unmapped_routes() {
            self.log_unmapped_routes = other.log_unmapped_routes;
        }
        self.extra_routes.extend(other.extra_routes);
        self
    }
}

fn default_redirect() -> String {
    "/dashboard".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_public_paths() -> Vec<String> {
    vec![
        "/login".to_string(),
        "/forgot-password".to_string(),
        "/reset-password".to_string(),
    ]
}

fn default_log_unmapped_routes() -> bool {
    cfg!(debug_assertions)
}

/// Warn about permissive settings
pub fn warn_permissive_config(config: &AccessConfig) {
    if config.unknown_role_policy == UnknownRolePolicy::Fallback {
        warn!("Unknown roles fall back to client_user grants (unknown_role_policy: fallback)");
    }
}
