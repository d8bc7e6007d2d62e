//! Access control configuration validators

use super::trait_def::{Validate, validate_each};
use crate::config::models::*;
use regex::Regex;
use tracing::debug;

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        validate_path("default_redirect", &self.default_redirect)?;
        validate_path("login_path", &self.login_path)?;

        for path in &self.public_paths {
            validate_path("public_paths", path)?;
        }

        if !self.public_paths.contains(&self.login_path) {
            return Err(format!(
                "login_path '{}' must be listed in public_paths",
                self.login_path
            ));
        }

        if self.public_paths.contains(&self.default_redirect) {
            return Err(format!(
                "default_redirect '{}' must not be a public path",
                self.default_redirect
            ));
        }

        validate_each("extra_routes", &self.extra_routes)
    }
}

impl Validate for RouteRuleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pattern.is_empty() {
            return Err("Route pattern cannot be empty".to_string());
        }

        if !self.pattern.starts_with('^') {
            return Err(format!(
                "Route pattern '{}' must be anchored with '^'",
                self.pattern
            ));
        }

        Regex::new(&self.pattern)
            .map_err(|e| format!("Route pattern '{}' does not compile: {}", self.pattern, e))?;

        Ok(())
    }
}

fn validate_path(field: &str, path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err(format!("{} cannot be empty", field));
    }

    if !path.starts_with('/') {
        return Err(format!("{} '{}' must start with '/'", field, path));
    }

    Ok(())
}
