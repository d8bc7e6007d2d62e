//! Helper functions for creating specific error types

use super::types::AccessError;

impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_route_pattern<S: Into<String>>(pattern: S, source: regex::Error) -> Self {
        Self::InvalidRoutePattern {
            pattern: pattern.into(),
            source,
        }
    }
}
