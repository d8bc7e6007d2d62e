//! Tests for error handling

#[cfg(test)]
mod tests {
    use super::super::types::AccessError;

    #[test]
    fn test_config_helper() {
        let error = AccessError::config("missing field");
        assert!(matches!(error, AccessError::Config(msg) if msg == "missing field"));
    }

    #[test]
    fn test_validation_helper() {
        let error = AccessError::validation("bad redirect");
        assert!(matches!(error, AccessError::Validation(msg) if msg == "bad redirect"));
    }

    #[test]
    fn test_invalid_route_pattern_display() {
        let source = regex::Regex::new("^/work-requests/(").unwrap_err();
        let error = AccessError::invalid_route_pattern("^/work-requests/(", source);

        let message = error.to_string();
        assert!(message.starts_with("Invalid route pattern '^/work-requests/('"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_unknown_identifier_messages() {
        assert_eq!(
            AccessError::UnknownFeature("payroll-v2".into()).to_string(),
            "Unknown feature: payroll-v2"
        );
        assert_eq!(
            AccessError::UnknownRole("superuser".into()).to_string(),
            "Unknown role: superuser"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: AccessError = io.into();
        assert!(matches!(error, AccessError::Io(_)));
        assert_eq!(error.to_string(), "IO error: gone");
    }
}
