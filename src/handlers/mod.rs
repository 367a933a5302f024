pub mod admin;
pub mod public;

use std::collections::HashMap;

use crate::error::ApiError;

/// Reject when any named field is empty or whitespace-only, reporting all
/// offending fields at once.
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    for (name, value) in fields {
        if value.trim().is_empty() {
            errors.insert((*name).to_string(), "This field is required".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_error(
            "Missing required fields",
            Some(errors),
        ))
    }
}

/// Minimal shape check; full verification happens via the reply address.
pub(crate) fn require_email(email: &str) -> Result<(), ApiError> {
    let looks_valid = email
        .split_once('@')
        .map_or(false, |(local, domain)| !local.is_empty() && domain.contains('.'));

    if looks_valid {
        Ok(())
    } else {
        let mut errors = HashMap::new();
        errors.insert("email".to_string(), "Invalid email address".to_string());
        Err(ApiError::validation_error(
            "Invalid field format",
            Some(errors),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_collects_all_empty_fields() {
        assert!(require_fields(&[("name", "Jane"), ("email", "j@n.example")]).is_ok());

        let err = require_fields(&[("name", "  "), ("subject", "")]).unwrap_err();
        match err {
            ApiError::ValidationError { field_errors: Some(errors), .. } => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_key("name"));
                assert!(errors.contains_key("subject"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn require_email_accepts_plausible_addresses_only() {
        assert!(require_email("jane@norfab.example").is_ok());
        assert!(require_email("jane").is_err());
        assert!(require_email("@norfab.example").is_err());
        assert!(require_email("jane@nodot").is_err());
    }
}
