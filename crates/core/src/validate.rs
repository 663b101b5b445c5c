//! Input-validation helpers shared by the HTTP handlers.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

/// Lenient email shape check: one `@`, a non-empty local part, and a
/// dotted domain. Not RFC 5322; catches `"not-an-email"` class input.
fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile"))
}

/// Check that an email address is plausibly formed.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid email address: {email}"
        )))
    }
}

/// Collects missing required fields so a single validation error can
/// list all of them.
///
/// ```
/// use crm_core::validate::RequiredFields;
///
/// let result = RequiredFields::new()
///     .text("status", Some("open"))
///     .present("customer_id", &None::<i64>)
///     .check();
/// assert_eq!(
///     result.unwrap_err().to_string(),
///     "Missing required fields: customer_id"
/// );
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a text field to be present and non-blank.
    pub fn text(mut self, name: &'static str, value: Option<&str>) -> Self {
        if value.map(str::trim).unwrap_or("").is_empty() {
            self.missing.push(name);
        }
        self
    }

    /// Require a non-text field to be present.
    pub fn present<T>(mut self, name: &'static str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    /// Fail with a [`CoreError::Validation`] listing every missing field.
    pub fn check(self) -> Result<(), CoreError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            )))
        }
    }
}
