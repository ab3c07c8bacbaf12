//! Field validators.
//!
//! Validators see the text view of a field value (see
//! [`FieldValue::as_text`](crate::FieldValue::as_text)). The required check
//! runs before them; optional fields left empty skip them entirely.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern compiles")
});

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("url pattern compiles"));

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Message reported for a required field left blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthBound {
    Min(usize),
    Max(usize),
}

/// Validator bounding the number of characters.
#[derive(Debug, Clone)]
pub struct LengthValidator {
    bound: LengthBound,
    message: String,
}

impl LengthValidator {
    /// At least `min` characters.
    pub fn min(min: usize) -> Self {
        Self {
            bound: LengthBound::Min(min),
            message: format!("Ensure this value has at least {min} characters."),
        }
    }

    /// At most `max` characters.
    pub fn max(max: usize) -> Self {
        Self {
            bound: LengthBound::Max(max),
            message: format!("Ensure this value has at most {max} characters."),
        }
    }

    /// Replaces the error message.
    #[must_use]
    pub fn message_text(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Validator for LengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let len = value.chars().count();
        let ok = match self.bound {
            LengthBound::Min(min) => len >= min,
            LengthBound::Max(max) => len <= max,
        };
        if ok {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator matching the whole value against a regular expression.
#[derive(Debug, Clone)]
pub struct PatternValidator {
    pattern: Regex,
    message: String,
}

impl PatternValidator {
    /// Compiles `pattern` into a validator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    /// Email addresses.
    pub fn email() -> Self {
        Self {
            pattern: EMAIL_PATTERN.clone(),
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// `http://` and `https://` URLs.
    pub fn url() -> Self {
        Self {
            pattern: URL_PATTERN.clone(),
            message: "Enter a valid URL.".to_string(),
        }
    }
}

impl Validator for PatternValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator backed by a caller-supplied predicate.
#[derive(Clone)]
pub struct PredicateValidator {
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    message: String,
}

impl PredicateValidator {
    /// Accepts the values for which `predicate` holds.
    pub fn new(
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }
}

impl fmt::Debug for PredicateValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateValidator")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Validator for PredicateValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if (self.predicate)(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        let max = LengthValidator::max(5);
        assert!(max.validate("hello").is_ok());
        assert!(max.validate("hello world").is_err());

        let min = LengthValidator::min(3);
        assert!(min.validate("abc").is_ok());
        assert!(min.validate("ab").is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        let v = LengthValidator::max(4);
        assert!(v.validate("Versão").is_err());
        assert!(v.validate("ação").is_ok());
    }

    #[test]
    fn test_length_custom_message() {
        let v = LengthValidator::min(2).message_text("Nome muito curto.");
        assert_eq!(v.validate("a"), Err("Nome muito curto.".to_string()));
    }

    #[test]
    fn test_email_pattern() {
        let v = PatternValidator::email();
        assert!(v.validate("user@example.com").is_ok());
        assert!(v.validate("user.name@domain.co.uk").is_ok());
        assert!(v.validate("invalid").is_err());
        assert!(v.validate("@example.com").is_err());
    }

    #[test]
    fn test_url_pattern() {
        let v = PatternValidator::url();
        assert!(v.validate("https://example.com").is_ok());
        assert!(v.validate("http://localhost:3001/docker").is_ok());
        assert!(v.validate("example.com").is_err());
    }

    #[test]
    fn test_custom_pattern() {
        let v = PatternValidator::new(r"^\d+\.\d+$", "Enter a version like 18.0.").unwrap();
        assert!(v.validate("18.0").is_ok());
        assert!(v.validate("latest").is_err());
        assert!(PatternValidator::new("(", "broken").is_err());
    }

    #[test]
    fn test_predicate_validator() {
        let v = PredicateValidator::new(|value| !value.contains(' '), "Spaces are not allowed.");
        assert!(v.validate("docker-app").is_ok());
        assert_eq!(
            v.validate("docker app"),
            Err("Spaces are not allowed.".to_string())
        );
        assert_eq!(v.message(), "Spaces are not allowed.");
    }
}
