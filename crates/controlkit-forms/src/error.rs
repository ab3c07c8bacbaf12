//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A key of the form has no field descriptor.
    #[error("no descriptor for field: {0}")]
    MissingField(String),

    /// A key is described more than once.
    #[error("field described twice: {0}")]
    DuplicateField(String),

    /// A field name does not belong to the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A key reports an index that does not match its position in the key list.
    #[error("field {field} reports index {found}, expected {expected}")]
    InconsistentKey {
        field: String,
        expected: usize,
        found: usize,
    },

    /// A field declares a dependency on itself.
    #[error("field {0} cannot depend on itself")]
    SelfDependency(String),

    /// The dependency edges form a cycle.
    #[error("dependency cycle: {}", .0.join(" -> "))]
    DependencyCycle(Vec<String>),

    /// Invalid field value.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// The field is disabled and cannot be edited.
    #[error("field {0} is disabled")]
    FieldDisabled(String),

    /// The operation does not apply to the field's control.
    #[error("cannot {operation} on field {field} ({control} control)")]
    ControlMismatch {
        field: String,
        control: String,
        operation: &'static str,
    },

    /// The option is not one of the field's configured options.
    #[error("unknown option {option:?} for field {field}")]
    UnknownOption { field: String, option: String },

    /// Submitted values could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Replaces the errors of a field. An empty list clears the field.
    pub fn set(&mut self, field: &str, messages: Vec<String>) {
        if messages.is_empty() {
            self.errors.remove(field);
        } else {
            self.errors.insert(field.to_string(), messages);
        }
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns whether the field has errors.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut errors = ValidationErrors::new();
        errors.add("nome", "This field is required.");
        errors.add("nome", "Too short.");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("nome").map(Vec::len), Some(2));
        assert!(errors.contains("nome"));
        assert!(!errors.contains("email"));
    }

    #[test]
    fn test_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.add("nome", "This field is required.");
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({"nome": ["This field is required."]})
        );
    }

    #[test]
    fn test_set_empty_clears_field() {
        let mut errors = ValidationErrors::new();
        errors.add("nome", "This field is required.");
        errors.set("nome", Vec::new());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_lists_every_message() {
        let mut errors = ValidationErrors::new();
        errors.add("b", "second");
        errors.add("a", "first");
        assert_eq!(errors.to_string(), "a: first\nb: second\n");
    }

    #[test]
    fn test_cycle_message() {
        let err = FormError::DependencyCycle(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(err.to_string(), "dependency cycle: a -> b -> a");
    }
}
