//! Field values and selectable options.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The value half of an option, text or integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionKey {
    /// Integer identifier.
    Int(i64),
    /// Text identifier. The empty string means "unselected".
    Text(String),
}

impl OptionKey {
    /// Returns whether this is the empty-string key.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionKey {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A `{label, value}` pair offered by selection controls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    /// Visible text.
    pub label: String,
    /// Submitted value.
    pub value: OptionKey,
}

impl OptionValue {
    /// Creates an option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionKey>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Creates an option whose value is its own label.
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: OptionKey::Text(label.clone()),
            label,
        }
    }

    /// Returns whether the option stands for "no selection".
    pub fn is_unselected(&self) -> bool {
        self.value.is_empty()
    }
}

/// The current value of one form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A selected option.
    Choice(OptionValue),
    /// Selected labels of a multi-select.
    Labels(Vec<String>),
    /// A number.
    Number(f64),
    /// Free text. `Text("")` is the "no selection" sentinel.
    Text(String),
}

impl FieldValue {
    /// The empty-string sentinel.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    /// Returns whether the value is exactly the empty-string sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    /// Returns whether the value carries nothing: the sentinel, an
    /// unselected option or an empty selection.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Choice(option) => option.is_unselected(),
            Self::Labels(labels) => labels.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Text view of the value, as seen by validators and change callbacks.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Choice(option) => match &option.value {
                OptionKey::Text(s) => Cow::Borrowed(s),
                OptionKey::Int(n) => Cow::Owned(n.to_string()),
            },
            Self::Labels(labels) => Cow::Owned(labels.join(", ")),
        }
    }

    /// The selected option, if any.
    pub fn choice(&self) -> Option<&OptionValue> {
        match self {
            Self::Choice(option) => Some(option),
            _ => None,
        }
    }

    /// The selected labels, if this is a multi-select value.
    pub fn labels(&self) -> Option<&[String]> {
        match self {
            Self::Labels(labels) => Some(labels),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Choice(option) => f.write_str(&option.label),
            _ => f.write_str(&self.as_text()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<OptionValue> for FieldValue {
    fn from(value: OptionValue) -> Self {
        Self::Choice(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Labels(value)
    }
}
