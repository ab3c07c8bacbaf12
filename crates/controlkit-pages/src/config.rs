//! Page data: option lists and table rows the pages are built from.

use std::fs;
use std::path::Path;

use controlkit_forms::OptionValue;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PageError, Result};

/// A named catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    /// Identifier.
    pub id: i64,
    /// Display name.
    pub nome: String,
}

impl Named {
    /// Creates an entry.
    pub fn new(id: i64, nome: impl Into<String>) -> Self {
        Self {
            id,
            nome: nome.into(),
        }
    }

    /// The entry as a selectable option.
    pub fn option(&self) -> OptionValue {
        OptionValue::new(self.nome.as_str(), self.id)
    }
}

/// Everything the pages read from outside.
///
/// Keys missing from a data file keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageData {
    /// Frameworks offered by the project form.
    pub frameworks: Vec<Named>,
    /// Framework versions offered by the project form.
    pub framework_versions: Vec<String>,
    /// Libraries offered by the project form.
    pub libraries: Vec<String>,
    /// Languages offered by the project form.
    pub languages: Vec<Named>,
    /// Language versions offered by the project form.
    pub language_versions: Vec<String>,
    /// Tabs of the framework admin page.
    pub framework_tabs: Vec<String>,
    /// Rows of the language admin table.
    pub table_languages: Vec<Named>,
}

impl Default for PageData {
    fn default() -> Self {
        Self {
            frameworks: vec![Named::new(1, "React"), Named::new(2, "Angular")],
            framework_versions: vec!["18.0".to_string()],
            libraries: ["Material UI", "Alpine.JS", "Driver.JS", "Swipper.JS"]
                .into_iter()
                .map(String::from)
                .collect(),
            languages: vec![Named::new(1, "Node"), Named::new(2, "Dart")],
            language_versions: vec!["18.0".to_string(), "3.0".to_string()],
            framework_tabs: ["Frontend", "Backend", "Mobile"]
                .into_iter()
                .map(String::from)
                .collect(),
            table_languages: vec![
                Named::new(1, "Dart"),
                Named::new(2, "Node"),
                Named::new(3, "PHP"),
                Named::new(4, "Java"),
            ],
        }
    }
}

impl PageData {
    /// Parses page data from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads page data from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| PageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&json)?;
        debug!(path = %path.display(), "page data loaded");
        Ok(data)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
