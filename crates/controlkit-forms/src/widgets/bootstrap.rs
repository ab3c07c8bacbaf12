//! Bootstrap 5 controls.

use super::{html_escape, Widget, WidgetAttrs};
use crate::value::{FieldValue, OptionValue};

/// Text input with optional adornments.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type (text, email, password, etc.).
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
    /// Text shown before the input.
    pub start_adornment: Option<String>,
    /// Text shown after the input.
    pub end_adornment: Option<String>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
            start_adornment: None,
            end_adornment: None,
        }
    }
}

impl TextInput {
    /// Creates a new text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input of another HTML type.
    pub fn of_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            ..Default::default()
        }
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::of_type("password")
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::of_type("email")
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::of_type("number")
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    /// Sets the text shown before the input.
    #[must_use]
    pub fn start_adornment(mut self, text: impl Into<String>) -> Self {
        self.start_adornment = Some(text.into());
        self
    }

    /// Sets the text shown after the input.
    #[must_use]
    pub fn end_adornment(mut self, text: impl Into<String>) -> Self {
        self.end_adornment = Some(text.into());
        self
    }
}

fn adornment(text: Option<&String>) -> String {
    text.map(|t| format!(r#"<span class="input-group-text">{}</span>"#, html_escape(t)))
        .unwrap_or_default()
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: &FieldValue, attrs: &WidgetAttrs) -> String {
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let input = format!(
            r#"<input type="{}" class="{}" id="{}" name="{}" value="{}"{placeholder_attr}{}>"#,
            html_escape(&self.input_type),
            attrs.class_with("form-control"),
            attrs.id_for(name),
            name,
            html_escape(&value.as_text()),
            attrs.to_html_except(&["class", "id"]),
        );

        if self.start_adornment.is_none() && self.end_adornment.is_none() {
            return input;
        }

        format!(
            r#"<div class="input-group">{}{input}{}</div>"#,
            adornment(self.start_adornment.as_ref()),
            adornment(self.end_adornment.as_ref()),
        )
    }

    fn input_type(&self) -> &str {
        &self.input_type
    }
}

/// Single select with a blank "no selection" entry.
#[derive(Debug, Clone)]
pub struct Select {
    /// Available options.
    pub options: Vec<OptionValue>,
    /// Label of the blank entry, whose value is the empty string.
    pub blank_label: String,
}

impl Select {
    /// Creates a select over the given options.
    pub fn new(options: Vec<OptionValue>) -> Self {
        Self {
            options,
            blank_label: "---------".to_string(),
        }
    }

    /// Sets the blank label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: &FieldValue, attrs: &WidgetAttrs) -> String {
        let selected = value.choice();
        let blank_selected = if selected.is_none() { " selected" } else { "" };

        let mut options = format!(
            r#"<option value=""{blank_selected}>{}</option>"#,
            html_escape(&self.blank_label)
        );
        for option in &self.options {
            let is_selected = selected.is_some_and(|s| s.value == option.value);
            let selected_attr = if is_selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(&option.value.to_string()),
                html_escape(&option.label)
            ));
        }

        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{options}</select>"#,
            attrs.class_with("form-select"),
            attrs.id_for(name),
            name,
            attrs.to_html_except(&["class", "id"]),
        )
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// Text input completing from a list of options.
///
/// The options are offered through a `<datalist>` keyed by label; the
/// selected option's label is the displayed value.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    /// Available options.
    pub options: Vec<OptionValue>,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Autocomplete {
    /// Creates an autocomplete over the given options.
    pub fn new(options: Vec<OptionValue>) -> Self {
        Self {
            options,
            placeholder: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for Autocomplete {
    fn render(&self, name: &str, value: &FieldValue, attrs: &WidgetAttrs) -> String {
        let id = attrs.id_for(name);
        let list_id = format!("{id}_options");
        let shown = value.choice().map(|o| o.label.as_str()).unwrap_or_default();
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();

        let options: String = self
            .options
            .iter()
            .map(|o| {
                format!(
                    r#"<option value="{}" data-value="{}"></option>"#,
                    html_escape(&o.label),
                    html_escape(&o.value.to_string())
                )
            })
            .collect();

        format!(
            r#"<input type="text" class="{}" id="{id}" name="{}" list="{list_id}" autocomplete="off" value="{}"{placeholder_attr}{}><datalist id="{list_id}">{options}</datalist>"#,
            attrs.class_with("form-control"),
            name,
            html_escape(shown),
            attrs.to_html_except(&["class", "id"]),
        )
    }

    fn input_type(&self) -> &str {
        "autocomplete"
    }
}

/// Multiple select over a fixed list of labels.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    /// Selectable labels, in display order.
    pub names: Vec<String>,
    /// Number of visible rows.
    pub visible_rows: usize,
}

impl MultiSelect {
    /// Creates a multi-select over the given labels.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            visible_rows: 4,
        }
    }

    /// Sets the number of visible rows.
    #[must_use]
    pub fn visible_rows(mut self, rows: usize) -> Self {
        self.visible_rows = rows;
        self
    }
}

impl Widget for MultiSelect {
    fn render(&self, name: &str, value: &FieldValue, attrs: &WidgetAttrs) -> String {
        let selected = value.labels().unwrap_or_default();

        let options: String = self
            .names
            .iter()
            .map(|n| {
                let selected_attr = if selected.contains(n) { " selected" } else { "" };
                format!(
                    r#"<option value="{0}"{selected_attr}>{0}</option>"#,
                    html_escape(n)
                )
            })
            .collect();

        let summary = if selected.is_empty() {
            String::new()
        } else {
            format!(
                r#"<div class="small text-muted selection-summary">{}</div>"#,
                html_escape(&selected.join(", "))
            )
        };

        format!(
            r#"<select multiple class="{}" id="{}" name="{}" size="{}"{}>{options}</select>{summary}"#,
            attrs.class_with("form-select"),
            attrs.id_for(name),
            name,
            self.visible_rows,
            attrs.to_html_except(&["class", "id"]),
        )
    }

    fn input_type(&self) -> &str {
        "select-multiple"
    }
}
