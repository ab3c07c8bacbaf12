//! Controlled field bindings.
//!
//! A [`FieldBinding`] borrows the [`FormState`] for the duration of one
//! user event and writes through to it; it never keeps a copy of the
//! value.

use std::fmt;

use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::key::FieldKey;
use crate::schema::{ControlKind, FieldDescriptor};
use crate::state::FormState;
use crate::value::{FieldValue, OptionValue};

type ChangeCallback<'a, K> = Box<dyn FnMut(&str, &mut FieldWriter<'_, K>) + 'a>;

/// Adapter between one field of a [`FormState`] and its control.
pub struct FieldBinding<'a, K: FieldKey> {
    state: &'a mut FormState<K>,
    key: K,
    on_change: Option<ChangeCallback<'a, K>>,
}

impl<K: FieldKey> fmt::Debug for FieldBinding<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("key", &self.key)
            .field("value", self.state.value(self.key))
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<'a, K: FieldKey> FieldBinding<'a, K> {
    pub(crate) fn new(state: &'a mut FormState<K>, key: K) -> Self {
        Self {
            state,
            key,
            on_change: None,
        }
    }

    /// Attaches a side effect run after every successful edit.
    ///
    /// The callback receives the new value's text view and a writer for
    /// the other fields of the form. Writes through the writer do not
    /// run callbacks.
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&str, &mut FieldWriter<'_, K>) + 'a) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The bound key.
    pub fn key(&self) -> K {
        self.key
    }

    /// The bound field's descriptor.
    pub fn descriptor(&self) -> &FieldDescriptor<K> {
        self.state.schema().descriptor(self.key)
    }

    /// The bound field's label.
    pub fn label(&self) -> &str {
        &self.descriptor().label
    }

    /// Current value, read from the form state.
    pub fn value(&self) -> &FieldValue {
        self.state.value(self.key)
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled(self.key)
    }

    /// Whether the field has been touched.
    pub fn is_touched(&self) -> bool {
        self.state.is_touched(self.key)
    }

    /// Errors currently shown for the field.
    pub fn errors(&self) -> &[String] {
        self.state.field_errors(self.key)
    }

    /// Free-text edit.
    pub fn input(&mut self, raw: impl Into<String>) -> Result<()> {
        self.expect_control(&[ControlKind::Text], "input text")?;
        self.commit(FieldValue::Text(raw.into()))
    }

    /// Selects one of the configured options. Selecting an option with
    /// an empty value is the same as [`clear`](Self::clear).
    pub fn select(&mut self, option: &OptionValue) -> Result<()> {
        self.expect_control(
            &[ControlKind::Select, ControlKind::Autocomplete],
            "select an option",
        )?;
        if option.is_unselected() {
            return self.commit(FieldValue::empty());
        }
        let known = self
            .descriptor()
            .control
            .options()
            .iter()
            .find(|o| *o == option)
            .cloned()
            .ok_or_else(|| self.unknown_option(&option.label))?;
        self.commit(FieldValue::Choice(known))
    }

    /// Selects the option with the given label.
    pub fn select_label(&mut self, label: &str) -> Result<()> {
        self.expect_control(
            &[ControlKind::Select, ControlKind::Autocomplete],
            "select an option",
        )?;
        let option = self
            .descriptor()
            .control
            .options()
            .iter()
            .find(|o| o.label == label)
            .cloned()
            .ok_or_else(|| self.unknown_option(label))?;
        self.commit(FieldValue::Choice(option))
    }

    /// Clears the selection back to the empty-string sentinel.
    pub fn clear(&mut self) -> Result<()> {
        self.expect_control(
            &[ControlKind::Select, ControlKind::Autocomplete],
            "clear the selection",
        )?;
        self.commit(FieldValue::empty())
    }

    /// Adds `label` to a multi-select, or removes it when already selected.
    pub fn toggle(&mut self, label: &str) -> Result<()> {
        self.expect_control(&[ControlKind::MultiSelect], "toggle an option")?;
        let names = self.descriptor().control.labels();
        if !names.iter().any(|n| n == label) {
            return Err(self.unknown_option(label));
        }

        let current = self.value().labels().unwrap_or_default();
        let was_selected = current.iter().any(|l| l == label);
        let selected: Vec<String> = names
            .iter()
            .filter(|n| {
                if n.as_str() == label {
                    !was_selected
                } else {
                    current.contains(n)
                }
            })
            .cloned()
            .collect();
        self.commit(FieldValue::Labels(selected))
    }

    /// Replaces a multi-select from its comma-joined form value.
    pub fn replace_csv(&mut self, raw: &str) -> Result<()> {
        self.expect_control(&[ControlKind::MultiSelect], "replace the selection")?;
        let names = self.descriptor().control.labels();
        let mut selected: Vec<String> = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if !names.iter().any(|n| n == part) {
                return Err(self.unknown_option(part));
            }
            if !selected.iter().any(|s| s == part) {
                selected.push(part.to_string());
            }
        }
        self.commit(FieldValue::Labels(selected))
    }

    /// Applies a raw form value the way the browser submits it: text as
    /// is, selections by label (empty clears), multi-selects comma-joined.
    pub fn apply_raw(&mut self, raw: &str) -> Result<()> {
        match self.descriptor().control.kind() {
            ControlKind::Text => self.input(raw),
            ControlKind::Select | ControlKind::Autocomplete if raw.is_empty() => self.clear(),
            ControlKind::Select | ControlKind::Autocomplete => self.select_label(raw),
            ControlKind::MultiSelect => self.replace_csv(raw),
        }
    }

    /// Writes any value the control accepts.
    pub fn set(&mut self, value: FieldValue) -> Result<()> {
        check_value(self.state, self.key, &value)?;
        self.commit(value)
    }

    /// Marks the field touched so its errors are shown.
    pub fn blur(&mut self) {
        self.state.touch(self.key);
        debug!(field = self.key.name(), errors = self.errors().len(), "field blurred");
    }

    fn commit(&mut self, value: FieldValue) -> Result<()> {
        if self.state.is_disabled(self.key) {
            warn!(field = self.key.name(), "edit rejected: field is disabled");
            return Err(FormError::FieldDisabled(self.key.name().to_string()));
        }

        let raw = value.as_text().into_owned();
        self.state.write(self.key, value);
        debug!(field = self.key.name(), value = %raw, "field changed");

        if let Some(callback) = self.on_change.as_mut() {
            let mut writer = FieldWriter {
                state: &mut *self.state,
                origin: self.key,
            };
            callback(&raw, &mut writer);
        }
        Ok(())
    }

    fn expect_control(&self, allowed: &[ControlKind], operation: &'static str) -> Result<()> {
        let kind = self.descriptor().control.kind();
        if allowed.contains(&kind) {
            Ok(())
        } else {
            Err(FormError::ControlMismatch {
                field: self.key.name().to_string(),
                control: kind.to_string(),
                operation,
            })
        }
    }

    fn unknown_option(&self, option: &str) -> FormError {
        FormError::UnknownOption {
            field: self.key.name().to_string(),
            option: option.to_string(),
        }
    }
}

fn check_value<K: FieldKey>(state: &FormState<K>, key: K, value: &FieldValue) -> Result<()> {
    state
        .schema()
        .descriptor(key)
        .control
        .check(value)
        .map_err(|message| FormError::InvalidValue {
            field: key.name().to_string(),
            message,
        })
}

/// Write access to the other fields of a form, handed to change callbacks.
pub struct FieldWriter<'s, K: FieldKey> {
    state: &'s mut FormState<K>,
    origin: K,
}

impl<K: FieldKey> FieldWriter<'_, K> {
    /// The field whose edit triggered the callback.
    pub fn origin(&self) -> K {
        self.origin
    }

    /// Current value of any field.
    pub fn value(&self, key: K) -> &FieldValue {
        self.state.value(key)
    }

    /// Writes a derived value into another field.
    pub fn set(&mut self, key: K, value: impl Into<FieldValue>) -> Result<()> {
        let value = value.into();
        check_value(self.state, key, &value)?;
        if self.state.is_disabled(key) {
            return Err(FormError::FieldDisabled(key.name().to_string()));
        }
        debug!(field = key.name(), origin = self.origin.name(), "derived field written");
        self.state.write(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Control, Schema};
    use crate::widgets::{Autocomplete, MultiSelect, TextInput};

    crate::field_keys! {
        enum Docker {
            Name => "name",
            Slug => "slug",
            Language => "language",
            Version => "version",
            Libraries => "libraries",
        }
    }

    fn state() -> FormState<Docker> {
        let schema = Schema::builder()
            .field(FieldDescriptor::new(Docker::Name, "Nome", Control::Text(TextInput::new())).required())
            .field(FieldDescriptor::new(Docker::Slug, "Slug", Control::Text(TextInput::new())))
            .field(FieldDescriptor::new(
                Docker::Language,
                "Linguagem",
                Control::Autocomplete(Autocomplete::new(vec![
                    OptionValue::new("Node", 1),
                    OptionValue::new("Dart", 2),
                ])),
            ))
            .field(
                FieldDescriptor::new(
                    Docker::Version,
                    "Versão",
                    Control::Autocomplete(Autocomplete::new(vec![OptionValue::labelled("18.0")])),
                )
                .disabled_until_set(Docker::Language),
            )
            .field(FieldDescriptor::new(
                Docker::Libraries,
                "Bibliotecas",
                Control::MultiSelect(MultiSelect::new(vec![
                    "Material UI".into(),
                    "Alpine.JS".into(),
                    "Driver.JS".into(),
                ])),
            ))
            .build()
            .unwrap();
        FormState::new(schema)
    }

    #[test]
    fn test_input_writes_through() {
        let mut state = state();
        {
            let mut binding = state.bind(Docker::Name);
            binding.input("meu app").unwrap();
            assert_eq!(binding.value(), &FieldValue::from("meu app"));
        }
        assert_eq!(state.text(Docker::Name), "meu app");
    }

    #[test]
    fn test_on_change_derives_field() {
        let mut state = state();
        let mut seen = Vec::new();
        state
            .bind(Docker::Name)
            .on_change(|raw, writer| {
                seen.push(raw.to_string());
                writer.set(Docker::Slug, raw.replace(' ', "-")).unwrap();
            })
            .input("meu app")
            .unwrap();
        assert_eq!(seen, vec!["meu app".to_string()]);
        assert_eq!(state.text(Docker::Slug), "meu-app");
    }

    #[test]
    fn test_clear_yields_sentinel() {
        let mut state = state();
        let mut binding = state.bind(Docker::Language);
        binding.select(&OptionValue::new("Dart", 2)).unwrap();
        assert_eq!(binding.value().choice().map(|o| o.label.as_str()), Some("Dart"));
        binding.clear().unwrap();
        assert!(binding.value().is_sentinel());
    }

    #[test]
    fn test_select_unselected_option_clears() {
        let mut state = state();
        state.bind(Docker::Language).select_label("Node").unwrap();
        state.bind(Docker::Language).select(&OptionValue::new("", "")).unwrap();
        assert!(state.value(Docker::Language).is_sentinel());
    }

    #[test]
    fn test_unknown_option() {
        let mut state = state();
        let err = state.bind(Docker::Language).select_label("Cobol").unwrap_err();
        assert!(matches!(err, FormError::UnknownOption { option, .. } if option == "Cobol"));
        let err = state.bind(Docker::Libraries).toggle("jQuery").unwrap_err();
        assert!(matches!(err, FormError::UnknownOption { .. }));
    }

    #[test]
    fn test_disabled_field_rejects_edit() {
        let mut state = state();
        let err = state.bind(Docker::Version).select_label("18.0").unwrap_err();
        assert!(matches!(err, FormError::FieldDisabled(name) if name == "version"));
        assert!(state.value(Docker::Version).is_sentinel());

        state.bind(Docker::Language).select_label("Node").unwrap();
        state.bind(Docker::Version).select_label("18.0").unwrap();
        assert_eq!(state.text(Docker::Version), "18.0");
    }

    #[test]
    fn test_control_mismatch() {
        let mut state = state();
        let err = state.bind(Docker::Name).toggle("Alpine.JS").unwrap_err();
        assert!(matches!(err, FormError::ControlMismatch { operation: "toggle an option", .. }));
        let err = state.bind(Docker::Libraries).input("x").unwrap_err();
        assert!(matches!(err, FormError::ControlMismatch { .. }));
    }

    #[test]
    fn test_toggle_follows_option_order() {
        let mut state = state();
        let mut binding = state.bind(Docker::Libraries);
        binding.toggle("Driver.JS").unwrap();
        binding.toggle("Material UI").unwrap();
        assert_eq!(
            binding.value().labels().unwrap(),
            &["Material UI".to_string(), "Driver.JS".to_string()]
        );
        binding.toggle("Driver.JS").unwrap();
        assert_eq!(binding.value().labels().unwrap(), &["Material UI".to_string()]);
    }

    #[test]
    fn test_replace_csv() {
        let mut state = state();
        let mut binding = state.bind(Docker::Libraries);
        binding.replace_csv("Alpine.JS,Material UI,Alpine.JS").unwrap();
        assert_eq!(binding.value().labels().unwrap().len(), 2);
        binding.replace_csv("").unwrap();
        assert!(binding.value().is_empty());
    }

    #[test]
    fn test_apply_raw_by_control() {
        let mut state = state();
        state.bind(Docker::Name).apply_raw("api").unwrap();
        state.bind(Docker::Language).apply_raw("Dart").unwrap();
        state.bind(Docker::Libraries).apply_raw("Driver.JS").unwrap();
        assert_eq!(state.text(Docker::Name), "api");
        assert_eq!(state.text(Docker::Language), "2");
        assert_eq!(state.text(Docker::Libraries), "Driver.JS");
        state.bind(Docker::Language).apply_raw("").unwrap();
        assert!(state.value(Docker::Language).is_sentinel());
    }

    #[test]
    fn test_blur_surfaces_errors() {
        let mut state = state();
        let mut binding = state.bind(Docker::Name);
        assert!(binding.errors().is_empty());
        binding.blur();
        assert!(binding.is_touched());
        assert_eq!(binding.errors().len(), 1);
        binding.input("api").unwrap();
        assert!(binding.errors().is_empty());
    }

    #[test]
    fn test_set_checks_control() {
        let mut state = state();
        let err = state
            .bind(Docker::Name)
            .set(FieldValue::Labels(Vec::new()))
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidValue { .. }));
        state.bind(Docker::Name).set(FieldValue::Number(3.0)).unwrap();
        assert_eq!(state.text(Docker::Name), "3");
    }
}
