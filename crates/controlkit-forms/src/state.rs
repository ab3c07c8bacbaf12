//! Form state: the single source of truth for every bound field.

use std::borrow::Cow;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::binding::FieldBinding;
use crate::error::{FormError, Result, ValidationErrors};
use crate::key::FieldKey;
use crate::schema::Schema;
use crate::validation::{Validator, REQUIRED_MESSAGE};
use crate::value::FieldValue;

#[derive(Debug, Clone)]
struct FieldSlot {
    value: FieldValue,
    touched: bool,
}

/// Current values, touched flags and validation errors of one form.
///
/// Values change only through [`FieldBinding`]s; [`FormState::submit`]
/// touches fields and records errors but never rewrites a value.
#[derive(Debug)]
pub struct FormState<K: FieldKey> {
    schema: Arc<Schema<K>>,
    slots: Vec<FieldSlot>,
    errors: ValidationErrors,
    submit_count: usize,
}

impl<K: FieldKey> FormState<K> {
    /// Creates the state with every field at its default value.
    pub fn new(schema: impl Into<Arc<Schema<K>>>) -> Self {
        let schema = schema.into();
        let slots = K::ALL
            .iter()
            .map(|key| FieldSlot {
                value: schema.descriptor(*key).default_value(),
                touched: false,
            })
            .collect();
        Self {
            schema,
            slots,
            errors: ValidationErrors::new(),
            submit_count: 0,
        }
    }

    /// The schema backing this state.
    pub fn schema(&self) -> &Schema<K> {
        &self.schema
    }

    /// Shared handle to the schema.
    pub fn shared_schema(&self) -> Arc<Schema<K>> {
        Arc::clone(&self.schema)
    }

    /// Binds a field for editing.
    pub fn bind(&mut self, key: K) -> FieldBinding<'_, K> {
        FieldBinding::new(self, key)
    }

    /// Binds a field by name.
    pub fn bind_name(&mut self, name: &str) -> Result<FieldBinding<'_, K>> {
        let key = K::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        Ok(self.bind(key))
    }

    /// Current value of a field.
    pub fn value(&self, key: K) -> &FieldValue {
        &self.slots[key.index()].value
    }

    /// Text view of a field's current value.
    pub fn text(&self, key: K) -> Cow<'_, str> {
        self.value(key).as_text()
    }

    /// Whether the field has been blurred or the form submitted.
    pub fn is_touched(&self, key: K) -> bool {
        self.slots[key.index()].touched
    }

    /// Whether the field is disabled, statically or by a dependency edge.
    pub fn is_disabled(&self, key: K) -> bool {
        let descriptor = self.schema.descriptor(key);
        descriptor.disabled
            || descriptor
                .dependencies
                .iter()
                .any(|dep| dep.condition.holds(self.value(dep.on)))
    }

    /// Errors recorded for the whole form.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Errors recorded for one field.
    pub fn field_errors(&self, key: K) -> &[String] {
        self.errors
            .get(key.name())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of submissions so far.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// Restores every field to its default, as on a page remount.
    pub fn reset(&mut self) {
        for key in K::ALL {
            let slot = &mut self.slots[key.index()];
            slot.value = self.schema.descriptor(*key).default_value();
            slot.touched = false;
        }
        self.errors = ValidationErrors::new();
        self.submit_count = 0;
    }

    /// Snapshot of the enabled fields' values.
    pub fn values(&self) -> FormValues<K> {
        FormValues {
            entries: K::ALL
                .iter()
                .filter(|key| !self.is_disabled(**key))
                .map(|key| (*key, self.value(*key).clone()))
                .collect(),
        }
    }

    /// Validates one field against its required flag and validators.
    ///
    /// Disabled fields always pass. A field failing the required check
    /// reports only that message; an empty optional field skips the
    /// remaining validators.
    pub fn validate_field(&self, key: K) -> Vec<String> {
        if self.is_disabled(key) {
            return Vec::new();
        }

        let descriptor = self.schema.descriptor(key);
        let value = self.value(key);
        let text = value.as_text();
        let blank = value.is_empty() || text.trim().is_empty();

        if blank {
            return if descriptor.required {
                vec![REQUIRED_MESSAGE.to_string()]
            } else {
                Vec::new()
            };
        }

        descriptor
            .validators
            .iter()
            .filter_map(|validator| validator.validate(&text).err())
            .collect()
    }

    /// Validates every field without touching the state.
    pub fn validate(&self) -> std::result::Result<FormValues<K>, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for key in K::ALL {
            errors.set(key.name(), self.validate_field(*key));
        }
        if errors.is_empty() {
            Ok(self.values())
        } else {
            Err(errors)
        }
    }

    /// Submits the form.
    ///
    /// Every field becomes touched and the resulting errors are recorded.
    /// `on_valid` receives the submitted values; `on_invalid` receives the
    /// aggregate errors. Field values are left as they are either way.
    pub fn submit<T>(
        &mut self,
        on_valid: impl FnOnce(&FormValues<K>) -> T,
        on_invalid: impl FnOnce(&ValidationErrors) -> T,
    ) -> T {
        self.submit_count += 1;
        for slot in &mut self.slots {
            slot.touched = true;
        }

        match self.validate() {
            Ok(values) => {
                self.errors = ValidationErrors::new();
                debug!(fields = values.len(), "form submitted");
                on_valid(&values)
            }
            Err(errors) => {
                warn!(fields = errors.len(), "form submission rejected");
                self.errors = errors;
                on_invalid(&self.errors)
            }
        }
    }

    /// Stores a value and re-validates the touched fields it affects: the
    /// field itself and the fields whose enabled state depends on it.
    pub(crate) fn write(&mut self, key: K, value: FieldValue) {
        self.slots[key.index()].value = value;
        if self.is_touched(key) {
            self.refresh_errors(key);
        }
        for dependent in self.schema.dependents_of(key) {
            if self.is_touched(dependent) {
                self.refresh_errors(dependent);
            }
        }
    }

    pub(crate) fn touch(&mut self, key: K) {
        self.slots[key.index()].touched = true;
        self.refresh_errors(key);
    }

    fn refresh_errors(&mut self, key: K) {
        let messages = self.validate_field(key);
        self.errors.set(key.name(), messages);
    }
}

/// Values of the enabled fields at submission time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues<K: FieldKey> {
    entries: Vec<(K, FieldValue)>,
}

impl<K: FieldKey> FormValues<K> {
    /// The submitted value of a field; `None` when it was disabled.
    pub fn get(&self, key: K) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    /// Text view of a submitted value.
    pub fn text(&self, key: K) -> Option<Cow<'_, str>> {
        self.get(key).map(FieldValue::as_text)
    }

    /// Submitted fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Number of submitted fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field was submitted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The values as a JSON object keyed by field name.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<K: FieldKey> Serialize for FormValues<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.name(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Control, FieldDescriptor};
    use crate::validation::LengthValidator;
    use crate::value::OptionValue;
    use crate::widgets::{Autocomplete, TextInput};

    crate::field_keys! {
        enum Framework {
            Nome => "nome",
            Stack => "stack",
            Versao => "versao",
        }
    }

    fn state() -> FormState<Framework> {
        let schema = Schema::builder()
            .field(
                FieldDescriptor::new(Framework::Nome, "Nome", Control::Text(TextInput::new()))
                    .required()
                    .validator(LengthValidator::min(2)),
            )
            .field(FieldDescriptor::new(
                Framework::Stack,
                "Stack",
                Control::Autocomplete(Autocomplete::new(vec![
                    OptionValue::new("Frontend", 1),
                    OptionValue::new("Backend", 2),
                ])),
            ))
            .field(
                FieldDescriptor::new(Framework::Versao, "Versão", Control::Text(TextInput::new()))
                    .required()
                    .disabled_until_set(Framework::Stack),
            )
            .build()
            .unwrap();
        FormState::new(schema)
    }

    #[test]
    fn test_defaults() {
        let state = state();
        assert!(state.value(Framework::Nome).is_sentinel());
        assert!(state.value(Framework::Stack).is_sentinel());
        assert!(!state.is_touched(Framework::Nome));
        assert_eq!(state.submit_count(), 0);
    }

    #[test]
    fn test_disabled_by_dependency() {
        let mut state = state();
        assert!(state.is_disabled(Framework::Versao));
        state
            .bind(Framework::Stack)
            .select_label("Backend")
            .unwrap();
        assert!(!state.is_disabled(Framework::Versao));
    }

    #[test]
    fn test_disabled_required_field_is_not_validated() {
        let mut state = state();
        state.bind(Framework::Nome).input("Axum").unwrap();
        let values = state.validate().unwrap();
        assert!(values.get(Framework::Versao).is_none());
        assert_eq!(values.text(Framework::Nome).as_deref(), Some("Axum"));
    }

    #[test]
    fn test_required_reports_single_message() {
        let state = state();
        assert_eq!(
            state.validate_field(Framework::Nome),
            vec![REQUIRED_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_validators_after_required() {
        let mut state = state();
        state.bind(Framework::Nome).input("A").unwrap();
        assert_eq!(
            state.validate_field(Framework::Nome),
            vec!["Ensure this value has at least 2 characters.".to_string()]
        );
    }

    #[test]
    fn test_prerequisite_edit_refreshes_dependent_errors() {
        let mut state = state();
        state.bind(Framework::Stack).select_label("Backend").unwrap();
        state.submit(|_| (), |_| ());
        assert_eq!(state.field_errors(Framework::Versao), [REQUIRED_MESSAGE]);

        state.bind(Framework::Stack).clear().unwrap();
        assert!(state.is_disabled(Framework::Versao));
        assert!(state.field_errors(Framework::Versao).is_empty());

        state.bind(Framework::Stack).select_label("Backend").unwrap();
        assert_eq!(state.field_errors(Framework::Versao), [REQUIRED_MESSAGE]);
    }

    #[test]
    fn test_submit_failure_keeps_values() {
        let mut state = state();
        let accepted = state.submit(|_| true, |errors| {
            assert!(errors.contains("nome"));
            false
        });
        assert!(!accepted);
        assert!(state.value(Framework::Nome).is_sentinel());
        assert!(state.is_touched(Framework::Nome));
        assert_eq!(state.field_errors(Framework::Nome).len(), 1);
        assert_eq!(state.submit_count(), 1);
    }

    #[test]
    fn test_submit_success_clears_errors() {
        let mut state = state();
        state.submit(|_| (), |_| ());
        state.bind(Framework::Nome).input("Axum").unwrap();
        let json = state.submit(|values| values.to_json().unwrap(), |_| serde_json::Value::Null);
        assert_eq!(json, serde_json::json!({"nome": "Axum", "stack": ""}));
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut state = state();
        state.bind(Framework::Nome).input("Axum").unwrap();
        state.submit(|_| (), |_| ());
        state.reset();
        assert!(state.value(Framework::Nome).is_sentinel());
        assert!(!state.is_touched(Framework::Nome));
        assert_eq!(state.submit_count(), 0);
    }
}
