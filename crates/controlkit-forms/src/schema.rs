//! Field descriptors, controls, dependency edges and the validated schema.

use std::fmt;
use std::sync::Arc;

use crate::error::{FormError, Result};
use crate::key::FieldKey;
use crate::validation::Validator;
use crate::value::{FieldValue, OptionValue};
use crate::widgets::{Autocomplete, MultiSelect, Select, TextInput, Widget, WidgetAttrs};

/// The kind of presentation control a field is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Select,
    Autocomplete,
    MultiSelect,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Autocomplete => "autocomplete",
            Self::MultiSelect => "multi-select",
        })
    }
}

/// A presentation control together with its configuration.
#[derive(Debug, Clone)]
pub enum Control {
    Text(TextInput),
    Select(Select),
    Autocomplete(Autocomplete),
    MultiSelect(MultiSelect),
}

impl Control {
    /// Returns the control kind.
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Text(_) => ControlKind::Text,
            Self::Select(_) => ControlKind::Select,
            Self::Autocomplete(_) => ControlKind::Autocomplete,
            Self::MultiSelect(_) => ControlKind::MultiSelect,
        }
    }

    /// Options of a select or autocomplete; empty for other controls.
    pub fn options(&self) -> &[OptionValue] {
        match self {
            Self::Select(select) => &select.options,
            Self::Autocomplete(autocomplete) => &autocomplete.options,
            _ => &[],
        }
    }

    /// Labels of a multi-select; empty for other controls.
    pub fn labels(&self) -> &[String] {
        match self {
            Self::MultiSelect(multi) => &multi.names,
            _ => &[],
        }
    }

    /// The value a field holds before any edit.
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::MultiSelect(_) => FieldValue::Labels(Vec::new()),
            _ => FieldValue::empty(),
        }
    }

    /// Checks that `value` is something this control can hold.
    pub fn check(&self, value: &FieldValue) -> std::result::Result<(), String> {
        match (self, value) {
            (Self::Text(_), FieldValue::Text(_) | FieldValue::Number(_)) => Ok(()),
            (Self::Select(_) | Self::Autocomplete(_), FieldValue::Text(s)) if s.is_empty() => {
                Ok(())
            }
            (Self::Select(_) | Self::Autocomplete(_), FieldValue::Choice(option)) => {
                if self.options().contains(option) {
                    Ok(())
                } else {
                    Err(format!("{:?} is not one of the options", option.label))
                }
            }
            (Self::MultiSelect(multi), FieldValue::Labels(labels)) => {
                match labels.iter().find(|l| !multi.names.contains(*l)) {
                    Some(unknown) => Err(format!("{unknown:?} is not one of the options")),
                    None => Ok(()),
                }
            }
            _ => Err(format!("a {} control cannot hold {value:?}", self.kind())),
        }
    }

    /// The widget that renders this control.
    pub fn widget(&self) -> &dyn Widget {
        match self {
            Self::Text(w) => w as &dyn Widget,
            Self::Select(w) => w as &dyn Widget,
            Self::Autocomplete(w) => w as &dyn Widget,
            Self::MultiSelect(w) => w as &dyn Widget,
        }
    }
}

/// Condition over a prerequisite field's current value.
#[derive(Clone)]
pub enum Condition {
    /// The prerequisite is empty (the sentinel, an unselected option or
    /// an empty selection).
    IsEmpty,
    /// The prerequisite equals the given value.
    Equals(FieldValue),
    /// A caller-supplied predicate.
    Custom(Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>),
}

impl Condition {
    /// Wraps a predicate.
    pub fn custom(predicate: impl Fn(&FieldValue) -> bool + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// Evaluates the condition.
    pub fn holds(&self, value: &FieldValue) -> bool {
        match self {
            Self::IsEmpty => value.is_empty(),
            Self::Equals(expected) => value == expected,
            Self::Custom(predicate) => predicate(value),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsEmpty => f.write_str("IsEmpty"),
            Self::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Declared edge: `field` is disabled while `condition` holds over `on`.
#[derive(Debug, Clone)]
pub struct Dependency<K: FieldKey> {
    /// The dependent field.
    pub field: K,
    /// The prerequisite field.
    pub on: K,
    /// When the dependent field is disabled.
    pub condition: Condition,
}

/// Definition of one form field.
pub struct FieldDescriptor<K: FieldKey> {
    /// Field key.
    pub key: K,
    /// Field label.
    pub label: String,
    /// Presentation control.
    pub control: Control,
    /// Whether the field is required.
    pub required: bool,
    /// Validators run after the required check.
    pub validators: Vec<Box<dyn Validator>>,
    /// Help text.
    pub help_text: Option<String>,
    /// Initial value, overriding the control default.
    pub initial: Option<FieldValue>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
    /// Whether the field is always disabled.
    pub disabled: bool,
    /// Dependency edges with this field as the dependent.
    pub dependencies: Vec<Dependency<K>>,
}

impl<K: FieldKey> fmt::Debug for FieldDescriptor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("control", &self.control.kind())
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("initial", &self.initial)
            .field("disabled", &self.disabled)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

impl<K: FieldKey> FieldDescriptor<K> {
    /// Creates a new field definition.
    pub fn new(key: K, label: impl Into<String>, control: Control) -> Self {
        Self {
            key,
            label: label.into(),
            control,
            required: false,
            validators: Vec::new(),
            help_text: None,
            initial: None,
            attrs: WidgetAttrs::new(),
            disabled: false,
            dependencies: Vec::new(),
        }
    }

    /// Field name.
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Disables the field.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Disables the field while `condition` holds over field `on`.
    #[must_use]
    pub fn disabled_when(mut self, on: K, condition: Condition) -> Self {
        self.dependencies.push(Dependency {
            field: self.key,
            on,
            condition,
        });
        self
    }

    /// Disables the field while field `on` is empty.
    #[must_use]
    pub fn disabled_until_set(self, on: K) -> Self {
        self.disabled_when(on, Condition::IsEmpty)
    }

    /// The value the field starts with.
    pub fn default_value(&self) -> FieldValue {
        self.initial
            .clone()
            .unwrap_or_else(|| self.control.default_value())
    }
}

/// Ordered field descriptors, checked against the key set.
#[derive(Debug)]
pub struct Schema<K: FieldKey> {
    fields: Vec<FieldDescriptor<K>>,
    positions: Vec<usize>,
}

impl<K: FieldKey> Schema<K> {
    /// Starts a schema builder.
    pub fn builder() -> SchemaBuilder<K> {
        SchemaBuilder::new()
    }

    /// Field descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<K>] {
        &self.fields
    }

    /// The descriptor of a field.
    pub fn descriptor(&self, key: K) -> &FieldDescriptor<K> {
        &self.fields[self.positions[key.index()]]
    }

    /// Every dependency edge, in declaration order.
    pub fn dependencies(&self) -> impl Iterator<Item = &Dependency<K>> {
        self.fields.iter().flat_map(|f| f.dependencies.iter())
    }

    /// Fields whose enabled state depends on `key`.
    pub fn dependents_of(&self, key: K) -> Vec<K> {
        let mut dependents: Vec<K> = Vec::new();
        for dep in self.dependencies().filter(|d| d.on == key) {
            if !dependents.contains(&dep.field) {
                dependents.push(dep.field);
            }
        }
        dependents
    }

    /// Fields `key` depends on.
    pub fn prerequisites_of(&self, key: K) -> Vec<K> {
        self.descriptor(key)
            .dependencies
            .iter()
            .map(|d| d.on)
            .collect()
    }
}

/// Builder collecting field descriptors into a [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder<K: FieldKey> {
    fields: Vec<FieldDescriptor<K>>,
}

impl<K: FieldKey> Default for SchemaBuilder<K> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<K: FieldKey> SchemaBuilder<K> {
    /// Creates a new schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the schema.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor<K>) -> Self {
        self.fields.push(field);
        self
    }

    /// Checks the descriptors and builds the schema.
    ///
    /// Every key must be described exactly once, initial values must fit
    /// their controls, and the dependency edges must form no cycle.
    pub fn build(self) -> Result<Schema<K>> {
        for (expected, key) in K::ALL.iter().enumerate() {
            if key.index() != expected {
                return Err(FormError::InconsistentKey {
                    field: key.name().to_string(),
                    expected,
                    found: key.index(),
                });
            }
        }

        let mut slots: Vec<Option<usize>> = vec![None; K::ALL.len()];
        for (position, field) in self.fields.iter().enumerate() {
            let slot = slots
                .get_mut(field.key.index())
                .ok_or_else(|| FormError::UnknownField(field.name().to_string()))?;
            if slot.replace(position).is_some() {
                return Err(FormError::DuplicateField(field.name().to_string()));
            }

            if let Some(initial) = &field.initial {
                field
                    .control
                    .check(initial)
                    .map_err(|message| FormError::InvalidValue {
                        field: field.name().to_string(),
                        message,
                    })?;
            }

            if let Some(dep) = field.dependencies.iter().find(|d| d.on == field.key) {
                return Err(FormError::SelfDependency(dep.field.name().to_string()));
            }
        }

        let positions = slots
            .into_iter()
            .zip(K::ALL)
            .map(|(slot, key)| slot.ok_or_else(|| FormError::MissingField(key.name().to_string())))
            .collect::<Result<Vec<_>>>()?;

        let schema = Schema {
            fields: self.fields,
            positions,
        };
        schema.check_acyclic()?;
        Ok(schema)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

impl<K: FieldKey> Schema<K> {
    fn check_acyclic(&self) -> Result<()> {
        let mut marks = vec![Mark::Unvisited; K::ALL.len()];
        let mut path = Vec::new();
        for key in K::ALL {
            self.visit(*key, &mut marks, &mut path)?;
        }
        Ok(())
    }

    fn visit(&self, key: K, marks: &mut [Mark], path: &mut Vec<K>) -> Result<()> {
        match marks[key.index()] {
            Mark::Done => return Ok(()),
            Mark::InProgress => {
                let start = path.iter().position(|k| *k == key).unwrap_or_default();
                let mut cycle: Vec<String> =
                    path[start..].iter().map(|k| k.name().to_string()).collect();
                cycle.push(key.name().to_string());
                return Err(FormError::DependencyCycle(cycle));
            }
            Mark::Unvisited => {}
        }

        marks[key.index()] = Mark::InProgress;
        path.push(key);
        for prerequisite in self.prerequisites_of(key) {
            self.visit(prerequisite, marks, path)?;
        }
        path.pop();
        marks[key.index()] = Mark::Done;
        Ok(())
    }
}
