//! # controlkit-forms
//!
//! Typed form state and controlled field bindings with Bootstrap 5 widgets.
//!
//! This crate provides:
//! - Typed field keys ([`FieldKey`], [`field_keys!`])
//! - A schema of field descriptors checked at construction, including
//!   declared dependency edges between fields
//! - [`FormState`], the single source of truth for field values
//! - [`FieldBinding`], the adapter between one field and its control
//! - Validators and submission with success/failure callbacks
//! - Bootstrap 5 rendering of fields and forms
//!
//! ## Quick Start
//!
//! ```rust
//! use controlkit_forms::{
//!     field_keys, render_form, Control, FieldDescriptor, FormState, OptionValue, Schema,
//! };
//! use controlkit_forms::widgets::{Autocomplete, TextInput};
//!
//! field_keys! {
//!     pub enum Project {
//!         Name => "name",
//!         Framework => "framework",
//!         Version => "version",
//!     }
//! }
//!
//! let schema = Schema::builder()
//!     .field(FieldDescriptor::new(Project::Name, "Nome", Control::Text(TextInput::new())).required())
//!     .field(FieldDescriptor::new(
//!         Project::Framework,
//!         "Framework",
//!         Control::Autocomplete(Autocomplete::new(vec![OptionValue::new("React", 1)])),
//!     ))
//!     .field(
//!         FieldDescriptor::new(
//!             Project::Version,
//!             "Versão",
//!             Control::Autocomplete(Autocomplete::new(vec![OptionValue::labelled("18.0")])),
//!         )
//!         .disabled_until_set(Project::Framework),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut state = FormState::new(schema);
//! assert!(state.is_disabled(Project::Version));
//!
//! state.bind(Project::Name).input("meu-app").unwrap();
//! state.bind(Project::Framework).select_label("React").unwrap();
//! assert!(!state.is_disabled(Project::Version));
//!
//! let html = render_form(&state, "/projects", "post", "Gerar Docker");
//! assert!(html.contains("meu-app"));
//! ```
//!
//! ## Submission
//!
//! ```rust
//! use controlkit_forms::{field_keys, fields::char_field, FormState, Schema};
//!
//! field_keys! {
//!     pub enum Framework {
//!         Nome => "nome",
//!     }
//! }
//!
//! let schema = Schema::builder()
//!     .field(char_field(Framework::Nome, "Nome", 100, true))
//!     .build()
//!     .unwrap();
//! let mut state = FormState::new(schema);
//!
//! let accepted = state.submit(|_| true, |_| false);
//! assert!(!accepted);
//! assert!(state.value(Framework::Nome).is_sentinel());
//! ```

mod binding;
mod error;
pub mod fields;
mod key;
mod render;
mod schema;
mod state;
pub mod validation;
mod value;
pub mod widgets;

pub use binding::{FieldBinding, FieldWriter};
pub use error::{FormError, Result, ValidationErrors};
pub use key::FieldKey;
pub use render::{render_field, render_form};
pub use schema::{
    Condition, Control, ControlKind, Dependency, FieldDescriptor, Schema, SchemaBuilder,
};
pub use state::{FormState, FormValues};
pub use value::{FieldValue, OptionKey, OptionValue};
