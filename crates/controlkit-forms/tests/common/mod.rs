#![allow(dead_code)]

use controlkit_forms::widgets::{Autocomplete, MultiSelect, TextInput};
use controlkit_forms::{field_keys, Control, FieldDescriptor, FormState, OptionValue, Schema};

field_keys! {
    pub enum Project {
        Name => "nome",
        Framework => "framework",
        Version => "versao",
        Libraries => "bibliotecas",
    }
}

pub const LIBRARIES: [&str; 4] = ["Material UI", "Alpine.JS", "Driver.JS", "Swipper.JS"];

pub fn schema() -> Schema<Project> {
    Schema::builder()
        .field(
            FieldDescriptor::new(Project::Name, "Nome do Projeto", Control::Text(TextInput::new()))
                .required(),
        )
        .field(FieldDescriptor::new(
            Project::Framework,
            "Framework",
            Control::Autocomplete(Autocomplete::new(vec![
                OptionValue::new("React", 1),
                OptionValue::new("Angular", 2),
            ])),
        ))
        .field(
            FieldDescriptor::new(
                Project::Version,
                "Versão",
                Control::Autocomplete(Autocomplete::new(vec![OptionValue::labelled("18.0")])),
            )
            .required()
            .disabled_until_set(Project::Framework),
        )
        .field(FieldDescriptor::new(
            Project::Libraries,
            "Bibliotecas",
            Control::MultiSelect(MultiSelect::new(
                LIBRARIES.iter().map(|l| l.to_string()).collect(),
            )),
        ))
        .build()
        .unwrap_or_else(|e| panic!("schema failed to build: {e}"))
}

pub fn state() -> FormState<Project> {
    FormState::new(schema())
}
