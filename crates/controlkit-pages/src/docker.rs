//! Docker project page: the project form with its derived and dependent
//! fields.

use controlkit_forms::fields::{autocomplete_field, char_field, multiple_choice_field};
use controlkit_forms::validation::PredicateValidator;
use controlkit_forms::widgets::TextInput;
use controlkit_forms::{
    field_keys, render_form, Control, FieldDescriptor, FieldValue, FieldWriter, FormState,
    FormValues, OptionValue, Schema, ValidationErrors,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::assign;
use crate::config::PageData;
use crate::error::Result;
use crate::slug::slugify;

field_keys! {
    /// Fields of the Docker project form.
    pub enum DockerField {
        ProjectName => "nome_projeto",
        ContainerName => "nome_container",
        Framework => "framework",
        FrameworkVersion => "versao_framework",
        Libraries => "bibliotecas",
        Language => "linguagem",
        LanguageVersion => "versao_linguagem",
    }
}

fn version_options(versions: &[String]) -> Vec<OptionValue> {
    versions
        .iter()
        .map(|v| OptionValue::labelled(v.as_str()))
        .collect()
}

/// Builds the project form's schema from the page data.
pub fn docker_schema(data: &PageData) -> Result<Schema<DockerField>> {
    let schema = Schema::builder()
        .field(char_field(DockerField::ProjectName, "Nome do Projeto", 100, true))
        .field(
            FieldDescriptor::new(
                DockerField::ContainerName,
                "Nome do Container",
                Control::Text(TextInput::new().start_adornment("docker/")),
            )
            .help_text("Gerado a partir do nome do projeto.")
            .validator(PredicateValidator::new(
                |name| slugify(name) == name,
                "Use apenas letras minúsculas, números e hífens.",
            )),
        )
        .field(autocomplete_field(
            DockerField::Framework,
            "Framework",
            data.frameworks.iter().map(|f| f.option()).collect(),
            true,
        ))
        .field(
            autocomplete_field(
                DockerField::FrameworkVersion,
                "Versão",
                version_options(&data.framework_versions),
                false,
            )
            .disabled_until_set(DockerField::Framework),
        )
        .field(multiple_choice_field(
            DockerField::Libraries,
            "Bibliotecas",
            data.libraries.clone(),
            false,
        ))
        .field(autocomplete_field(
            DockerField::Language,
            "Linguagem",
            data.languages.iter().map(|l| l.option()).collect(),
            false,
        ))
        .field(
            autocomplete_field(
                DockerField::LanguageVersion,
                "Versão",
                version_options(&data.language_versions),
                false,
            )
            .disabled_until_set(DockerField::Language),
        )
        .build()?;
    Ok(schema)
}

fn derive_container_name(raw: &str, writer: &mut FieldWriter<'_, DockerField>) {
    let slug = slugify(raw);
    debug!(slug = %slug, "container name derived");
    if let Err(err) = writer.set(DockerField::ContainerName, slug) {
        warn!(%err, "container name not derived");
    }
}

/// What a valid project form submits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DockerProjectRequest {
    /// Project name as typed.
    pub project_name: String,
    /// Container name.
    pub container_name: String,
    /// Selected framework.
    pub framework: Option<OptionValue>,
    /// Selected framework version.
    pub framework_version: Option<String>,
    /// Selected libraries.
    pub libraries: Vec<String>,
    /// Selected language.
    pub language: Option<OptionValue>,
    /// Selected language version.
    pub language_version: Option<String>,
}

fn text_of(values: &FormValues<DockerField>, key: DockerField) -> String {
    values.text(key).map(|t| t.into_owned()).unwrap_or_default()
}

fn optional_text(values: &FormValues<DockerField>, key: DockerField) -> Option<String> {
    values
        .text(key)
        .filter(|t| !t.is_empty())
        .map(|t| t.into_owned())
}

impl DockerProjectRequest {
    /// Builds the request from submitted values.
    pub fn from_values(values: &FormValues<DockerField>) -> Self {
        let choice = |key| values.get(key).and_then(FieldValue::choice).cloned();
        Self {
            project_name: text_of(values, DockerField::ProjectName),
            container_name: text_of(values, DockerField::ContainerName),
            framework: choice(DockerField::Framework),
            framework_version: optional_text(values, DockerField::FrameworkVersion),
            libraries: values
                .get(DockerField::Libraries)
                .and_then(FieldValue::labels)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            language: choice(DockerField::Language),
            language_version: optional_text(values, DockerField::LanguageVersion),
        }
    }
}

/// The project page.
#[derive(Debug)]
pub struct DockerProjectPage {
    state: FormState<DockerField>,
}

impl DockerProjectPage {
    /// Page name used on the command line.
    pub const NAME: &'static str = "docker";
    /// Page title.
    pub const TITLE: &'static str = "Projeto Docker";
    /// Form action.
    pub const ACTION: &'static str = "/docker/";

    /// Creates the page with an empty form.
    pub fn new(data: &PageData) -> Result<Self> {
        Ok(Self {
            state: FormState::new(docker_schema(data)?),
        })
    }

    /// The form state.
    pub fn state(&self) -> &FormState<DockerField> {
        &self.state
    }

    /// Applies a raw form value to one field. Editing the project name
    /// also rewrites the container name.
    pub fn apply(&mut self, field: DockerField, raw: &str) -> Result<()> {
        let mut binding = self.state.bind(field);
        match field {
            DockerField::ProjectName => binding.on_change(derive_container_name).apply_raw(raw)?,
            _ => binding.apply_raw(raw)?,
        }
        Ok(())
    }

    /// Applies `field=value` assignments, prerequisites first.
    pub fn apply_all(&mut self, assignments: &[(String, String)]) -> Result<()> {
        let resolved = assign::resolve(Self::NAME, self.state.schema(), assignments)?;
        for (field, raw) in resolved {
            self.apply(field, raw)?;
        }
        Ok(())
    }

    /// Renders the form.
    pub fn render(&self) -> String {
        let form = render_form(&self.state, Self::ACTION, "post", "Gerar Docker");
        format!(r#"<div class="card"><div class="card-body">{form}</div></div>"#)
    }

    /// Submits the form.
    pub fn submit(&mut self) -> std::result::Result<DockerProjectRequest, ValidationErrors> {
        self.state.submit(
            |values| Ok(DockerProjectRequest::from_values(values)),
            |errors| Err(errors.clone()),
        )
    }
}
