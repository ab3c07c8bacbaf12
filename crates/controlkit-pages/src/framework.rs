//! Framework admin page: one create-framework form per tab.

use std::sync::Arc;

use controlkit_forms::fields::char_field;
use controlkit_forms::{field_keys, render_form, FormState, Schema, ValidationErrors};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::assign;
use crate::config::PageData;
use crate::error::Result;
use crate::tabs::TabSet;

field_keys! {
    /// Fields of the create-framework form.
    pub enum FrameworkField {
        Nome => "nome",
    }
}

/// A framework creation request ready to be sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkRequest {
    /// Target endpoint, one per tab.
    pub endpoint: String,
    /// JSON body.
    pub body: serde_json::Value,
}

/// The framework admin page.
#[derive(Debug)]
pub struct FrameworkAdminPage {
    tabs: TabSet,
    forms: Vec<FormState<FrameworkField>>,
}

impl FrameworkAdminPage {
    /// Page name used on the command line.
    pub const NAME: &'static str = "framework";
    /// Page title.
    pub const TITLE: &'static str = "Frameworks";

    /// Creates the page with one empty form per configured tab.
    pub fn new(data: &PageData) -> Result<Self> {
        let schema = Arc::new(
            Schema::builder()
                .field(char_field(FrameworkField::Nome, "Nome", 100, true))
                .build()?,
        );
        let tabs = TabSet::new(data.framework_tabs.iter().cloned())?;
        let forms = (0..tabs.len())
            .map(|_| FormState::new(Arc::clone(&schema)))
            .collect();
        Ok(Self { tabs, forms })
    }

    /// The tab set.
    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    /// Switches to tab `index`. Each tab keeps its own form.
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        self.tabs.select(index)
    }

    /// The active tab's form.
    pub fn form(&self) -> &FormState<FrameworkField> {
        &self.forms[self.tabs.active()]
    }

    /// Endpoint of the active tab.
    pub fn endpoint(&self) -> String {
        endpoint_for(&self.tabs.active_slug())
    }

    /// Applies a raw value to the active tab's form.
    pub fn apply(&mut self, field: FrameworkField, raw: &str) -> Result<()> {
        let active = self.tabs.active();
        self.forms[active].bind(field).apply_raw(raw)?;
        Ok(())
    }

    /// Applies `field=value` assignments to the active tab's form.
    pub fn apply_all(&mut self, assignments: &[(String, String)]) -> Result<()> {
        let schema = self.forms[self.tabs.active()].schema();
        let resolved = assign::resolve(Self::NAME, schema, assignments)?;
        for (field, raw) in resolved {
            self.apply(field, raw)?;
        }
        Ok(())
    }

    /// Renders the tab strip and the active tab's form.
    pub fn render(&self) -> String {
        let endpoint = self.endpoint();
        self.tabs.render(|index| {
            render_form(&self.forms[index], &endpoint, "post", "Salvar")
        })
    }

    /// Submits the active tab's form.
    pub fn submit(&mut self) -> std::result::Result<FrameworkRequest, ValidationErrors> {
        let endpoint = self.endpoint();
        let tab = self.tabs.active_label().to_string();
        let form = &mut self.forms[self.tabs.active()];

        form.submit(
            |values| {
                let nome = values.text(FrameworkField::Nome).unwrap_or_default();
                info!(tab = %tab, endpoint = %endpoint, "framework form accepted");
                Ok(FrameworkRequest {
                    body: json!({ "nome": nome }),
                    endpoint,
                })
            },
            |errors| {
                warn!(tab = %tab, "invalid framework form");
                Err(errors.clone())
            },
        )
    }
}

fn endpoint_for(slug: &str) -> String {
    format!("/docker/framework/{slug}/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> FrameworkAdminPage {
        FrameworkAdminPage::new(&PageData::default()).unwrap()
    }

    #[test]
    fn test_endpoint_per_tab() {
        let mut page = page();
        assert_eq!(page.endpoint(), "/docker/framework/frontend/");
        page.select_tab(2).unwrap();
        assert_eq!(page.endpoint(), "/docker/framework/mobile/");
    }

    #[test]
    fn test_submit_valid() {
        let mut page = page();
        page.select_tab(1).unwrap();
        page.apply(FrameworkField::Nome, "Laravel").unwrap();
        let request = page.submit().unwrap();
        assert_eq!(request.endpoint, "/docker/framework/backend/");
        assert_eq!(request.body, json!({"nome": "Laravel"}));
    }

    #[test]
    fn test_submit_empty_keeps_value() {
        let mut page = page();
        let errors = page.submit().unwrap_err();
        assert_eq!(
            errors.get("nome"),
            Some(&vec!["This field is required.".to_string()])
        );
        assert!(page.form().value(FrameworkField::Nome).is_sentinel());
    }

    #[test]
    fn test_tabs_keep_separate_forms() {
        let mut page = page();
        page.apply(FrameworkField::Nome, "React").unwrap();
        page.select_tab(2).unwrap();
        assert_eq!(page.form().text(FrameworkField::Nome), "");
        page.select_tab(0).unwrap();
        assert_eq!(page.form().text(FrameworkField::Nome), "React");
    }

    #[test]
    fn test_render() {
        let html = page().render();
        assert!(html.contains("nav-tabs"));
        assert!(html.contains(r#"action="/docker/framework/frontend/""#));
        assert!(html.contains("Salvar"));
    }
}
