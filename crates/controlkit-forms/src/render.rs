//! Bootstrap 5 rendering of bound fields and whole forms.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Div;

use crate::key::FieldKey;
use crate::state::FormState;

/// Renders one field: label, control, errors of a touched field, help text.
pub fn render_field<K: FieldKey>(state: &FormState<K>, key: K) -> String {
    let field = state.schema().descriptor(key);
    let name = key.name();
    let errors: &[String] = if state.is_touched(key) {
        state.field_errors(key)
    } else {
        &[]
    };

    let mut attrs = field.attrs.clone();
    let id = attrs.id_for(name);
    attrs.set("id", &id);

    if !errors.is_empty() {
        attrs.add_class("is-invalid");
    }

    if state.is_disabled(key) {
        attrs.set("disabled", "disabled");
    }

    if field.required {
        attrs.set("required", "required");
    }

    let required_marker = if field.required { " *" } else { "" };
    let label_text = format!("{}{}", field.label, required_marker);
    let widget_html = field
        .control
        .widget()
        .render(name, state.value(key), &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    let help_text = field.help_text.clone();

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .children(errors, |error, div: Element<Div>| {
            div.class("invalid-feedback d-block").text(error)
        })
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-text")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

/// Renders every field of the form followed by a submit button.
pub fn render_form<K: FieldKey>(
    state: &FormState<K>,
    action: &str,
    method: &str,
    submit_label: &str,
) -> String {
    let mut form = html! {
        form.action(#action).method(#method)
    };

    for field in state.schema().fields() {
        let field_html = render_field(state, field.key);
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    form = form.child::<Div, _>(|d| {
        let btn = html! {
            button.type_("submit").class("btn btn-primary") {
                #submit_label
            }
        };
        d.raw(btn.render())
    });

    form.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Control, FieldDescriptor, Schema};
    use crate::value::OptionValue;
    use crate::widgets::{Autocomplete, TextInput};

    crate::field_keys! {
        enum Tab {
            Nome => "nome",
            Linguagem => "linguagem",
            Versao => "versao",
        }
    }

    fn state() -> FormState<Tab> {
        let schema = Schema::builder()
            .field(
                FieldDescriptor::new(Tab::Nome, "Nome", Control::Text(TextInput::new()))
                    .required()
                    .help_text("Nome do framework"),
            )
            .field(FieldDescriptor::new(
                Tab::Linguagem,
                "Linguagem",
                Control::Autocomplete(Autocomplete::new(vec![OptionValue::new("Node", 1)])),
            ))
            .field(
                FieldDescriptor::new(
                    Tab::Versao,
                    "Versão",
                    Control::Autocomplete(Autocomplete::new(vec![
                        OptionValue::labelled("18.0"),
                        OptionValue::labelled("20.0"),
                    ])),
                )
                .disabled_until_set(Tab::Linguagem),
            )
            .build()
            .unwrap();
        FormState::new(schema)
    }

    #[test]
    fn test_render_field_untouched() {
        let state = state();
        let html = render_field(&state, Tab::Nome);
        assert!(html.contains("form-label"));
        assert!(html.contains("Nome *"));
        assert!(html.contains("Nome do framework"));
        assert!(html.contains(r#"required="required""#));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_render_field_after_blur() {
        let mut state = state();
        state.bind(Tab::Nome).blur();
        let html = render_field(&state, Tab::Nome);
        assert!(html.contains("is-invalid"));
        assert!(html.contains("This field is required."));
    }

    #[test]
    fn test_disabled_dependent_still_lists_options() {
        let state = state();
        let html = render_field(&state, Tab::Versao);
        assert!(html.contains(r#"disabled="disabled""#));
        assert!(html.contains(r#"<option value="18.0""#));
        assert!(html.contains(r#"<option value="20.0""#));
    }

    #[test]
    fn test_render_form() {
        let mut state = state();
        state.submit(|_| (), |_| ());
        let html = render_form(&state, "/docker/framework/frontend/", "post", "Salvar");
        assert!(html.contains("Salvar"));
        assert!(html.contains("id_nome"));
        assert!(html.contains("id_linguagem"));
        assert!(html.contains("This field is required."));
    }
}
