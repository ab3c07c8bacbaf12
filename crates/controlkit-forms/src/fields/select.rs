//! Selection field shorthands.

use crate::key::FieldKey;
use crate::schema::{Control, FieldDescriptor};
use crate::value::OptionValue;
use crate::widgets::{Autocomplete, MultiSelect, Select};

/// Single select (dropdown) with a blank entry.
pub fn choice_field<K: FieldKey>(
    key: K,
    label: &str,
    options: Vec<OptionValue>,
    required: bool,
) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(key, label, Control::Select(Select::new(options)));
    if required {
        field.required()
    } else {
        field
    }
}

/// Autocomplete over `options`; clearing it yields the empty-string sentinel.
pub fn autocomplete_field<K: FieldKey>(
    key: K,
    label: &str,
    options: Vec<OptionValue>,
    required: bool,
) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(
        key,
        label,
        Control::Autocomplete(Autocomplete::new(options)),
    );
    if required {
        field.required()
    } else {
        field
    }
}

/// Multi-select over a list of labels.
pub fn multiple_choice_field<K: FieldKey>(
    key: K,
    label: &str,
    names: Vec<String>,
    required: bool,
) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(key, label, Control::MultiSelect(MultiSelect::new(names)));
    if required {
        field.required()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ControlKind;

    crate::field_keys! {
        enum Post {
            Status => "status",
            Author => "author",
            Tags => "tags",
        }
    }

    #[test]
    fn test_choice_field() {
        let options = vec![OptionValue::new("Draft", "draft"), OptionValue::new("Published", "published")];
        let field = choice_field(Post::Status, "Status", options, true);
        assert_eq!(field.name(), "status");
        assert!(field.required);
        assert_eq!(field.control.options().len(), 2);
    }

    #[test]
    fn test_autocomplete_field() {
        let field = autocomplete_field(Post::Author, "Author", vec![OptionValue::new("Ana", 1)], false);
        assert_eq!(field.control.kind(), ControlKind::Autocomplete);
        assert!(field.default_value().is_sentinel());
    }

    #[test]
    fn test_multiple_choice_field() {
        let field = multiple_choice_field(Post::Tags, "Tags", vec!["rust".into(), "web".into()], false);
        assert_eq!(field.control.labels().len(), 2);
        assert!(!field.required);
        assert!(field.default_value().labels().is_some_and(<[String]>::is_empty));
    }
}
