//! Text field shorthands.

use crate::key::FieldKey;
use crate::schema::{Control, FieldDescriptor};
use crate::validation::{LengthValidator, PatternValidator};
use crate::widgets::TextInput;

fn with_required<K: FieldKey>(field: FieldDescriptor<K>, required: bool) -> FieldDescriptor<K> {
    if required {
        field.required()
    } else {
        field
    }
}

/// Text input limited to `max_length` characters.
pub fn char_field<K: FieldKey>(
    key: K,
    label: &str,
    max_length: usize,
    required: bool,
) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(key, label, Control::Text(TextInput::new()))
        .validator(LengthValidator::max(max_length));
    with_required(field, required)
}

/// Email input.
pub fn email_field<K: FieldKey>(key: K, label: &str, required: bool) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(key, label, Control::Text(TextInput::email()))
        .validator(PatternValidator::email());
    with_required(field, required)
}

/// Required password input with an optional minimum length.
pub fn password_field<K: FieldKey>(
    key: K,
    label: &str,
    min_length: Option<usize>,
) -> FieldDescriptor<K> {
    let mut field =
        FieldDescriptor::new(key, label, Control::Text(TextInput::password())).required();

    if let Some(min) = min_length {
        field = field.validator(LengthValidator::min(min));
    }

    field
}

/// URL input.
pub fn url_field<K: FieldKey>(key: K, label: &str, required: bool) -> FieldDescriptor<K> {
    let field = FieldDescriptor::new(
        key,
        label,
        Control::Text(TextInput::new().placeholder("https://")),
    )
    .validator(PatternValidator::url());
    with_required(field, required)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ControlKind;

    crate::field_keys! {
        enum Account {
            Username => "username",
            Email => "email",
            Password => "password",
            Site => "site",
        }
    }

    #[test]
    fn test_char_field() {
        let field = char_field(Account::Username, "Username", 150, true);
        assert_eq!(field.name(), "username");
        assert!(field.required);
        assert_eq!(field.validators.len(), 1);
    }

    #[test]
    fn test_email_field() {
        let field = email_field(Account::Email, "Email", false);
        assert!(!field.required);
        assert_eq!(field.control.widget().input_type(), "email");
    }

    #[test]
    fn test_password_field() {
        let field = password_field(Account::Password, "Password", Some(8));
        assert!(field.required);
        assert_eq!(field.validators.len(), 1);
    }

    #[test]
    fn test_url_field() {
        let field = url_field(Account::Site, "Site", true);
        assert_eq!(field.control.kind(), ControlKind::Text);
        assert!(field.validators[0].validate("ftp://x").is_err());
    }
}
