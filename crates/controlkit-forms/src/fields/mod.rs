//! Shorthand constructors for common field descriptors.

mod select;
mod text;

pub use select::{autocomplete_field, choice_field, multiple_choice_field};
pub use text::{char_field, email_field, password_field, url_field};
