//! Typed field identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// The closed set of field identifiers of one form.
///
/// Usually a fieldless enum declared with [`field_keys!`](crate::field_keys).
/// `index` must return the position of the key within `ALL`; the schema
/// builder rejects keys that break this.
pub trait FieldKey: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every key of the form, in index order.
    const ALL: &'static [Self];

    /// The field name used in markup and submitted data.
    fn name(self) -> &'static str;

    /// Dense index of the key within `ALL`.
    fn index(self) -> usize;

    /// Looks up a key by its field name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }
}

/// Declares a fieldless enum implementing [`FieldKey`](crate::FieldKey).
///
/// ```rust
/// use controlkit_forms::{field_keys, FieldKey};
///
/// field_keys! {
///     /// Fields of the signup form.
///     pub enum Signup {
///         Username => "username",
///         Email => "email",
///     }
/// }
///
/// assert_eq!(Signup::Email.name(), "email");
/// assert_eq!(Signup::from_name("username"), Some(Signup::Username));
/// assert_eq!(Signup::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! field_keys {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $field:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::FieldKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $field),+
                }
            }

            fn index(self) -> usize {
                self as usize
            }
        }
    };
}
