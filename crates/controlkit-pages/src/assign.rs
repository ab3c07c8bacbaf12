//! `field=value` assignments addressed to a page's form.

use controlkit_forms::{FieldKey, Schema};

use crate::error::{PageError, Result};

/// Resolves field names to keys, ordered so that every prerequisite is
/// applied before the fields that depend on it. Fields at the same depth
/// keep their position in the form; repeated fields keep command-line order.
pub fn resolve<'a, K: FieldKey>(
    page: &'static str,
    schema: &Schema<K>,
    assignments: &'a [(String, String)],
) -> Result<Vec<(K, &'a str)>> {
    let mut resolved = assignments
        .iter()
        .map(|(name, raw)| {
            K::from_name(name)
                .map(|key| (key, raw.as_str()))
                .ok_or_else(|| PageError::UnknownField {
                    page,
                    field: name.clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    resolved.sort_by_key(|(key, _)| (depth(schema, *key), key.index()));
    Ok(resolved)
}

/// Length of the longest prerequisite chain below `key`. Schemas are acyclic.
fn depth<K: FieldKey>(schema: &Schema<K>, key: K) -> usize {
    schema
        .prerequisites_of(key)
        .into_iter()
        .map(|prerequisite| depth(schema, prerequisite) + 1)
        .max()
        .unwrap_or(0)
}

/// Parses `field=value`; the value may itself contain `=`.
pub fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid assignment `{s}`: expected FIELD=VALUE"))?;
    if field.is_empty() {
        return Err(format!("invalid assignment `{s}`: empty field name"));
    }
    Ok((field.to_string(), value.to_string()))
}
