//! Parsing of loosely-typed property objects.
//!
//! Owners often hold properties as a JSON object. Each component names the
//! keys it owns; those are deserialized into its typed props and every other
//! key is kept, in order, as a pass-through attribute.

use propkit_types::Attributes;
use propkit_util::partition;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Error raised when a property object cannot be interpreted.
#[derive(Debug, Error)]
pub enum PropsError {
    /// The properties were not a JSON object.
    #[error("properties must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    /// A component-owned key held a value of the wrong type.
    #[error("invalid property value: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Split `value` into typed props built from `owned_keys` and forwarded attributes.
pub(crate) fn split_props<T>(value: Value, owned_keys: &[&str]) -> Result<(T, Attributes), PropsError>
where
    T: DeserializeOwned,
{
    let object = match value {
        Value::Object(object) => object,
        other => {
            return Err(PropsError::NotAnObject {
                found: value_kind(&other),
            });
        }
    };
    let (owned, forwarded) = partition(object, owned_keys);
    let props = serde_json::from_value(Value::Object(owned))?;
    Ok((props, forwarded))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
