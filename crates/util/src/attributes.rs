//! Attribute filtering.
//!
//! Components consume a fixed set of property names and forward everything
//! else to the rendered element. These helpers perform that split.

use indexmap::IndexMap;
use propkit_types::Attributes;
use serde_json::{Map, Value};

/// Remove every key in `keys` from `attributes`, preserving the order of the rest.
pub fn omit(mut attributes: Attributes, keys: &[&str]) -> Attributes {
    attributes.retain(|name, _| {
        let consumed = keys.contains(&name.as_str());
        if consumed {
            tracing::trace!(attribute = %name, "dropping consumed attribute");
        }
        !consumed
    });
    attributes
}

/// Split a property object into the entries named in `keys` and the rest.
///
/// Returns `(consumed, forwarded)`; both keep the input order.
pub fn partition(props: Map<String, Value>, keys: &[&str]) -> (Map<String, Value>, Attributes) {
    let mut consumed = Map::new();
    let mut forwarded = IndexMap::new();
    for (name, value) in props {
        if keys.contains(&name.as_str()) {
            consumed.insert(name, value);
        } else {
            forwarded.insert(name, value);
        }
    }
    (consumed, forwarded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omit_keeps_order_of_remaining_keys() {
        let mut attributes = Attributes::new();
        attributes.insert("rows".into(), json!(3));
        attributes.insert("setProps".into(), json!(null));
        attributes.insert("data-test".into(), json!("x"));
        attributes.insert("placeholder".into(), json!("Type"));

        let attributes = omit(attributes, &["setProps"]);
        let keys: Vec<_> = attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["rows", "data-test", "placeholder"]);
    }

    #[test]
    fn partition_splits_consumed_from_forwarded() {
        let props = json!({"value": "a", "id": "notes", "debounce": true})
            .as_object()
            .cloned()
            .expect("object");
        let (consumed, forwarded) = partition(props, &["value", "debounce"]);
        assert_eq!(consumed.len(), 2);
        assert_eq!(forwarded.get("id"), Some(&json!("notes")));
        assert!(!forwarded.contains_key("value"));
    }
}
