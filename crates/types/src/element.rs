//! Description of a rendered native element.
//!
//! Components do not mount anything themselves; `render` produces an
//! [`Element`] that the host framework turns into real markup or widgets.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Attributes;

/// A rendered element: tag, computed class list, content and forwarded attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    /// Native tag name (e.g. `textarea`, `a`).
    pub tag: String,
    /// Space separated class list; empty when no class applies.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class_name: String,
    /// Controlled text content, for form controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Attributes forwarded verbatim from the owner.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "deserialize_children")]
    pub children: Vec<Child>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Look up a forwarded attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// Child content of an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Element(Element),
}

impl Child {
    /// Interpret a loosely-typed child value.
    ///
    /// Strings, numbers and booleans become text, objects become elements and
    /// `null` produces nothing.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text)),
            Value::Number(number) => Some(Self::Text(number.to_string())),
            Value::Bool(flag) => Some(Self::Text(flag.to_string())),
            Value::Object(_) => match serde_json::from_value::<Element>(value) {
                Ok(element) if is_valid_tag_name(&element.tag) => Some(Self::Element(element)),
                Ok(element) => {
                    tracing::debug!(tag = %element.tag, "ignoring child with an invalid tag name");
                    None
                }
                Err(error) => {
                    tracing::debug!(%error, "ignoring child that is not an element");
                    None
                }
            },
            Value::Array(_) => None,
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// Whether `tag` is a plain element name: an ASCII letter followed by ASCII
/// letters, digits or hyphens.
pub fn is_valid_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric() || c == '-'),
        _ => false,
    }
}

/// Flatten a children value into a list.
///
/// Accepts a single child or an array of children (nested arrays are flattened).
pub fn children_from_value(value: Value) -> Vec<Child> {
    let mut children = Vec::new();
    collect_children(value, &mut children);
    children
}

fn collect_children(value: Value, out: &mut Vec<Child>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect_children(item, out);
            }
        }
        other => out.extend(Child::from_value(other)),
    }
}

/// Serde adapter for fields holding children in any of the shapes accepted by
/// [`children_from_value`].
pub fn deserialize_children<'de, D>(deserializer: D) -> Result<Vec<Child>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(children_from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn children_accept_scalars_arrays_and_elements() {
        let children = children_from_value(json!(["Home", 2, null, [{"tag": "span", "children": "icon"}]]));
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], Child::Text("Home".into()));
        assert_eq!(children[1], Child::Text("2".into()));
        match &children[2] {
            Child::Element(element) => {
                assert_eq!(element.tag, "span");
                assert_eq!(element.children, vec![Child::Text("icon".into())]);
            }
            other => panic!("expected element child, got {other:?}"),
        }
    }

    #[test]
    fn children_with_bad_tags_are_dropped() {
        let children = children_from_value(json!([
            {"tag": "img src=x onerror=alert(1)"},
            {"children": "no tag"},
            {"tag": "my-icon", "children": [{"tag": "b>"}, "ok"]}
        ]));
        assert_eq!(children.len(), 1);
        match &children[0] {
            Child::Element(element) => {
                assert_eq!(element.tag, "my-icon");
                assert_eq!(element.children, vec![Child::Text("ok".into())]);
            }
            other => panic!("expected element child, got {other:?}"),
        }
    }

    #[test]
    fn tag_names_follow_element_grammar() {
        assert!(is_valid_tag_name("a"));
        assert!(is_valid_tag_name("h1"));
        assert!(is_valid_tag_name("custom-element"));
        assert!(!is_valid_tag_name(""));
        assert!(!is_valid_tag_name("1h"));
        assert!(!is_valid_tag_name("img src=x"));
        assert!(!is_valid_tag_name("span>"));
    }

    #[test]
    fn element_serialization_skips_empty_parts() {
        let element = Element::new("textarea");
        assert_eq!(serde_json::to_value(&element).expect("serialize"), json!({"tag": "textarea"}));
    }
}
