//! HTML rendering of element descriptions.
//!
//! Produces static markup for an [`Element`]. Attribute names follow the
//! React-style camelCase convention on input (`maxLength`, `readOnly`) and are
//! lowered to their HTML spelling; `style` objects become inline CSS.

use heck::ToKebabCase;
use propkit_types::{Child, Element, is_valid_tag_name};
use serde_json::{Map, Value};

/// Render `element` and its children as HTML markup.
///
/// # Example
/// ```rust
/// use propkit_types::Element;
/// use propkit_util::to_html;
///
/// let mut element = Element::new("textarea");
/// element.class_name = "form-control".into();
/// element.value = Some("a < b".into());
/// assert_eq!(to_html(&element), r#"<textarea class="form-control">a &lt; b</textarea>"#);
/// ```
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if !is_valid_tag_name(&element.tag) {
        tracing::debug!(tag = %element.tag, "skipping element with an invalid tag name");
        return;
    }
    out.push('<');
    out.push_str(&element.tag);
    let class = class_list(element);
    if !class.is_empty() {
        push_attribute(out, "class", &class);
    }
    for (name, value) in &element.attributes {
        if is_class_attribute(name) {
            continue;
        }
        write_attribute(out, name, value);
    }
    out.push('>');
    if let Some(value) = &element.value {
        out.push_str(&escape(value));
    }
    for child in &element.children {
        match child {
            Child::Text(text) => out.push_str(&escape(text)),
            Child::Element(child) => write_element(child, out),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// The computed class list followed by any forwarded `class`/`className`
/// attribute, so the element carries a single `class`.
fn class_list(element: &Element) -> String {
    let forwarded = element
        .attributes
        .iter()
        .filter(|(name, _)| is_class_attribute(name))
        .filter_map(|(_, value)| value.as_str())
        .map(str::trim)
        .filter(|class| !class.is_empty());
    std::iter::once(element.class_name.trim())
        .filter(|class| !class.is_empty())
        .chain(forwarded)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_class_attribute(name: &str) -> bool {
    name.eq_ignore_ascii_case("class") || name == "className"
}

/// Attribute names may not contain whitespace, controls, quotes, `>`, `/`,
/// `=` or `<`.
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<'))
}

fn write_attribute(out: &mut String, name: &str, value: &Value) {
    if !is_valid_attribute_name(name) {
        tracing::debug!(attribute = %name, "skipping attribute with an invalid name");
        return;
    }
    let name = attribute_name(name);
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => {
            out.push(' ');
            out.push_str(&name);
        }
        Value::String(text) => push_attribute(out, &name, text),
        Value::Number(number) => push_attribute(out, &name, &number.to_string()),
        Value::Object(declarations) if name == "style" => push_attribute(out, &name, &style_text(declarations)),
        other => push_attribute(out, &name, &other.to_string()),
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn attribute_name(name: &str) -> String {
    match name {
        "htmlFor" => "for".to_string(),
        _ => name.to_ascii_lowercase(),
    }
}

/// Inline CSS for a style object, e.g. `{"fontSize": "12px"}` -> `font-size: 12px;`.
fn style_text(declarations: &Map<String, Value>) -> String {
    declarations
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(property, value)| {
            let value = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            format!("{}: {};", css_property(property), value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn css_property(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    let kebab = property.to_kebab_case();
    // Vendor prefixes arrive capitalised (`WebkitTransition`).
    if property.starts_with(|c: char| c.is_ascii_uppercase()) {
        format!("-{kebab}")
    } else {
        kebab
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
