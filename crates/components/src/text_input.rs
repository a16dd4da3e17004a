//! Multi-line text input backed by a native `textarea`.
//!
//! The owner controls the value: every property update re-seeds the draft
//! shown in the field. Without debounce each keystroke is reported straight
//! away and the owner is expected to echo it back. With debounce keystrokes
//! only touch the local draft, and the draft is reported on blur.

use std::fmt;
use std::rc::Rc;

use propkit_types::{Attributes, Element, NEVER, PropUpdate, PropsListener};
use propkit_util::{ClassNames, Clock, SystemClock, next_timestamp, omit};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::component::Component;
use crate::props::{PropsError, split_props};

/// Property names consumed by [`TextInput`]; none of them reach the element.
pub const TEXT_INPUT_OWNED_KEYS: &[&str] = &[
    "value",
    "valid",
    "invalid",
    "bs_size",
    "size",
    "className",
    "debounce",
    "n_blur",
    "n_blur_timestamp",
    "n_clicks",
    "n_clicks_timestamp",
    "n_submit",
    "n_submit_timestamp",
    "setProps",
];

/// Properties of a [`TextInput`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextInputProps {
    /// Text shown in the field.
    pub value: Option<String>,
    /// Apply the valid style.
    pub valid: bool,
    /// Apply the invalid style.
    pub invalid: bool,
    /// Size suffix for the `form-control-<size>` class (e.g. `sm`, `lg`).
    #[serde(rename = "bs_size", alias = "size")]
    pub size: Option<String>,
    /// Caller supplied classes, placed before the computed ones.
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    /// Hold value changes until the field loses focus.
    pub debounce: bool,
    pub n_blur: u64,
    pub n_blur_timestamp: i64,
    pub n_clicks: u64,
    pub n_clicks_timestamp: i64,
    /// Native attributes forwarded verbatim (placeholder, rows, cols, ...).
    #[serde(skip)]
    pub attributes: Attributes,
}

impl Default for TextInputProps {
    fn default() -> Self {
        Self {
            value: None,
            valid: false,
            invalid: false,
            size: None,
            class_name: None,
            debounce: false,
            n_blur: 0,
            n_blur_timestamp: NEVER,
            n_clicks: 0,
            n_clicks_timestamp: NEVER,
            attributes: Attributes::new(),
        }
    }
}

impl TextInputProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build props from a JSON property object.
    ///
    /// Keys in [`TEXT_INPUT_OWNED_KEYS`] are interpreted; every other key is
    /// kept as a pass-through attribute.
    pub fn from_value(mut value: Value) -> Result<Self, PropsError> {
        // `bs_size` wins when both spellings are given.
        if let Value::Object(map) = &mut value
            && map.contains_key("bs_size")
            && let Some(size) = map.shift_remove("size")
        {
            debug!(%size, "ignoring `size` alongside `bs_size`");
        }
        let (mut props, attributes): (Self, Attributes) = split_props(value, TEXT_INPUT_OWNED_KEYS)?;
        props.attributes = attributes;
        Ok(props)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_blur_count(mut self, count: u64, timestamp: i64) -> Self {
        self.n_blur = count;
        self.n_blur_timestamp = timestamp;
        self
    }

    pub fn with_click_count(mut self, count: u64, timestamp: i64) -> Self {
        self.n_clicks = count;
        self.n_clicks_timestamp = timestamp;
        self
    }

    /// Add a pass-through attribute. Owned property names are ignored.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if TEXT_INPUT_OWNED_KEYS.contains(&name.as_str()) {
            debug!(attribute = %name, "ignoring owned property passed as attribute");
            return self;
        }
        self.attributes.insert(name, value.into());
        self
    }

    /// Replace the pass-through attributes, dropping any owned property names.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = omit(attributes, TEXT_INPUT_OWNED_KEYS);
        self
    }

    /// Class list derived from the style flags.
    pub fn class_names(&self) -> String {
        ClassNames::new()
            .add_opt(self.class_name.as_deref())
            .add_if(self.invalid, "is-invalid")
            .add_if(self.valid, "is-valid")
            .add_opt(self.size.as_deref().filter(|size| !size.is_empty()).map(|size| format!("form-control-{size}")))
            .add("form-control")
            .build()
    }
}

/// Multi-line text input component.
pub struct TextInput {
    props: TextInputProps,
    /// Draft shown in the field; re-seeded from `props.value` on every update.
    value: Option<String>,
    listener: Option<Box<dyn PropsListener>>,
    clock: Rc<dyn Clock>,
}

impl TextInput {
    pub fn new(props: TextInputProps) -> Self {
        Self {
            value: props.value.clone(),
            props,
            listener: None,
            clock: Rc::new(SystemClock),
        }
    }

    pub fn with_listener(mut self, listener: impl PropsListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Attach or detach the owner's listener.
    pub fn set_listener(&mut self, listener: Option<Box<dyn PropsListener>>) {
        self.listener = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Text currently displayed in the field.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// A keystroke changed the field's content to `new_value`.
    pub fn on_change(&mut self, new_value: impl Into<String>) {
        let new_value = new_value.into();
        match self.listener.as_mut() {
            Some(listener) if !self.props.debounce => {
                debug!(len = new_value.len(), "reporting value change");
                listener.set_props(PropUpdate::value(new_value));
            }
            _ => {
                trace!(debounce = self.props.debounce, "keeping value change as local draft");
                self.value = Some(new_value);
            }
        }
    }

    /// The field lost focus.
    pub fn on_blur(&mut self) {
        let timestamp = next_timestamp(self.clock.as_ref(), self.props.n_blur_timestamp);
        let mut update = PropUpdate::blur(self.props.n_blur.saturating_add(1), timestamp);
        if self.props.debounce {
            update = update.with_value(self.value.clone());
        }
        self.notify(update);
    }

    /// The field was clicked.
    pub fn on_click(&mut self) {
        let timestamp = next_timestamp(self.clock.as_ref(), self.props.n_clicks_timestamp);
        self.notify(PropUpdate::clicks(self.props.n_clicks.saturating_add(1), timestamp));
    }

    fn notify(&mut self, update: PropUpdate) {
        match self.listener.as_mut() {
            Some(listener) => {
                debug!(?update, "text input notifying owner");
                listener.set_props(update);
            }
            None => trace!(?update, "no listener attached; dropping notification"),
        }
    }
}

impl Component for TextInput {
    type Props = TextInputProps;

    fn props(&self) -> &TextInputProps {
        &self.props
    }

    fn receive_props(&mut self, props: TextInputProps) {
        if self.props.debounce && self.value != self.props.value {
            debug!("owner update replaces an unsent draft");
        }
        self.value = props.value.clone();
        self.props = props;
    }

    fn render(&self) -> Element {
        Element {
            tag: "textarea".to_string(),
            class_name: self.props.class_names(),
            value: self.value.clone(),
            attributes: self.props.attributes.clone(),
            children: Vec::new(),
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("props", &self.props)
            .field("value", &self.value)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propkit_types::NotificationLog;
    use propkit_util::ManualClock;
    use serde_json::json;

    fn input_with_log(props: TextInputProps) -> (TextInput, NotificationLog, Rc<ManualClock>) {
        let log = NotificationLog::new();
        let clock = Rc::new(ManualClock::new(1_000));
        let input = TextInput::new(props).with_listener(log.clone()).with_clock(clock.clone());
        (input, log, clock)
    }

    #[test]
    fn classes_compose_in_order() {
        let props = TextInputProps::new()
            .with_class_name("notes")
            .with_invalid(true)
            .with_valid(true)
            .with_size("lg");
        assert_eq!(props.class_names(), "notes is-invalid is-valid form-control-lg form-control");
        assert_eq!(TextInputProps::new().class_names(), "form-control");
    }

    #[test]
    fn from_value_reads_owned_keys_and_defaults() {
        let props = TextInputProps::from_value(json!({
            "value": "hello",
            "size": "sm",
            "debounce": true,
            "n_submit": 4,
            "setProps": null,
            "placeholder": "Write here",
            "rows": 3
        }))
        .expect("valid props");

        assert_eq!(props.value.as_deref(), Some("hello"));
        assert_eq!(props.size.as_deref(), Some("sm"));
        assert!(props.debounce);
        assert_eq!(props.n_blur, 0);
        assert_eq!(props.n_blur_timestamp, NEVER);
        assert_eq!(props.n_clicks_timestamp, NEVER);
        let keys: Vec<_> = props.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["placeholder", "rows"]);
    }

    #[test]
    fn bs_size_takes_precedence_over_size() {
        let props = TextInputProps::from_value(json!({"bs_size": "sm", "size": "lg"})).expect("valid props");
        assert_eq!(props.size.as_deref(), Some("sm"));
        assert!(props.attributes.is_empty());
        assert_eq!(props.class_names(), "form-control-sm form-control");
    }

    #[test]
    fn from_value_rejects_mistyped_counters() {
        let error = TextInputProps::from_value(json!({"n_blur": "twice"})).expect_err("n_blur must be a number");
        assert!(matches!(error, PropsError::Invalid(_)));
    }

    #[test]
    fn with_attribute_ignores_owned_names() {
        let props = TextInputProps::new()
            .with_attribute("value", "sneaky")
            .with_attribute("data-id", 7);
        assert!(props.value.is_none());
        assert!(!props.attributes.contains_key("value"));
        assert_eq!(props.attributes.get("data-id"), Some(&json!(7)));
    }

    #[test]
    fn immediate_change_is_reported_not_kept() {
        let (mut input, log, _) = input_with_log(TextInputProps::new().with_value("a"));
        input.on_change("ab");
        assert_eq!(log.entries(), vec![PropUpdate::value("ab")]);
        assert_eq!(input.value(), Some("a"));
    }

    #[test]
    fn debounced_blur_carries_draft() {
        let (mut input, log, clock) = input_with_log(TextInputProps::new().with_debounce(true));
        input.on_change("d");
        input.on_change("dr");
        assert!(log.is_empty());
        assert_eq!(input.value(), Some("dr"));

        clock.advance(5);
        input.on_blur();
        assert_eq!(log.entries(), vec![PropUpdate::blur(1, 1_005).with_value(Some("dr".into()))]);
    }

    #[test]
    fn debounced_blur_without_draft_omits_value() {
        let (mut input, log, _) = input_with_log(TextInputProps::new().with_debounce(true));
        input.on_blur();
        let entries = log.entries();
        assert_eq!(entries, vec![PropUpdate::blur(1, 1_000)]);
        assert!(entries[0].value.is_none());
    }

    #[test]
    fn click_reports_counter_regardless_of_debounce() {
        let (mut input, log, _) =
            input_with_log(TextInputProps::new().with_debounce(true).with_click_count(2, 900));
        input.on_click();
        assert_eq!(log.entries(), vec![PropUpdate::clicks(3, 1_000)]);
    }

    #[test]
    fn detached_input_keeps_local_draft() {
        let mut input = TextInput::new(TextInputProps::new());
        input.on_change("offline");
        input.on_blur();
        input.on_click();
        assert_eq!(input.value(), Some("offline"));
        assert!(!input.has_listener());
    }

    #[test]
    fn render_forwards_attributes_only() {
        let props = TextInputProps::from_value(json!({
            "value": "v",
            "className": "x",
            "n_clicks": 1,
            "id": "notes",
            "data-test": "t"
        }))
        .expect("valid props");
        let element = TextInput::new(props).render();

        assert_eq!(element.tag, "textarea");
        assert_eq!(element.class_name, "x form-control");
        assert_eq!(element.value.as_deref(), Some("v"));
        let keys: Vec<_> = element.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "data-test"]);
    }
}
