//! Shared type definitions for propkit components.
//!
//! Components receive properties from an owner and report changes back through
//! a [`PropsListener`]. The payload of every report is a [`PropUpdate`], a
//! partial record that the owner merges into its own copy of the properties.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod element;

pub use element::{Child, Element, is_valid_tag_name};

/// Ordered bag of attributes forwarded verbatim to a rendered element.
pub type Attributes = IndexMap<String, Value>;

/// Timestamp value used for counters that never fired.
pub const NEVER: i64 = -1;

/// Partial property update sent from a component to its owner.
///
/// Only the fields that changed are present. Absent fields are skipped when
/// serialized so the JSON form matches what the owner expects to merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropUpdate {
    /// New text content of an input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Number of times the element lost focus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_blur: Option<u64>,
    /// Milliseconds since the epoch of the most recent blur.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_blur_timestamp: Option<i64>,
    /// Number of times the element was clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_clicks: Option<u64>,
    /// Milliseconds since the epoch of the most recent click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_clicks_timestamp: Option<i64>,
}

impl PropUpdate {
    /// Update carrying only a new value.
    pub fn value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Update recording a blur.
    pub fn blur(count: u64, timestamp: i64) -> Self {
        Self {
            n_blur: Some(count),
            n_blur_timestamp: Some(timestamp),
            ..Self::default()
        }
    }

    /// Update recording a click.
    pub fn clicks(count: u64, timestamp: i64) -> Self {
        Self {
            n_clicks: Some(count),
            n_clicks_timestamp: Some(timestamp),
            ..Self::default()
        }
    }

    /// Attach a value to an existing update.
    pub fn with_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this update into an owner's JSON property object.
    ///
    /// Fields absent from the update leave the existing properties untouched.
    pub fn apply_to(&self, props: &mut Map<String, Value>) {
        if let Some(value) = &self.value {
            props.insert("value".into(), Value::String(value.clone()));
        }
        if let Some(count) = self.n_blur {
            props.insert("n_blur".into(), count.into());
        }
        if let Some(timestamp) = self.n_blur_timestamp {
            props.insert("n_blur_timestamp".into(), timestamp.into());
        }
        if let Some(count) = self.n_clicks {
            props.insert("n_clicks".into(), count.into());
        }
        if let Some(timestamp) = self.n_clicks_timestamp {
            props.insert("n_clicks_timestamp".into(), timestamp.into());
        }
    }
}

/// Receiver of component notifications; the owner side of a component.
///
/// Any `FnMut(PropUpdate)` closure is a listener.
pub trait PropsListener {
    fn set_props(&mut self, update: PropUpdate);
}

impl<F> PropsListener for F
where
    F: FnMut(PropUpdate),
{
    fn set_props(&mut self, update: PropUpdate) {
        self(update)
    }
}

/// Listener that records every update it receives.
///
/// Clones share the same log, so a caller can keep one handle and give the
/// other to a component.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<PropUpdate>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded updates, oldest first.
    pub fn entries(&self) -> Vec<PropUpdate> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<PropUpdate> {
        self.entries.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Remove and return all recorded updates.
    pub fn drain(&self) -> Vec<PropUpdate> {
        self.entries.borrow_mut().drain(..).collect()
    }
}

impl PropsListener for NotificationLog {
    fn set_props(&mut self, update: PropUpdate) {
        tracing::trace!(?update, "recording notification");
        self.entries.borrow_mut().push(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialized_update_skips_absent_fields() {
        let update = PropUpdate::blur(3, 1_700_000_000_000);
        let value = serde_json::to_value(&update).expect("serialize update");
        assert_eq!(value, json!({"n_blur": 3, "n_blur_timestamp": 1_700_000_000_000_i64}));

        let with_value = update.with_value(Some("draft".into()));
        let value = serde_json::to_value(&with_value).expect("serialize update");
        assert_eq!(value["value"], json!("draft"));
    }

    #[test]
    fn apply_to_merges_only_present_fields() {
        let mut props = json!({"value": "old", "n_clicks": 1, "rows": 4})
            .as_object()
            .cloned()
            .expect("object");
        PropUpdate::clicks(2, 50).apply_to(&mut props);

        assert_eq!(props["value"], json!("old"));
        assert_eq!(props["n_clicks"], json!(2));
        assert_eq!(props["n_clicks_timestamp"], json!(50));
        assert_eq!(props["rows"], json!(4));
    }

    #[test]
    fn closures_and_logs_are_listeners() {
        let mut seen = Vec::new();
        {
            let mut listener = |update: PropUpdate| seen.push(update);
            listener.set_props(PropUpdate::value("a"));
        }
        assert_eq!(seen, vec![PropUpdate::value("a")]);

        let log = NotificationLog::new();
        let mut handle = log.clone();
        handle.set_props(PropUpdate::value("b"));
        handle.set_props(PropUpdate::clicks(1, 10));
        assert_eq!(log.len(), 2);
        assert_eq!(log.last(), Some(PropUpdate::clicks(1, 10)));
        assert_eq!(log.drain().len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(PropUpdate::default().is_empty());
        assert!(!PropUpdate::value("").is_empty());
    }
}
