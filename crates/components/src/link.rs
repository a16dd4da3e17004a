//! Link resolution.
//!
//! A [`Link`] renders an anchor element and decides, on activation, how the
//! host should navigate. External targets get a full page load. Internal
//! targets only update the location, so the page is not reloaded.

use propkit_types::{Attributes, Child, Element};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

/// Pointer activation with the modifier keys held at the time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClickEvent {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ClickEvent {
    /// A plain click without modifiers.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn has_modifiers(&self) -> bool {
        self.ctrl || self.shift || self.alt || self.meta
    }
}

/// What the host should do after a link was activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum Navigation {
    /// Modified click (new tab, download, ...); leave it to the host's default handling.
    Default,
    /// The link is disabled; suppress the activation.
    Blocked,
    /// The link has no target.
    NoTarget,
    /// Update the location in place, without reloading.
    Internal(String),
    /// Load the target as a new page.
    External(String),
}

/// Anchor element that resolves navigation for its target.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Link {
    pub href: Option<String>,
    /// Force external (`Some(true)`) or internal (`Some(false)`) handling.
    /// When unset, absolute URLs are external.
    pub external_link: Option<bool>,
    pub disabled: bool,
    pub class_name: String,
    pub attributes: Attributes,
    pub children: Vec<Child>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// Whether activating this link leaves the current page.
    pub fn is_external(&self) -> bool {
        match (self.external_link, self.href.as_deref()) {
            (Some(external), _) => external,
            (None, Some(href)) => is_absolute_url(href),
            (None, None) => false,
        }
    }

    /// Handle a pointer activation.
    ///
    /// `pre_click` runs before navigation is resolved, and only for plain
    /// clicks on an enabled link.
    pub fn activate<F>(&self, event: ClickEvent, pre_click: F) -> Navigation
    where
        F: FnOnce(),
    {
        if event.has_modifiers() {
            trace!(?event, "modified click; deferring to host");
            return Navigation::Default;
        }
        if self.disabled {
            debug!(href = ?self.href, "blocked activation of disabled link");
            return Navigation::Blocked;
        }

        pre_click();

        let navigation = match &self.href {
            None => Navigation::NoTarget,
            Some(href) if self.is_external() => Navigation::External(href.clone()),
            Some(href) => Navigation::Internal(href.clone()),
        };
        debug!(?navigation, "link activated");
        navigation
    }

    pub fn render(&self) -> Element {
        let mut attributes = Attributes::new();
        if let Some(href) = &self.href {
            attributes.insert("href".to_string(), Value::String(href.clone()));
        }
        attributes.extend(self.attributes.iter().map(|(name, value)| (name.clone(), value.clone())));
        if self.disabled {
            attributes.insert("aria-disabled".to_string(), Value::String("true".to_string()));
        }
        Element {
            tag: "a".to_string(),
            class_name: self.class_name.clone(),
            value: None,
            attributes,
            children: self.children.clone(),
        }
    }
}

/// Whether `href` names a location on its own, without a base URL.
///
/// Scheme-qualified URLs (`https://...`, `mailto:...`) and protocol-relative
/// URLs (`//cdn.example.com/...`) are absolute; paths are not.
pub fn is_absolute_url(href: &str) -> bool {
    href.starts_with("//") || Url::parse(href).is_ok()
}
