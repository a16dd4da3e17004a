//! Navigation link that counts clicks.
//!
//! Navigation itself is resolved by [`Link`]. This component adds click
//! tracking and the `nav-link`/`active`/`disabled` styling. The click
//! notification goes out through the link's pre-click hook, so the owner has
//! already seen it when navigation is resolved.

use std::fmt;
use std::rc::Rc;

use propkit_types::element::deserialize_children;
use propkit_types::{Attributes, Child, Element, NEVER, PropUpdate, PropsListener};
use propkit_util::{ClassNames, Clock, SystemClock, next_timestamp, omit};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::component::Component;
use crate::link::{ClickEvent, Link, Navigation};
use crate::props::{PropsError, split_props};

/// Property names consumed by [`NavLink`]; none of them become link attributes.
pub const NAV_LINK_OWNED_KEYS: &[&str] = &[
    "active",
    "disabled",
    "children",
    "className",
    "href",
    "external_link",
    "n_clicks",
    "n_clicks_timestamp",
    "setProps",
];

/// Properties of a [`NavLink`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavLinkProps {
    /// Apply the `active` style.
    pub active: bool,
    /// Disable the link: no navigation and no click tracking.
    pub disabled: bool,
    #[serde(deserialize_with = "deserialize_children")]
    pub children: Vec<Child>,
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    pub href: Option<String>,
    pub external_link: Option<bool>,
    pub n_clicks: u64,
    pub n_clicks_timestamp: i64,
    /// Attributes forwarded to the link (id, style, title, data-*, ...).
    #[serde(skip)]
    pub attributes: Attributes,
}

impl Default for NavLinkProps {
    fn default() -> Self {
        Self {
            active: false,
            disabled: false,
            children: Vec::new(),
            class_name: None,
            href: None,
            external_link: None,
            n_clicks: 0,
            n_clicks_timestamp: NEVER,
            attributes: Attributes::new(),
        }
    }
}

impl NavLinkProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build props from a JSON property object.
    ///
    /// Keys in [`NAV_LINK_OWNED_KEYS`] are interpreted; every other key is
    /// forwarded to the link.
    pub fn from_value(value: Value) -> Result<Self, PropsError> {
        let (mut props, attributes): (Self, Attributes) = split_props(value, NAV_LINK_OWNED_KEYS)?;
        props.attributes = attributes;
        Ok(props)
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_external_link(mut self, external: bool) -> Self {
        self.external_link = Some(external);
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
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
        if NAV_LINK_OWNED_KEYS.contains(&name.as_str()) {
            debug!(attribute = %name, "ignoring owned property passed as attribute");
            return self;
        }
        self.attributes.insert(name, value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = omit(attributes, NAV_LINK_OWNED_KEYS);
        self
    }

    pub fn class_names(&self) -> String {
        ClassNames::new()
            .add_opt(self.class_name.as_deref())
            .add("nav-link")
            .add_if(self.active, "active")
            .add_if(self.disabled, "disabled")
            .build()
    }
}

/// Click-tracking navigation link component.
pub struct NavLink {
    props: NavLinkProps,
    listener: Option<Box<dyn PropsListener>>,
    clock: Rc<dyn Clock>,
}

impl NavLink {
    pub fn new(props: NavLinkProps) -> Self {
        Self {
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

    pub fn set_listener(&mut self, listener: Option<Box<dyn PropsListener>>) {
        self.listener = listener;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// The link collaborator configured from the current props.
    pub fn link(&self) -> Link {
        Link {
            href: self.props.href.clone(),
            external_link: self.props.external_link,
            disabled: self.props.disabled,
            class_name: self.props.class_names(),
            attributes: self.props.attributes.clone(),
            children: self.props.children.clone(),
        }
    }

    /// Pointer activation. The owner is notified before navigation is resolved.
    pub fn click(&mut self, event: ClickEvent) -> Navigation {
        let link = self.link();
        link.activate(event, || self.increment_clicks())
    }

    fn increment_clicks(&mut self) {
        if self.props.disabled {
            debug!("nav link disabled; click not counted");
            return;
        }
        let Some(listener) = self.listener.as_mut() else {
            trace!("no listener attached; click not tracked");
            return;
        };
        let timestamp = next_timestamp(self.clock.as_ref(), self.props.n_clicks_timestamp);
        let update = PropUpdate::clicks(self.props.n_clicks.saturating_add(1), timestamp);
        debug!(?update, "nav link notifying owner");
        listener.set_props(update);
    }
}

impl Component for NavLink {
    type Props = NavLinkProps;

    fn props(&self) -> &NavLinkProps {
        &self.props
    }

    fn receive_props(&mut self, props: NavLinkProps) {
        self.props = props;
    }

    fn render(&self) -> Element {
        self.link().render()
    }
}

impl fmt::Debug for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavLink")
            .field("props", &self.props)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
