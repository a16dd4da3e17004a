//! Scripted owner that drives a single component.
//!
//! The owner keeps the component's properties as a JSON object. After every
//! event it collects the component's notifications and, when round-tripping,
//! merges them into its properties and pushes them back down, which is how a
//! live host keeps a controlled component in sync.

use std::rc::Rc;

use anyhow::{Context, Result};
use propkit_components::{ClickEvent, Component, NavLink, NavLinkProps, Navigation, TextInput, TextInputProps};
use propkit_types::{Element, NotificationLog, PropUpdate};
use propkit_util::{Clock, ManualClock, SystemClock};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::script::{ComponentKind, Script, ScriptEvent};

/// Time source used for a replay.
#[derive(Debug, Clone)]
pub enum ReplayClock {
    System,
    /// Starts at a fixed time and advances one millisecond per event.
    Fixed(Rc<ManualClock>),
}

impl ReplayClock {
    pub fn fixed(start_millis: i64) -> Self {
        Self::Fixed(Rc::new(ManualClock::new(start_millis)))
    }

    fn clock(&self) -> Rc<dyn Clock> {
        match self {
            Self::System => Rc::new(SystemClock),
            Self::Fixed(clock) => clock.clone(),
        }
    }

    fn tick(&self) {
        if let Self::Fixed(clock) = self {
            clock.advance(1);
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub event: ScriptEvent,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notifications: Vec<PropUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Navigation>,
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<Step>,
    /// Owner-side properties after the last event.
    pub props: Map<String, Value>,
    pub rendered: Element,
}

enum Mounted {
    TextInput(TextInput),
    NavLink(NavLink),
}

impl Mounted {
    fn mount(kind: ComponentKind, props: &Map<String, Value>, log: &NotificationLog, clock: Rc<dyn Clock>) -> Result<Self> {
        let props = Value::Object(props.clone());
        let mounted = match kind {
            ComponentKind::TextInput => Self::TextInput(
                TextInput::new(TextInputProps::from_value(props).context("invalid text input props")?)
                    .with_listener(log.clone())
                    .with_clock(clock),
            ),
            ComponentKind::NavLink => Self::NavLink(
                NavLink::new(NavLinkProps::from_value(props).context("invalid nav link props")?)
                    .with_listener(log.clone())
                    .with_clock(clock),
            ),
        };
        Ok(mounted)
    }

    fn receive(&mut self, props: &Map<String, Value>) -> Result<()> {
        let props = Value::Object(props.clone());
        match self {
            Self::TextInput(input) => {
                input.receive_props(TextInputProps::from_value(props).context("invalid text input props")?);
            }
            Self::NavLink(link) => {
                link.receive_props(NavLinkProps::from_value(props).context("invalid nav link props")?);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: &ScriptEvent) -> Option<Navigation> {
        match (self, event) {
            (Self::TextInput(input), ScriptEvent::Change { value }) => {
                input.on_change(value.clone());
                None
            }
            (Self::TextInput(input), ScriptEvent::Blur) => {
                input.on_blur();
                None
            }
            (Self::TextInput(input), ScriptEvent::Click { .. }) => {
                input.on_click();
                None
            }
            (Self::NavLink(link), ScriptEvent::Click { ctrl, shift, alt, meta }) => Some(link.click(ClickEvent {
                ctrl: *ctrl,
                shift: *shift,
                alt: *alt,
                meta: *meta,
            })),
            (_, ScriptEvent::SetProps { .. }) => None,
            (Self::NavLink(_), other) => {
                warn!(event = ?other, "nav link does not handle this event; skipping");
                None
            }
        }
    }

    fn render(&self) -> Element {
        match self {
            Self::TextInput(input) => input.render(),
            Self::NavLink(link) => link.render(),
        }
    }
}

/// Play `script` and report what the owner observed.
pub fn run(script: Script, clock: &ReplayClock) -> Result<ReplayReport> {
    let Script {
        component,
        mut props,
        round_trip,
        events,
    } = script;
    let log = NotificationLog::new();
    let mut mounted = Mounted::mount(component, &props, &log, clock.clock())?;
    info!(?component, events = events.len(), round_trip, "starting replay");

    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        clock.tick();
        let navigation = mounted.dispatch(&event);
        let notifications = log.drain();
        debug!(?event, notifications = notifications.len(), "event dispatched");

        if let ScriptEvent::SetProps { props: incoming } = &event {
            props.extend(incoming.iter().map(|(name, value)| (name.clone(), value.clone())));
            mounted.receive(&props)?;
        } else if round_trip && !notifications.is_empty() {
            for update in &notifications {
                update.apply_to(&mut props);
            }
            mounted.receive(&props)?;
        }

        steps.push(Step {
            event,
            notifications,
            navigation,
        });
    }

    Ok(ReplayReport {
        steps,
        props,
        rendered: mounted.render(),
    })
}

/// Render a component straight from its props.
pub fn render(kind: ComponentKind, props: Value) -> Result<Element> {
    let element = match kind {
        ComponentKind::TextInput => {
            TextInput::new(TextInputProps::from_value(props).context("invalid text input props")?).render()
        }
        ComponentKind::NavLink => NavLink::new(NavLinkProps::from_value(props).context("invalid nav link props")?).render(),
    };
    Ok(element)
}
