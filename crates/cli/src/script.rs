//! Replay script format.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    #[serde(alias = "text-input", alias = "textarea")]
    TextInput,
    #[serde(alias = "nav-link")]
    NavLink,
}

/// A scripted owner: initial props plus a sequence of interactions.
#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub component: ComponentKind,
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Merge each notification back into the props, as a live owner would.
    #[serde(default = "default_round_trip")]
    pub round_trip: bool,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

fn default_round_trip() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Change {
        value: String,
    },
    Blur,
    Click {
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
    /// Owner pushes new property values; merged over the current ones.
    SetProps {
        props: Map<String, Value>,
    },
}

pub fn load(path: &Path) -> Result<Script> {
    let data = fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing script {}", path.display()))
}

/// Read a bare JSON property object.
pub fn load_props(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path).with_context(|| format!("reading props {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing props {}", path.display()))
}
