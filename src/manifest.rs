// src/manifest.rs

//! Extension/skin manifests and report row projection
//!
//! Manifests are kept as loosely-typed JSON objects. Key order is the order
//! the keys appear in the fetched document, which is the order report rows
//! are produced in.

use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Top-level key holding the hook registration map
pub const HOOKS_KEY: &str = "Hooks";

/// Top-level key holding the display name
pub const NAME_KEY: &str = "name";

/// A decoded `extension.json` or `skin.json` document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Decode a manifest from JSON text; the document must be an object
    pub fn from_json(text: &str) -> Result<Self> {
        let fields: Map<String, Value> = serde_json::from_str(text)
            .map_err(|e| Error::ParseError(format!("Invalid manifest JSON: {e}")))?;
        Ok(Self { fields })
    }

    /// Display name as it should appear in reports
    ///
    /// Missing or `null` names render as an empty string; non-string names
    /// are rendered as their JSON text.
    pub fn display_name(&self) -> String {
        match self.fields.get(NAME_KEY) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Top-level registration keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Names of registered hooks in document order
    ///
    /// Empty when the manifest has no `Hooks` object.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        self.fields
            .get(HOOKS_KEY)
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|hooks| hooks.keys().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Which manifest fields a survey reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Every top-level registration key
    #[default]
    Keys,
    /// Every key of the `Hooks` map
    Hooks,
}

impl OutputMode {
    pub fn from_hooks_flag(hooks: bool) -> Self {
        if hooks { Self::Hooks } else { Self::Keys }
    }

    /// CSV header for this mode
    pub fn header(&self) -> [&'static str; 2] {
        match self {
            Self::Keys => ["Extension Name", "Registration Field"],
            Self::Hooks => ["Extension Name", "Hook Name"],
        }
    }
}

/// One report line: the manifest's name and one field or hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub extension_name: String,
    pub field: String,
}

impl OutputRow {
    pub fn new(extension_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            extension_name: extension_name.into(),
            field: field.into(),
        }
    }
}

/// Project a manifest into report rows for the given mode
pub fn project(manifest: &Manifest, mode: OutputMode) -> Vec<OutputRow> {
    let name = manifest.display_name();
    let row = |field: &str| OutputRow::new(name.clone(), field);
    match mode {
        OutputMode::Keys => manifest.keys().map(row).collect(),
        OutputMode::Hooks => manifest.hook_names().map(row).collect(),
    }
}
