// src/target.rs

//! Survey target list parsing
//!
//! Each non-empty, non-comment line of the input names one extension or skin.
//! Recognized forms, checked in this order:
//!
//! - `$IP/extensions/<name>/extension.json` - path-style extension reference
//! - `$IP/skins/<name>/skin.json` - path-style skin reference
//! - `extension:<name>` or `skin:<name>` - explicit kind prefix
//! - `<name>` - bare name, kind taken from the run's skins-only setting
//!
//! A prefix other than `extension`/`skin`, or a line with more than one `:`,
//! is not split: the whole line is used as a bare name.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::LazyLock;

static EXTENSION_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"extensions/([^/]+)/extension\.json").expect("extension path regex is valid")
});

static SKIN_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"skins/([^/]+)/skin\.json").expect("skin path regex is valid")
});

/// Kind of component being surveyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Extension,
    Skin,
}

impl TargetKind {
    /// Lowercase identifier used in URLs and `kind:name` lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extension => "extension",
            Self::Skin => "skin",
        }
    }

    /// Name of the manifest file this kind registers with
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Self::Extension => "extension.json",
            Self::Skin => "skin.json",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extension" => Ok(Self::Extension),
            "skin" => Ok(Self::Skin),
            other => Err(Error::ParseError(format!("Unknown target kind: {other}"))),
        }
    }
}

/// One extension or skin to fetch and report on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurveyTarget {
    pub kind: TargetKind,
    pub name: String,
}

impl SurveyTarget {
    pub fn new(kind: TargetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn extension(name: impl Into<String>) -> Self {
        Self::new(TargetKind::Extension, name)
    }

    pub fn skin(name: impl Into<String>) -> Self {
        Self::new(TargetKind::Skin, name)
    }
}

impl fmt::Display for SurveyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// Classify a single input line
///
/// Returns `None` for blank lines, comments, and extension references that
/// are suppressed because the run only looks at skins.
pub fn parse_line(line: &str, skins_only: bool) -> Option<SurveyTarget> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if let Some(caps) = EXTENSION_PATH_RE.captures(line) {
        if skins_only {
            return None;
        }
        return Some(SurveyTarget::extension(&caps[1]));
    }

    if let Some(caps) = SKIN_PATH_RE.captures(line) {
        return Some(SurveyTarget::skin(&caps[1]));
    }

    let parts: Vec<&str> = line.split(':').collect();
    if let [prefix, name] = parts.as_slice()
        && let Ok(kind) = prefix.parse::<TargetKind>()
    {
        return match kind {
            TargetKind::Extension if skins_only => None,
            kind => Some(SurveyTarget::new(kind, *name)),
        };
    }

    let kind = if skins_only {
        TargetKind::Skin
    } else {
        TargetKind::Extension
    };
    Some(SurveyTarget::new(kind, line))
}

/// Read every survey target from a line-oriented input, in input order
///
/// Duplicates are kept.
pub fn parse_targets<R: BufRead>(reader: R, skins_only: bool) -> Result<Vec<SurveyTarget>> {
    let mut targets = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line
            .map_err(|e| Error::IoError(format!("Failed to read input line {}: {e}", idx + 1)))?;
        if let Some(target) = parse_line(&line, skins_only) {
            targets.push(target);
        }
    }
    Ok(targets)
}
