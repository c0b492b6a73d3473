// src/lib.rs

//! MediaWiki extension survey
//!
//! Reads a list of extensions and skins, fetches each one's `extension.json`
//! or `skin.json` manifest over HTTP, and reports either the manifest's
//! top-level registration fields or its registered hooks as CSV.
//!
//! # Pipeline
//!
//! - `target`: parse the input list into survey targets
//! - `fetch`: download and decode manifests, skipping failures
//! - `manifest`: project manifests into report rows
//! - `report`: write rows as CSV
//! - `survey`: drive the pipeline over the configured input and output

pub mod cli;
mod error;
pub mod fetch;
pub mod manifest;
pub mod progress;
pub mod report;
pub mod survey;
pub mod target;

pub use error::{Error, Result};
pub use fetch::{DEFAULT_SOURCE_URL, ManifestClient, ManifestSource, fetch_or_skip, manifest_url};
pub use manifest::{Manifest, OutputMode, OutputRow, project};
pub use progress::{ConsolePrinter, ProgressReporter, SilentProgress};
pub use report::CsvReport;
pub use survey::{InputSource, OutputSink, SurveyOptions, SurveySummary, run, survey};
pub use target::{SurveyTarget, TargetKind, parse_line, parse_targets};
