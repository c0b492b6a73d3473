// src/cli.rs
//! CLI definitions for the survey binaries
//!
//! - `extension-survey` - report registration fields or hooks
//! - `list-hook-usage` - same survey with hook reporting always on
//!
//! Both parse into a [`SurveyOptions`] consumed by [`crate::survey::run`].

use crate::fetch::DEFAULT_SOURCE_URL;
use crate::manifest::OutputMode;
use crate::survey::{InputSource, OutputSink, SurveyOptions};
use clap::{Args, Parser};

/// Arguments shared by both binaries
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the input file or "-" for stdin. Must be a list of extensions.
    pub input_file: String,

    /// Path to the output file or "-" for stdout. Will be a CSV file.
    pub output_file: String,

    /// Look for skins instead of extensions
    #[arg(long)]
    pub skins: bool,

    /// Base URL the extension and skin repositories are served from
    #[arg(
        long,
        env = "EXTENSION_SURVEY_SOURCE_URL",
        default_value = DEFAULT_SOURCE_URL,
        value_parser = parse_source_url,
        hide = true
    )]
    pub source_url: String,
}

impl CommonArgs {
    fn into_options(self, mode: OutputMode) -> SurveyOptions {
        SurveyOptions {
            input: InputSource::from_arg(&self.input_file),
            output: OutputSink::from_arg(&self.output_file),
            skins_only: self.skins,
            mode,
            source_url: self.source_url,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "extension-survey")]
#[command(version)]
#[command(about = "Survey MediaWiki extensions.", long_about = None)]
pub struct SurveyCli {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List hook usage
    #[arg(long)]
    pub hooks: bool,
}

impl SurveyCli {
    pub fn into_options(self) -> SurveyOptions {
        self.common
            .into_options(OutputMode::from_hooks_flag(self.hooks))
    }
}

#[derive(Parser, Debug)]
#[command(name = "list-hook-usage")]
#[command(version)]
#[command(about = "List hook usage for MediaWiki extensions and skins.", long_about = None)]
pub struct HookUsageCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl HookUsageCli {
    pub fn into_options(self) -> SurveyOptions {
        self.common.into_options(OutputMode::Hooks)
    }
}

/// Accept only absolute http(s) URLs as manifest sources
fn parse_source_url(value: &str) -> Result<String, String> {
    let parsed = url::Url::parse(value).map_err(|e| format!("invalid URL '{value}': {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        other => Err(format!("unsupported URL scheme '{other}', expected http or https")),
    }
}
