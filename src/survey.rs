// src/survey.rs

//! Survey driver
//!
//! Wires the pipeline together: read targets, write the CSV header, then for
//! each target fetch its manifest, project rows, and append them to the
//! report. Targets are processed strictly one after another; a target whose
//! manifest cannot be fetched contributes no rows.

use crate::error::{Error, Result};
use crate::fetch::{DEFAULT_SOURCE_URL, ManifestClient, ManifestSource, fetch_or_skip};
use crate::manifest::{OutputMode, project};
use crate::progress::{ConsolePrinter, ProgressReporter, SilentProgress};
use crate::report::CsvReport;
use crate::target::parse_targets;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Command-line token selecting a standard stream
pub const STDIO_TOKEN: &str = "-";

/// Where the target list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` selects stdin, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_TOKEN {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the input; a file handle is closed when the reader is dropped
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    Error::IoError(format!("Failed to open input {}: {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where the CSV report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// `-` selects stdout, anything else is a path
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIO_TOKEN {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Open the output, truncating an existing file
    pub fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| {
                    Error::IoError(format!("Failed to create output {}: {e}", path.display()))
                })?;
                Ok(Box::new(file))
            }
        }
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for one survey run
#[derive(Debug, Clone)]
pub struct SurveyOptions {
    pub input: InputSource,
    pub output: OutputSink,
    /// Treat bare names as skins and ignore extension references
    pub skins_only: bool,
    pub mode: OutputMode,
    pub source_url: String,
}

impl SurveyOptions {
    pub fn new(input: InputSource, output: OutputSink) -> Self {
        Self {
            input,
            output,
            skins_only: false,
            mode: OutputMode::default(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
        }
    }
}

/// Counts gathered over a survey run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveySummary {
    pub targets: usize,
    pub fetched: usize,
    pub skipped: usize,
    pub rows: usize,
}

impl fmt::Display for SurveySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} targets, {} manifests fetched, {} skipped, {} rows written",
            self.targets, self.fetched, self.skipped, self.rows
        )
    }
}

/// Run the survey over already-opened streams
///
/// The header is written before the input is read, so a run with an empty
/// target list still produces a header-only report.
pub fn survey<R, W, S, P>(
    input: R,
    output: W,
    source: &S,
    progress: &mut P,
    skins_only: bool,
    mode: OutputMode,
) -> Result<SurveySummary>
where
    R: BufRead,
    W: Write,
    S: ManifestSource + ?Sized,
    P: ProgressReporter + ?Sized,
{
    let mut report = CsvReport::new(output);
    report.write_header(mode)?;

    let targets = parse_targets(input, skins_only)?;
    debug!("Parsed {} survey targets", targets.len());
    progress.set_length(targets.len());

    let mut summary = SurveySummary {
        targets: targets.len(),
        ..Default::default()
    };

    for target in &targets {
        progress.fetching(target);

        let Some(manifest) = fetch_or_skip(source, target) else {
            summary.skipped += 1;
            continue;
        };
        summary.fetched += 1;

        let rows = project(&manifest, mode);
        debug!("{} rows for {}", rows.len(), target);
        report.write_rows(&rows)?;
    }

    summary.rows = report.rows_written();
    report.flush()?;
    Ok(summary)
}

/// Pick the progress reporter for a report destination
///
/// Progress lines are printed to `console` only when the report goes to a
/// file; a report on stdout gets no progress lines.
pub fn progress_for<'a, W: Write + 'a>(
    output: &OutputSink,
    console: W,
) -> Box<dyn ProgressReporter + 'a> {
    if output.is_stdout() {
        Box::new(SilentProgress::new())
    } else {
        Box::new(ConsolePrinter::new(console))
    }
}

/// Open the configured streams and run a survey against the HTTP source
pub fn run(options: &SurveyOptions) -> Result<SurveySummary> {
    let input = options.input.open()?;
    let output = options.output.open()?;
    let client = ManifestClient::with_source_url(&options.source_url)?;

    info!(
        "Surveying {} into {} ({:?} mode)",
        options.input, options.output, options.mode
    );

    let mut progress = progress_for(&options.output, io::stdout());

    survey(
        input,
        output,
        &client,
        progress.as_mut(),
        options.skins_only,
        options.mode,
    )
}
