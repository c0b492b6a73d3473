// src/progress.rs

//! Per-target progress reporting
//!
//! The survey driver announces each target before fetching it. Where those
//! announcements go depends on where the report goes:
//! - `ConsolePrinter`: one line per target on a console stream
//! - `SilentProgress`: no-op, used when the report itself is on stdout
//!
//! # Example
//!
//! ```ignore
//! use extension_survey::progress::{ConsolePrinter, ProgressReporter};
//!
//! let mut progress = ConsolePrinter::new(std::io::stdout());
//! progress.set_length(targets.len());
//! for target in &targets {
//!     progress.fetching(target);
//!     // ... fetch and write rows ...
//! }
//! ```

use crate::target::SurveyTarget;
use std::io::Write;
use tracing::debug;

/// Core trait for survey progress reporting
pub trait ProgressReporter {
    /// Set the number of targets in this run
    fn set_length(&mut self, length: usize);

    /// Announce that `target` is about to be fetched
    fn fetching(&mut self, target: &SurveyTarget);

    /// Number of targets announced so far
    fn position(&self) -> usize;
}

/// Silent progress reporter (no-op)
#[derive(Debug, Default)]
pub struct SilentProgress {
    position: usize,
    length: usize,
}

impl SilentProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SilentProgress {
    fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    fn fetching(&mut self, _target: &SurveyTarget) {
        self.position += 1;
    }

    fn position(&self) -> usize {
        self.position
    }
}

/// Prints `Fetching <manifest> for <kind>:<name>` lines to a stream
#[derive(Debug)]
pub struct ConsolePrinter<W: Write> {
    out: W,
    position: usize,
    length: usize,
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            position: 0,
            length: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for ConsolePrinter<W> {
    fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    fn fetching(&mut self, target: &SurveyTarget) {
        self.position += 1;
        debug!("Target {}/{}: {}", self.position, self.length, target);
        if let Err(e) = writeln!(
            self.out,
            "Fetching {} for {}",
            target.kind.manifest_file(),
            target
        ) {
            debug!("Failed to print progress for {}: {}", target, e);
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_printer_lines() {
        let mut progress = ConsolePrinter::new(Vec::new());
        progress.set_length(2);
        progress.fetching(&SurveyTarget::extension("Cite"));
        progress.fetching(&SurveyTarget::skin("Vector"));
        assert_eq!(progress.position(), 2);

        let output = String::from_utf8(progress.into_inner()).unwrap();
        assert_eq!(
            output,
            "Fetching extension.json for extension:Cite\nFetching skin.json for skin:Vector\n"
        );
    }

    struct ClosedConsole;

    impl Write for ClosedConsole {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "console closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_printer_survives_write_failure() {
        let mut progress = ConsolePrinter::new(ClosedConsole);
        progress.fetching(&SurveyTarget::extension("Cite"));
        progress.fetching(&SurveyTarget::skin("Vector"));
        assert_eq!(progress.position(), 2);
    }

    #[test]
    fn test_silent_progress_counts() {
        let mut progress = SilentProgress::new();
        progress.set_length(1);
        progress.fetching(&SurveyTarget::extension("Cite"));
        assert_eq!(progress.position(), 1);
    }
}
