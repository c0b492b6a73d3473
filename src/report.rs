// src/report.rs

//! CSV report writer

use crate::error::{Error, Result};
use crate::manifest::{OutputMode, OutputRow};
use std::io::Write;

/// Writes survey rows as two-column CSV
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
    rows_written: usize,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(out),
            rows_written: 0,
        }
    }

    /// Write the header row for `mode`
    pub fn write_header(&mut self, mode: OutputMode) -> Result<()> {
        self.writer.write_record(mode.header())?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer
            .write_record([row.extension_name.as_str(), row.field.as_str()])?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_rows<'a, I>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a OutputRow>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Data rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| Error::IoError(format!("Failed to flush report: {e}")))
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::IoError(format!("Failed to flush report: {}", e.error())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(mode: OutputMode, rows: &[OutputRow]) -> String {
        let mut report = CsvReport::new(Vec::new());
        report.write_header(mode).unwrap();
        report.write_rows(rows).unwrap();
        String::from_utf8(report.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(OutputMode::Hooks, &[]), "Extension Name,Hook Name\n");
        assert_eq!(
            render(OutputMode::Keys, &[]),
            "Extension Name,Registration Field\n"
        );
    }

    #[test]
    fn test_rows_follow_header() {
        let rows = [OutputRow::new("Foo", "H1"), OutputRow::new("Foo", "H2")];
        assert_eq!(
            render(OutputMode::Hooks, &rows),
            "Extension Name,Hook Name\nFoo,H1\nFoo,H2\n"
        );
    }

    #[test]
    fn test_quoting() {
        let rows = [
            OutputRow::new("Semantic, Media", "say \"hi\""),
            OutputRow::new("", "manifest_version"),
        ];
        assert_eq!(
            render(OutputMode::Keys, &rows),
            "Extension Name,Registration Field\n\"Semantic, Media\",\"say \"\"hi\"\"\"\n,manifest_version\n"
        );
    }

    #[test]
    fn test_rows_written_excludes_header() {
        let mut report = CsvReport::new(Vec::new());
        report.write_header(OutputMode::Keys).unwrap();
        report.write_row(&OutputRow::new("A", "name")).unwrap();
        assert_eq!(report.rows_written(), 1);
    }
}
