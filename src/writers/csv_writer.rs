use crate::error::{ProcessingError, Result};
use crate::models::OutputRow;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Comma-separated output for the JOSM OpenData import.
///
/// Fields are written verbatim: the symbolic coordinates contain `"` and
/// `'`, and the importer expects them unquoted.
pub struct AddressCsvWriter<W: Write> {
    writer: Writer<W>,
}

impl AddressCsvWriter<File> {
    /// Create (or overwrite) the destination file
    pub fn create(path: &Path) -> Result<Self> {
        let writer = builder().from_path(path)?;
        Ok(Self { writer })
    }
}

impl<W: Write> AddressCsvWriter<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: builder().from_writer(inner),
        }
    }

    pub fn write_header(&mut self, columns: &[String]) -> Result<()> {
        self.writer.write_record(columns)?;
        Ok(())
    }

    pub fn write_row(&mut self, row: &OutputRow) -> Result<()> {
        self.writer.write_record(row.fields())?;
        Ok(())
    }

    /// Flush buffered rows and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| ProcessingError::Io(e.into_error()))
    }
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(b',')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true);
    builder
}
