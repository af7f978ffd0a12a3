use crate::error::{ProcessingError, Result};
use crate::models::{Layout, LayoutDescriptor};
use crate::processors::row_transformer::{RowOutcome, RowTransformer};
use crate::readers::{DecodedLine, RecordDecoder, SourceReader};
use crate::utils::coordinates::SignConvention;
use crate::utils::filename::destination_path;
use crate::utils::progress::ProgressReporter;
use crate::writers::AddressCsvWriter;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Lifecycle of a conversion session. A run that never gets a file or a
/// valid layout never produces a session; see [`Selection::Aborted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LayoutChosen,
    Converting,
    Done,
}

/// Why nothing was converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    NoFile,
    UnknownLayout(String),
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::NoFile => write!(f, "no file selected"),
            AbortReason::UnknownLayout(selector) => {
                write!(f, "unknown layout option '{}'", selector)
            }
        }
    }
}

/// Outcome of the operator's file and layout choice
#[derive(Debug)]
pub enum Selection {
    Ready(ConversionSession),
    Aborted(AbortReason),
}

/// State of one conversion run: paths, layout and row counters
#[derive(Debug, Clone)]
pub struct ConversionSession {
    source: PathBuf,
    destination: PathBuf,
    layout: Layout,
    state: SessionState,
    accepted_rows: u64,
    rejected_rows: u64,
    comment_lines: u64,
}

impl ConversionSession {
    pub fn new(source: PathBuf, layout: Layout) -> Self {
        let destination = destination_path(&source);
        Self {
            source,
            destination,
            layout,
            state: SessionState::LayoutChosen,
            accepted_rows: 0,
            rejected_rows: 0,
            comment_lines: 0,
        }
    }

    /// Start a session from a file path (empty means none) and a layout selector
    pub fn select(source: Option<PathBuf>, selector: &str) -> Selection {
        let source = match source {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Selection::Aborted(AbortReason::NoFile),
        };

        match Layout::from_selector(selector) {
            Some(layout) => Selection::Ready(Self::new(source, layout)),
            None => Selection::Aborted(AbortReason::UnknownLayout(selector.to_string())),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn accepted_rows(&self) -> u64 {
        self.accepted_rows
    }

    pub fn rejected_rows(&self) -> u64 {
        self.rejected_rows
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    pub sign_convention: SignConvention,
    /// Log every rejected row with its line number
    pub warn_rejected: bool,
}

/// Summary handed back to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub accepted_rows: u64,
    pub rejected_rows: u64,
    pub comment_lines: u64,
    pub encoding: &'static str,
    pub destination: PathBuf,
}

impl ConversionReport {
    pub fn summary(&self) -> String {
        let mut summary = format!("Generated {} rows.", self.accepted_rows);
        if self.rejected_rows > 0 {
            summary.push_str(&format!(
                "\nSkipped {} rows with malformed coordinates.",
                self.rejected_rows
            ));
        }
        summary.push_str(&format!("\nSource encoding: {}", self.encoding));
        summary.push_str(&format!("\nSaved to: {}", self.destination.display()));
        summary
    }
}

pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Convert the session's source file into its destination CSV.
    ///
    /// Both files are closed when this returns, whether it succeeds or not.
    /// On error the destination keeps whatever was written so far.
    pub fn run(
        &self,
        session: &mut ConversionSession,
        progress: &ProgressReporter,
    ) -> Result<ConversionReport> {
        let descriptor = session.layout.descriptor();

        let mut reader = SourceReader::open(&session.source, &descriptor.encodings)?;
        let encoding = reader.encoding().name();
        debug!(
            "Reading {} as {} ({})",
            session.source.display(),
            encoding,
            session.layout
        );

        let source_header = if descriptor.reads_header() {
            let line = reader.next().transpose()?.ok_or_else(|| {
                ProcessingError::InvalidFormat(format!(
                    "{} has no header line",
                    session.source.display()
                ))
            })?;
            progress.increment(1);
            Some(line.text)
        } else {
            None
        };

        let mut writer = AddressCsvWriter::create(&session.destination)?;
        writer.write_header(&descriptor.output_header(source_header.as_deref()))?;
        session.state = SessionState::Converting;
        info!(
            "Converting {} -> {}",
            session.source.display(),
            session.destination.display()
        );

        let decoder = RecordDecoder::new(&descriptor);
        let transformer = self.transformer(descriptor);

        for line in reader {
            let line = line?;
            progress.increment(1);

            let row = match decoder.decode_line(&line.text, line.number) {
                DecodedLine::Row(row) => row,
                DecodedLine::Comment => {
                    session.comment_lines += 1;
                    continue;
                }
                DecodedLine::Blank => continue,
            };

            match transformer.transform(&row)? {
                RowOutcome::Accepted(output) => {
                    writer.write_row(&output)?;
                    session.accepted_rows += 1;
                }
                RowOutcome::Rejected(reason) => {
                    session.rejected_rows += 1;
                    if self.options.warn_rejected {
                        warn!("Line {} rejected: {}", row.line_number, reason);
                    }
                }
            }
        }

        writer.finish()?;
        session.state = SessionState::Done;
        info!(
            "Conversion finished: {} accepted, {} rejected, {} comment lines",
            session.accepted_rows, session.rejected_rows, session.comment_lines
        );

        Ok(ConversionReport {
            accepted_rows: session.accepted_rows,
            rejected_rows: session.rejected_rows,
            comment_lines: session.comment_lines,
            encoding,
            destination: session.destination.clone(),
        })
    }

    fn transformer(&self, descriptor: LayoutDescriptor) -> RowTransformer {
        RowTransformer::new(descriptor, self.options.sign_convention)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
