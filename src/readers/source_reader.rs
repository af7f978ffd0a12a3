use crate::error::{ProcessingError, Result};
use crate::utils::constants::DEFAULT_BUFFER_SIZE;
use encoding_rs::{DecoderResult, Encoding, UTF_8};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One decoded source line, terminator removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Line reader that picks the source encoding from an ordered candidate list.
///
/// The buffered prefix of the source (up to the reader's buffer capacity) is
/// decoded strictly with each candidate in turn and the first one that
/// succeeds is used for the whole file. Later lines that the chosen encoding
/// rejects are reported as errors.
pub struct SourceReader<R: BufRead> {
    reader: R,
    encoding: &'static Encoding,
    line_number: usize,
    buffer: Vec<u8>,
}

impl SourceReader<BufReader<File>> {
    pub fn open(path: &Path, candidates: &[&'static Encoding]) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file), candidates)
    }
}

impl<R: BufRead> SourceReader<R> {
    pub fn from_reader(mut reader: R, candidates: &[&'static Encoding]) -> Result<Self> {
        let encoding = detect_encoding(reader.fill_buf()?, candidates)?;
        debug!("Source encoding detected as {}", encoding.name());

        Ok(Self {
            reader,
            encoding,
            line_number: 0,
            buffer: Vec::new(),
        })
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    fn read_next(&mut self) -> Result<Option<SourceLine>> {
        if read_raw_line(&mut self.reader, &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let mut text =
            decode_strict(self.encoding, &self.buffer).ok_or(ProcessingError::Encoding {
                line: self.line_number,
                encoding: self.encoding.name(),
            })?;

        if self.line_number == 1 && self.encoding == UTF_8 && text.starts_with('\u{feff}') {
            text.remove(0);
        }

        Ok(Some(SourceLine {
            number: self.line_number,
            text,
        }))
    }
}

impl<R: BufRead> Iterator for SourceReader<R> {
    type Item = Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

/// First candidate that decodes `prefix` without errors. A multi-byte
/// sequence cut off at the end of the prefix does not count as an error.
/// When every candidate fails, the error names the first candidate and the
/// line where it failed.
fn detect_encoding(
    prefix: &[u8],
    candidates: &[&'static Encoding],
) -> Result<&'static Encoding> {
    let preferred = candidates.first().copied().unwrap_or(UTF_8);
    let mut first_failure = None;

    for &encoding in candidates {
        match malformed_offset(encoding, prefix) {
            None => return Ok(encoding),
            Some(offset) => {
                first_failure.get_or_insert(offset);
            }
        }
    }

    match first_failure {
        None => Ok(preferred),
        Some(offset) => Err(ProcessingError::Encoding {
            line: prefix[..offset].iter().filter(|&&b| b == b'\n').count() + 1,
            encoding: preferred.name(),
        }),
    }
}

/// Byte offset just past the first malformed sequence, if any
fn malformed_offset(encoding: &'static Encoding, bytes: &[u8]) -> Option<usize> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len() * 3);
    let mut output = String::with_capacity(capacity);

    match decoder.decode_to_string_without_replacement(bytes, &mut output, false) {
        (DecoderResult::Malformed(_, _), read) => Some(read),
        _ => None,
    }
}

/// Read up to and including the next `\n`, then drop the terminator.
/// Returns the number of bytes consumed from the reader.
fn read_raw_line<R: BufRead>(reader: &mut R, buffer: &mut Vec<u8>) -> Result<usize> {
    buffer.clear();
    let read = reader.read_until(b'\n', buffer)?;

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(read)
}

fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
