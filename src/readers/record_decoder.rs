use crate::models::{DecodedRow, LayoutDescriptor, RecordFormat};
use crate::utils::constants::NAME_FIELDS;
use crate::utils::text::{collapse_whitespace, slice_chars, title_case};

/// Result of decoding one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    Row(DecodedRow),
    Comment,
    Blank,
}

pub struct RecordDecoder {
    format: RecordFormat,
    comment_prefix: Option<&'static str>,
}

impl RecordDecoder {
    pub fn new(descriptor: &LayoutDescriptor) -> Self {
        Self {
            format: descriptor.format,
            comment_prefix: descriptor.comment_prefix,
        }
    }

    /// Decode a line with its terminator already removed
    pub fn decode_line(&self, line: &str, line_number: usize) -> DecodedLine {
        if line.trim().is_empty() {
            return DecodedLine::Blank;
        }

        if let Some(prefix) = self.comment_prefix {
            if line.starts_with(prefix) {
                return DecodedLine::Comment;
            }
        }

        let fields = match self.format {
            RecordFormat::FixedWidth(offsets) => decode_fixed_width(line, offsets),
            RecordFormat::Delimited(delimiter) => decode_delimited(line, delimiter),
        };

        DecodedLine::Row(DecodedRow::new(line_number, fields))
    }
}

/// Slice a fixed-width record at character offsets, trim and title-case each
/// field, then merge the street name parts into a single field.
/// Missing trailing characters decode as empty fields.
pub fn decode_fixed_width(line: &str, offsets: &[(usize, Option<usize>)]) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let raw: Vec<String> = offsets
        .iter()
        .map(|&(start, end)| title_case(slice_chars(&chars, start, end).trim()))
        .collect();

    if raw.len() < NAME_FIELDS.end {
        return raw;
    }

    let name = collapse_whitespace(&raw[NAME_FIELDS].join(" "));

    let mut fields = Vec::with_capacity(raw.len() - NAME_FIELDS.len() + 1);
    fields.extend_from_slice(&raw[..NAME_FIELDS.start]);
    fields.push(name);
    fields.extend_from_slice(&raw[NAME_FIELDS.end..]);
    fields
}

/// Split a delimited record; fields are kept as-is
pub fn decode_delimited(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Layout;
    use crate::utils::constants::FIXED_WIDTH_FIELDS;

    /// Lay `values` out at the given character offsets on a blank record
    fn fixed_width_line(values: &[(usize, &str)]) -> String {
        let mut chars: Vec<char> = vec![' '; 560];
        for &(offset, value) in values {
            for (i, ch) in value.chars().enumerate() {
                chars[offset + i] = ch;
            }
        }
        chars.into_iter().collect()
    }

    #[test]
    fn test_decode_fixed_width_merges_name() {
        let line = fixed_width_line(&[
            (0, "350010205000001"),
            (16, "RUA"),
            (36, "DOUTOR"),
            (66, "JOSÉ   DA  SILVA"),
            (129, "12"),
            (321, "01 30 00 S"),
            (336, "02 00 00 O"),
            (473, "CENTRO"),
        ]);

        let fields = decode_fixed_width(&line, &FIXED_WIDTH_FIELDS);

        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], "350010205000001");
        assert_eq!(fields[1], "Rua Doutor José Da Silva");
        assert_eq!(fields[2], "12");
        assert_eq!(fields[10], "01 30 00 S");
        assert_eq!(fields[11], "02 00 00 O");
        assert_eq!(fields[13], "Centro");
    }

    #[test]
    fn test_decode_fixed_width_empty_title() {
        let line = fixed_width_line(&[(16, "AVENIDA"), (66, "PAULISTA")]);
        let fields = decode_fixed_width(&line, &FIXED_WIDTH_FIELDS);
        assert_eq!(fields[1], "Avenida Paulista");
    }

    #[test]
    fn test_decode_fixed_width_short_line() {
        let fields = decode_fixed_width("350010205000001 RUA", &FIXED_WIDTH_FIELDS);
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], "350010205000001");
        assert_eq!(fields[1], "Rua");
        assert!(fields[2..].iter().all(String::is_empty));
    }

    #[test]
    fn test_decode_delimited_keeps_fields_untouched() {
        let fields = decode_delimited("a; B ;;c", ';');
        assert_eq!(fields, vec!["a", " B ", "", "c"]);
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let decoder = RecordDecoder::new(&Layout::CensusSector.descriptor());
        assert_eq!(decoder.decode_line("'Cod;anything", 2), DecodedLine::Comment);
        assert!(matches!(
            decoder.decode_line("C'od;anything", 3),
            DecodedLine::Row(_)
        ));
    }

    #[test]
    fn test_district_layout_has_no_comments() {
        let decoder = RecordDecoder::new(&Layout::District.descriptor());
        assert!(matches!(decoder.decode_line("'C", 1), DecodedLine::Row(_)));
    }

    #[test]
    fn test_blank_lines() {
        let decoder = RecordDecoder::new(&Layout::District.descriptor());
        assert_eq!(decoder.decode_line("   ", 1), DecodedLine::Blank);
        assert_eq!(decoder.decode_line("", 2), DecodedLine::Blank);
    }

    #[test]
    fn test_decoded_row_keeps_line_number() {
        let decoder = RecordDecoder::new(&Layout::CensusSector.descriptor());
        match decoder.decode_line("1;2;3", 7) {
            DecodedLine::Row(row) => {
                assert_eq!(row.line_number, 7);
                assert_eq!(row.len(), 3);
            }
            other => panic!("unexpected decode result: {:?}", other),
        }
    }
}
