use crate::utils::constants::{
    COMMENT_PREFIX, COORDINATE_COLUMNS, FIXED_WIDTH_FIELDS, FIXED_WIDTH_HEADER, PLACE_COLUMN,
    SOURCE_DELIMITER,
};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1250};
use std::fmt;
use std::ops::Range;

/// Address-listing extract layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// By district/sub-district: fixed-width records, no header
    District,
    /// By census sector: semicolon-delimited records with a header line
    CensusSector,
}

impl Layout {
    /// Map the operator's menu choice to a layout
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "1" => Some(Layout::District),
            "2" => Some(Layout::CensusSector),
            _ => None,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Layout::District => "1",
            Layout::CensusSector => "2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Layout::District => "By district/sub-district",
            Layout::CensusSector => "By census sector",
        }
    }

    pub fn descriptor(&self) -> LayoutDescriptor {
        match self {
            Layout::District => LayoutDescriptor {
                format: RecordFormat::FixedWidth(&FIXED_WIDTH_FIELDS),
                header: HeaderSource::Fixed(&FIXED_WIDTH_HEADER),
                encodings: vec![WINDOWS_1250],
                latitude_field: 10,
                longitude_field: 11,
                leading: 0..10,
                trailing: 12..16,
                comment_prefix: None,
            },
            Layout::CensusSector => LayoutDescriptor {
                format: RecordFormat::Delimited(SOURCE_DELIMITER),
                header: HeaderSource::FirstLine,
                encodings: vec![UTF_8, WINDOWS_1250],
                latitude_field: 5,
                longitude_field: 6,
                leading: 0..5,
                trailing: 7..16,
                comment_prefix: Some(COMMENT_PREFIX),
            },
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.selector())
    }
}

/// How a source line is split into fields
#[derive(Debug, Clone, Copy)]
pub enum RecordFormat {
    FixedWidth(&'static [(usize, Option<usize>)]),
    Delimited(char),
}

/// Where the output header comes from
#[derive(Debug, Clone, Copy)]
pub enum HeaderSource {
    Fixed(&'static [&'static str]),
    /// Columns reused from the source's first line
    FirstLine,
}

/// Everything layout-specific the conversion needs
#[derive(Debug, Clone)]
pub struct LayoutDescriptor {
    pub format: RecordFormat,
    pub header: HeaderSource,
    /// Candidate source encodings, tried in order
    pub encodings: Vec<&'static Encoding>,
    pub latitude_field: usize,
    pub longitude_field: usize,
    /// Decoded fields copied before the coordinate columns
    pub leading: Range<usize>,
    /// Decoded fields copied after the coordinate columns
    pub trailing: Range<usize>,
    pub comment_prefix: Option<&'static str>,
}

impl LayoutDescriptor {
    /// Whether the first source line is a header rather than a record
    pub fn reads_header(&self) -> bool {
        matches!(self.header, HeaderSource::FirstLine)
    }

    /// Leading fields + `replacement` + trailing fields, clamped to what `fields` holds
    pub fn assemble<T: Clone>(&self, fields: &[T], replacement: &[T]) -> Vec<T> {
        let mut assembled =
            Vec::with_capacity(self.leading.len() + replacement.len() + self.trailing.len() + 1);
        assembled.extend_from_slice(clamped(fields, &self.leading));
        assembled.extend_from_slice(replacement);
        assembled.extend_from_slice(clamped(fields, &self.trailing));
        assembled
    }

    /// Output header columns. `source_header` is the first line for layouts
    /// that read one; it is ignored otherwise.
    pub fn output_header(&self, source_header: Option<&str>) -> Vec<String> {
        match (self.header, source_header) {
            (HeaderSource::Fixed(columns), _) => columns.iter().map(|c| c.to_string()).collect(),
            (HeaderSource::FirstLine, header) => {
                let source_columns: Vec<String> = match (self.format, header) {
                    (RecordFormat::Delimited(delimiter), Some(line)) => {
                        line.split(delimiter).map(str::to_string).collect()
                    }
                    _ => Vec::new(),
                };
                let coordinates: Vec<String> =
                    COORDINATE_COLUMNS.iter().map(|c| c.to_string()).collect();

                let mut columns = self.assemble(&source_columns, &coordinates);
                columns.push(PLACE_COLUMN.to_string());
                columns
            }
        }
    }
}

fn clamped<'a, T>(fields: &'a [T], range: &Range<usize>) -> &'a [T] {
    let end = range.end.min(fields.len());
    let start = range.start.min(end);
    &fields[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selector() {
        assert_eq!(Layout::from_selector("1"), Some(Layout::District));
        assert_eq!(Layout::from_selector("2"), Some(Layout::CensusSector));
        assert_eq!(Layout::from_selector(""), None);
        assert_eq!(Layout::from_selector("3"), None);
        assert_eq!(Layout::from_selector("12"), None);
    }

    #[test]
    fn test_district_header_is_fixed() {
        let descriptor = Layout::District.descriptor();
        let header = descriptor.output_header(None);
        assert_eq!(header.len(), 19);
        assert_eq!(header.join(","), FIXED_WIDTH_HEADER.join(","));
        assert!(!descriptor.reads_header());
    }

    #[test]
    fn test_census_sector_header_reuses_source_columns() {
        let descriptor = Layout::CensusSector.descriptor();
        let header =
            descriptor.output_header(Some("A;B;C;D;E;LAT;LON;G;H;I;J;K;L;M;N;O;P;Q"));
        assert_eq!(
            header.join(","),
            "A,B,C,D,E,DMS_lat,DMS_lon,lat,lon,G,H,I,J,K,L,M,N,O,place"
        );
        assert!(descriptor.reads_header());
    }

    #[test]
    fn test_census_sector_header_with_few_columns() {
        let descriptor = Layout::CensusSector.descriptor();
        let header = descriptor.output_header(Some("A;B;C"));
        assert_eq!(header.join(","), "A,B,C,DMS_lat,DMS_lon,lat,lon,place");
    }

    #[test]
    fn test_assemble_clamps_short_rows() {
        let descriptor = Layout::CensusSector.descriptor();
        let fields = vec!["0", "1", "2", "3", "4", "5", "6", "7", "8"];
        let assembled = descriptor.assemble(&fields, &["x"]);
        assert_eq!(assembled, vec!["0", "1", "2", "3", "4", "x", "7", "8"]);
    }
}
