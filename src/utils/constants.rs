/// Place-type tag appended to every accepted row
pub const PLACE_TAG: &str = "isolated_dwelling";

/// Prefix marking comment lines in census-sector extracts
pub const COMMENT_PREFIX: &str = "'C";

/// Field separator of census-sector extracts
pub const SOURCE_DELIMITER: char = ';';

/// Output file extension
pub const OUTPUT_EXTENSION: &str = "csv";

/// Coordinate column names inserted into the output header
pub const COORDINATE_COLUMNS: [&str; 4] = ["DMS_lat", "DMS_lon", "lat", "lon"];

/// Trailing output column holding the place tag
pub const PLACE_COLUMN: &str = "place";

/// Output header for district/sub-district extracts
pub const FIXED_WIDTH_HEADER: [&str; 19] = [
    "cod",
    "log",
    "num",
    "c1",
    "c2",
    "c2_num",
    "c3",
    "c3_num",
    "c4",
    "c4_num",
    "DMS_lat",
    "DMS_lon",
    "lat",
    "lon",
    "localidade",
    "desc1",
    "desc2",
    "cep",
    PLACE_COLUMN,
];

/// Character ranges of a district/sub-district record, end exclusive.
/// `None` runs to the end of the line.
pub const FIXED_WIDTH_FIELDS: [(usize, Option<usize>); 18] = [
    (0, Some(15)),    // code
    (16, Some(36)),   // street prefix
    (36, Some(66)),   // street title
    (66, Some(129)),  // street name
    (129, Some(134)), // house number
    (134, Some(141)), // complement 1
    (141, Some(161)), // complement 2
    (161, Some(171)), // complement 2 number
    (171, Some(191)), // complement 3
    (191, Some(201)), // complement 3 number
    (201, Some(221)), // complement 4
    (221, Some(321)), // complement 4 number
    (321, Some(336)), // DMS latitude
    (336, Some(351)), // DMS longitude
    (351, Some(471)),
    (473, Some(513)), // locality
    (513, Some(544)), // description 1
    (544, None),      // description 2 / postal code
];

/// Raw slices merged into the single street name field
pub const NAME_FIELDS: std::ops::Range<usize> = 1..4;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
