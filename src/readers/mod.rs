pub mod record_decoder;
pub mod source_reader;

pub use record_decoder::{decode_delimited, decode_fixed_width, DecodedLine, RecordDecoder};
pub use source_reader::{SourceLine, SourceReader};
