pub mod converter;
pub mod row_transformer;

pub use converter::{
    AbortReason, ConversionOptions, ConversionReport, ConversionSession, Converter, Selection,
    SessionState,
};
pub use row_transformer::{RejectReason, RowOutcome, RowTransformer};
