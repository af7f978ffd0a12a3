pub mod layout;
pub mod record;

pub use layout::{HeaderSource, Layout, LayoutDescriptor, RecordFormat};
pub use record::{DecodedRow, OutputRow};
