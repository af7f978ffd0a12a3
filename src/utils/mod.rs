pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;
pub mod text;

pub use constants::*;
pub use coordinates::{format_decimal, DmsCoordinate, SignConvention};
pub use filename::destination_path;
pub use progress::ProgressReporter;
