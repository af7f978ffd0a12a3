use crate::utils::constants::OUTPUT_EXTENSION;
use std::path::{Path, PathBuf};

/// Destination for a source file: same directory and base name, `.csv` extension
pub fn destination_path(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}
