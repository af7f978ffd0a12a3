pub mod args;
pub mod commands;
pub mod prompt;

pub use args::Cli;
pub use commands::{init_logging, run};
