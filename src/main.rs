use clap::Parser;
use cnefe2josm::cli::{init_logging, run, Cli};
use cnefe2josm::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
