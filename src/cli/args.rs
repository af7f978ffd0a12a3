use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cnefe2josm")]
#[command(about = "Convert IBGE/CNEFE address listings into CSV files for the JOSM OpenData plugin")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Address listing text file [prompted for when omitted]")]
    pub input: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Listing layout: 1 = by district/sub-district, 2 = by census sector [prompted for when omitted]"
    )]
    pub layout: Option<String>,

    #[arg(long, help = "Log every row skipped because of malformed coordinates")]
    pub warn_rejected: bool,

    #[arg(
        long,
        help = "Take the decimal-degree sign from the hemisphere letter instead of always writing negative values"
    )]
    pub sign_from_hemisphere: bool,

    #[arg(short, long, help = "Hide the instructions and progress spinner")]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::parse_from([
            "cnefe2josm",
            "/data/listing.txt",
            "--layout",
            "2",
            "--warn-rejected",
            "-q",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("/data/listing.txt")));
        assert_eq!(cli.layout.as_deref(), Some("2"));
        assert!(cli.warn_rejected);
        assert!(cli.quiet);
        assert!(!cli.sign_from_hemisphere);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_everything_is_optional() {
        let cli = Cli::parse_from(["cnefe2josm"]);
        assert!(cli.input.is_none());
        assert!(cli.layout.is_none());
    }
}
