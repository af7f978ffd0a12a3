use crate::cli::args::Cli;
use crate::cli::prompt::Prompter;
use crate::error::Result;
use crate::processors::{ConversionOptions, ConversionSession, Converter, Selection};
use crate::utils::coordinates::SignConvention;
use crate::utils::progress::ProgressReporter;
use std::io::{self, BufRead, Write};
use tracing::{info, Level};

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let selection = select(&cli, &mut prompter)?;

    let mut session = match selection {
        Selection::Ready(session) => session,
        Selection::Aborted(reason) => {
            info!("Conversion aborted: {}", reason);
            println!("\nNothing was done.");
            return Ok(());
        }
    };

    let options = ConversionOptions {
        sign_convention: if cli.sign_from_hemisphere {
            SignConvention::FromHemisphere
        } else {
            SignConvention::AlwaysNegative
        },
        warn_rejected: cli.warn_rejected,
    };

    println!("\nConverting {} ({})...", session.source().display(), session.layout());

    let progress = ProgressReporter::new_spinner("Converting records...", cli.quiet);
    let report = Converter::with_options(options).run(&mut session, &progress)?;
    progress.finish_with_message(&format!("Converted {} rows", report.accepted_rows));

    println!("\n{}", report.summary());

    Ok(())
}

/// Resolve the file and layout, asking on the console for whatever the
/// command line left out. No layout is asked for when there is no file.
pub fn select<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<Selection> {
    let interactive = cli.input.is_none() || cli.layout.is_none();
    if interactive && !cli.quiet {
        prompter.show_instructions()?;
    }

    let input = match &cli.input {
        Some(path) => Some(path.clone()),
        None => prompter.ask_path()?,
    };

    let selector = match (&input, &cli.layout) {
        (None, _) => String::new(),
        (Some(_), Some(layout)) => layout.clone(),
        (Some(_), None) => prompter.ask_layout()?,
    };

    Ok(ConversionSession::select(input, &selector))
}
