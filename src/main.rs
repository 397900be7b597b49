use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use protolex::base::{FsProvider, PrintHandler};
use tracing_subscriber::filter::LevelFilter;

/// Tokenizes pep source files and prints their token trees.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Source files to tokenize.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Increase logging verbosity; may be repeated.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logging(args.verbose);

    let handler = PrintHandler::new();
    let provider = FsProvider::default();

    for path in &args.paths {
        // failures are printed by the handler
        if let Ok(tokens) = protolex::tokenize(&handler, &provider, path) {
            println!("{tokens}");
        }
    }

    if handler.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
