//! markdown2html CLI - convert a Markdown file into an HTML file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use markdown2html::convert::USAGE;
use markdown2html::{Invocation, Options};

/// Convert a Markdown file to HTML.
#[derive(Parser)]
#[command(name = "markdown2html", version, about)]
struct Cli {
    /// Input Markdown file, then output HTML file
    #[arg(value_name = "FILE", num_args = 0..)]
    files: Vec<PathBuf>,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    // --verbose enables DEBUG, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = Invocation::from_args(cli.files).and_then(|inv| inv.run(&Options::default()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_usage() => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
