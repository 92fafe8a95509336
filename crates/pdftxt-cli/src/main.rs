//! CLI application that prints the text of a PDF, page by page.

mod config;
mod extract;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const USAGE: &str = "Usage: pdftxt <pdf_path>";
const EXAMPLE: &str = "Example: pdftxt /path/to/resume.pdf";

/// pdftxt - Print the text of a PDF file, page by page
#[derive(Parser)]
#[command(name = "pdftxt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    extract: extract::ExtractArgs,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            let mut stdout = std::io::stdout().lock();
            extract::write_line(&mut stdout, USAGE)?;
            extract::write_line(&mut stdout, EXAMPLE)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    // Set up logging based on verbosity; stdout is reserved for the text
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load(cli.config.as_deref())?;
    extract::run(cli.extract, config)
}
