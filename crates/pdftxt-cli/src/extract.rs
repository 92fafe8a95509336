//! Extract the text of a single PDF file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, error, info, warn};

use pdftxt_core::{Backend, ExtractedText, PdftxtConfig, TextExtractor};

const FAILURE_MESSAGE: &str = "Failed to extract text from PDF";

/// Arguments for text extraction.
#[derive(Args)]
pub struct ExtractArgs {
    /// PDF file to read
    #[arg(value_name = "PDF_PATH")]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Page-text backend (overrides the config file)
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// Password for encrypted PDFs (overrides the config file)
    #[arg(short, long)]
    password: Option<String>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON with the text and page counts
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BackendArg {
    /// lopdf, one page at a time
    Lopdf,
    /// pdf-extract, layout-aware
    PdfExtract,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Lopdf => Backend::Lopdf,
            BackendArg::PdfExtract => Backend::PdfExtract,
        }
    }
}

pub fn run(args: ExtractArgs, mut config: PdftxtConfig) -> anyhow::Result<ExitCode> {
    let start = Instant::now();

    if let Some(backend) = args.backend {
        config.pdf.backend = backend.into();
    }
    if let Some(password) = args.password {
        config.pdf.password = Some(password);
    }

    info!("Processing file: {}", args.input.display());

    let extractor = TextExtractor::new(config.pdf);
    let extracted = match extractor.extract_file(&args.input) {
        Ok(extracted) => extracted,
        Err(e) => {
            error!("Error extracting PDF: {}", e);
            write_line(io::stdout().lock(), FAILURE_MESSAGE)?;
            return Ok(if config.output.zero_exit_on_failure {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    };

    if extracted.is_empty() {
        warn!(
            "No extractable text found in {} ({} pages)",
            args.input.display(),
            extracted.page_count
        );
    }

    let output = format_output(&extracted, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else if !output.is_empty() {
        write_line(io::stdout().lock(), &output)?;
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(ExitCode::SUCCESS)
}

/// Write `text` and a newline; a reader that went away is not an error.
pub fn write_line<W: Write>(mut out: W, text: &str) -> io::Result<()> {
    match writeln!(out, "{}", text).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn format_output(extracted: &ExtractedText, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(extracted.text.clone()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(extracted)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractedText {
        let mut extracted = ExtractedText::new(2);
        extracted.push_page("Jane Doe");
        extracted
    }

    #[test]
    fn test_format_text() {
        assert_eq!(format_output(&sample(), OutputFormat::Text).unwrap(), "Jane Doe\n");
    }

    #[test]
    fn test_format_json() {
        let json = format_output(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["text"], "Jane Doe\n");
        assert_eq!(value["page_count"], 2);
        assert_eq!(value["pages_with_text"], 1);
    }

    /// Writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    /// Writer that fails for other reasons.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_line() {
        let mut out = Vec::new();
        write_line(&mut out, "Jane Doe\n").unwrap();
        assert_eq!(out, b"Jane Doe\n\n");
    }

    #[test]
    fn test_write_line_closed_pipe() {
        assert!(write_line(ClosedPipe, "dropped").is_ok());
    }

    #[test]
    fn test_write_line_other_errors() {
        assert!(write_line(FullDisk, "lost").is_err());
    }

    #[test]
    fn test_backend_arg() {
        assert_eq!(Backend::from(BackendArg::Lopdf), Backend::Lopdf);
        assert_eq!(Backend::from(BackendArg::PdfExtract), Backend::PdfExtract);
    }
}
