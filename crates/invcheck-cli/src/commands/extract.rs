//! Extract command - review items recovered from an OCR line dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use invcheck_core::{CheckError, ExtractionError, PlainTextSource, ReviewSession};

use super::{apply_review, emit, load_config, ReviewArgs};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file holding the OCR collaborator's output, one line per row
    #[arg(required = true)]
    input: PathBuf,

    /// Print lines that failed both parse strategies
    #[arg(long)]
    show_unparsed: bool,

    #[command(flatten)]
    review: ReviewArgs,
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Extracting items from: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let mut source = PlainTextSource::new(text);

    let mut session = ReviewSession::new(config);
    match session.load_source(&mut source) {
        Ok(()) => {}
        Err(CheckError::Extraction(ExtractionError::EmptyExtraction { raw_lines })) => {
            // Recoverable: show the raw output for manual review instead of
            // presenting an empty table as success.
            eprintln!(
                "{} No items could be extracted; raw OCR output follows:",
                style("!").yellow()
            );
            for line in &raw_lines {
                eprintln!("  {}", line);
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    apply_review(&mut session, &args.review);

    if args.show_unparsed && !session.unparsed_lines().is_empty() {
        eprintln!("{} Unparsed lines:", style("!").yellow());
        for line in session.unparsed_lines() {
            eprintln!("  {}", line);
        }
    }

    emit(&session, &args.review)
}
