//! Check command - review a tabular invoice file.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use invcheck_core::{RawTable, ReviewSession};

use super::{apply_review, emit, load_config, ReviewArgs};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Input CSV file
    #[arg(required = true)]
    input: PathBuf,

    /// Keep exact-duplicate rows
    #[arg(long)]
    keep_duplicates: bool,

    /// Skip whitespace trimming of cells
    #[arg(long)]
    no_trim: bool,

    /// Report empty numeric cells instead of zero-filling them silently
    #[arg(long)]
    no_fill: bool,

    /// Ignore a pre-existing Verified column instead of seeding from it
    #[arg(long)]
    ignore_verified: bool,

    #[command(flatten)]
    review: ReviewArgs,
}

pub fn run(args: CheckArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if args.keep_duplicates {
        config.cleaning.drop_duplicates = false;
    }
    if args.no_trim {
        config.cleaning.trim_whitespace = false;
    }
    if args.no_fill {
        config.cleaning.fill_missing = false;
    }
    if args.ignore_verified {
        config.cleaning.seed_verified = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Checking tabular file: {}", args.input.display());

    let table = RawTable::from_csv(File::open(&args.input)?)?;

    let mut session = ReviewSession::new(config);
    session.load_table(&table)?;

    if !session.missing_cells().is_empty() {
        eprintln!("{} Empty numeric cells:", style("!").yellow());
        for cell in session.missing_cells() {
            eprintln!("  row {}: {}", cell.row, cell.field.header());
        }
    }

    apply_review(&mut session, &args.review);
    emit(&session, &args.review)
}
