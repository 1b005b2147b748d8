//! CLI subcommands and shared review/output plumbing.

pub mod check;
pub mod config;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;

use invcheck_core::{write_csv, CheckerConfig, ItemId, ReviewSession};

/// Review and output options shared by both subcommands.
#[derive(Args)]
pub struct ReviewArgs {
    /// Search query narrowing the displayed items (substring, case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Toggle the verified flag of an item by id (repeatable)
    #[arg(short, long = "mark", value_name = "ID")]
    pub mark: Vec<u32>,

    /// Mark every item verified before applying toggles
    #[arg(long)]
    pub mark_all: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV with a Verified column
    Csv,
    /// JSON rows
    Json,
    /// Plain text review summary
    Text,
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CheckerConfig> {
    match config_path {
        Some(path) => Ok(CheckerConfig::from_file(Path::new(path))?),
        None => Ok(CheckerConfig::default()),
    }
}

/// Apply the shared review actions to a freshly loaded session.
pub fn apply_review(session: &mut ReviewSession, args: &ReviewArgs) {
    if args.mark_all {
        session.mark_all(true);
    }
    for id in &args.mark {
        session.toggle(ItemId::from(*id));
    }
    session.search(args.search.clone());
}

/// Render the session and write it to the requested destination.
pub fn emit(session: &ReviewSession, args: &ReviewArgs) -> anyhow::Result<()> {
    let rows = session.export();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            write_csv(&mut buf, &rows)?;
            String::from_utf8(buf)?
        }
        OutputFormat::Text => format_text(session),
    };

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(session: &ReviewSession) -> String {
    let mut out = String::new();
    let progress = session.progress();

    out.push_str(&format!(
        "Items: {} total, {} verified, {} remaining\n\n",
        progress.total, progress.verified, progress.remaining
    ));

    for (id, item) in session.visible() {
        let flag = if session.store().get(id) { "[x]" } else { "[ ]" };
        out.push_str(&format!(
            "{} #{:<3} {}  Qty: {} | Rate: {} | Value: {}\n",
            flag,
            id.as_u32(),
            item.name,
            item.qty,
            item.rate,
            item.value
        ));
    }

    if progress.all_verified() {
        out.push_str("\nAll items verified!\n");
    } else {
        out.push_str(&format!("\n{} items still need checking\n", progress.remaining));
    }

    out
}
