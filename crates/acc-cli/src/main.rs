//! `acc-compact` — sort accession identifiers and print consecutive runs as ranges.
//!
//! ```text
//! $ acc-compact ERR000113, ERR100114, ERR000111, ERR000112
//! ERR000111-ERR000113, ERR100114
//! ```

mod config;

use std::path::PathBuf;

use acc_compactor::{adapter, RangeCompactor};
use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::{OutputConfig, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "acc-compact",
    version,
    about = "Sort accessions and compact consecutive runs into first-last ranges"
)]
struct Args {
    /// Accessions; commas inside or between them are ignored.
    accessions: Vec<String>,

    /// Separator placed between output items (default ", ").
    #[arg(long)]
    separator: Option<String>,

    /// Print the tokens as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Optional JSON file with output settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log input/output counts.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acc_cli=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => OutputConfig::load(path)?,
        None => OutputConfig::default(),
    }
    .with_overrides(args.separator, args.json);
    debug!(?config, "output config");

    let accessions = adapter::collect_accessions(&args.accessions);
    let result = RangeCompactor::new().compact(&accessions);

    if args.stats {
        info!(
            inputs = result.input_count,
            ranges = result.range_count,
            singles = result.single_count,
            ratio = result.ratio(),
            "compaction finished"
        );
    }

    let output = match config.format {
        OutputFormat::Text => adapter::render_text(&result.tokens, &config.separator),
        OutputFormat::Json => adapter::render_json(&result.tokens)?,
    };
    println!("{output}");

    Ok(())
}
