//! colldoc: resolve a collections documentation corpus into a JSON catalog.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use colldoc::{Catalog, FsSource, MarkdownRenderer, SourceConfig};

#[derive(Parser)]
#[command(name = "colldoc")]
#[command(about = "Resolve collection/method documentation into a catalog and search index")]
#[command(version)]
struct Args {
    /// Corpus root containing interfaces.yaml, collections.yaml and methods.yaml
    #[arg(long, short = 'r', default_value = ".", env = "COLLDOC_ROOT")]
    root: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Emit only the search index
    #[arg(long)]
    search_only: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = FsSource::new(SourceConfig::new(&args.root));
    let catalog = Catalog::build(&source, &MarkdownRenderer::new())
        .with_context(|| format!("failed to build catalog from {}", source.config().root().display()))?;

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("can't create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    match (args.search_only, args.pretty) {
        (true, true) => serde_json::to_writer_pretty(&mut out, &catalog.search)?,
        (true, false) => serde_json::to_writer(&mut out, &catalog.search)?,
        (false, true) => serde_json::to_writer_pretty(&mut out, &catalog)?,
        (false, false) => serde_json::to_writer(&mut out, &catalog)?,
    }
    writeln!(out)?;
    out.flush()?;

    if let Some(path) = &args.output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

/// Log to stderr. `COLLDOC_LOG` or `RUST_LOG` take precedence over `-v`.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("COLLDOC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
