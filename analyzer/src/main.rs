use analyzer::{parse_threshold, render_json, render_table};
use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lexsim_core::{analyze, load_corpus, IoPolicy, LoadOptions, Threshold};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(about = "Flag plain-text documents that may share an author", long_about = None)]
struct Cli {
    /// Directory of text files, one document per file (prompted if omitted)
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Similarity percentage (0-100) at which a pair is reported (prompted if omitted)
    #[arg(long)]
    threshold: Option<u32>,
    /// Abort on unreadable files instead of treating them as empty
    #[arg(long, default_value_t = false)]
    strict: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let threshold = match cli.threshold {
        Some(percent) => Threshold::new(percent)?,
        None => parse_threshold(&prompt("Enter the similarity percentage: ")?)?,
    };
    let dir = match cli.dir {
        Some(dir) => dir,
        None => PathBuf::from(prompt("Enter the directory of a folder of text files: ")?.trim()),
    };

    let options = LoadOptions { on_io_error: if cli.strict { IoPolicy::Strict } else { IoPolicy::Lenient } };
    tracing::info!(dir = %dir.display(), "reading texts");
    let corpus = load_corpus(&dir, &options).with_context(|| format!("loading corpus from {}", dir.display()))?;
    if corpus.is_empty() {
        bail!("no documents found in {}", dir.display());
    }

    let report = analyze(&corpus.documents, threshold);
    let rendered = match cli.format {
        Format::Table => render_table(&report),
        Format::Json => render_json(&report, &corpus.failed)?,
    };
    println!("{rendered}");
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{message}")?;
    stderr.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("reading from stdin")?;
    Ok(line)
}
