mod report;
mod summarizer;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use corpus_ingest::{ComponentRegistry, IngestConfig, SegmentBatch, SourceRoot};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::summarizer::ChatSummarizer;

#[derive(Parser)]
#[command(
    name = "corpus",
    version,
    about = "Prepare a source tree for retrieval-augmented QA"
)]
struct Cli {
    /// Verbose logs
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover, tag and chunk source files, then export the segments
    Ingest(IngestArgs),
}

#[derive(Args)]
struct IngestArgs {
    /// Path to a code root (repeatable), e.g. ./src
    #[arg(long = "repo")]
    repos: Vec<PathBuf>,

    /// Path to a docs root (repeatable)
    #[arg(long = "docs")]
    docs: Vec<PathBuf>,

    /// Path to the examples root
    #[arg(long, default_value = "./examples")]
    examples: PathBuf,

    /// Output path for the segment batch handed to the external indexer
    #[arg(long, default_value = ".corpus/segments.json")]
    out: PathBuf,

    /// Comma-separated file extensions to include
    #[arg(long)]
    include_exts: Option<String>,

    /// Comma-separated directory names to exclude
    #[arg(long)]
    exclude_dirs: Option<String>,

    /// Comma-separated file extensions to exclude
    #[arg(long)]
    exclude_exts: Option<String>,

    /// Approx chars per chunk for the default profile
    #[arg(long = "chunk")]
    chunk_chars: Option<usize>,

    /// Chunk overlap in chars for the default profile
    #[arg(long = "overlap")]
    chunk_overlap: Option<usize>,

    /// Build everything, print the summary, write nothing
    #[arg(long)]
    dry_run: bool,

    /// Chat-completion endpoint used for example summarization
    #[arg(long, default_value = "https://api.openai.com/v1")]
    llm_base_url: String,

    /// Model used for example summarization
    #[arg(long, default_value = "gpt-4o-mini")]
    llm_model: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Ingest(args) => ingest(args),
    }
}

fn ingest(args: IngestArgs) -> Result<()> {
    let mut config = IngestConfig::default();
    if let Some(exts) = &args.include_exts {
        config.include_exts = parse_ext_set(exts);
    }
    if let Some(dirs) = &args.exclude_dirs {
        config.exclude_dirs = parse_name_set(dirs);
    }
    if let Some(exts) = &args.exclude_exts {
        config.exclude_exts = parse_ext_set(exts);
    }
    if let Some(chunk_chars) = args.chunk_chars {
        config.profiles.default.target_chars = chunk_chars;
    }
    if let Some(chunk_overlap) = args.chunk_overlap {
        config.profiles.default.overlap_chars = chunk_overlap;
    }
    config.validate().context("invalid ingest configuration")?;

    let mut repos = args.repos.clone();
    let mut docs = args.docs.clone();
    if repos.is_empty() && docs.is_empty() {
        // Sensible defaults when no paths were given
        log::info!("no paths provided; assuming ./src and ./docs where present");
        if PathBuf::from("./src").exists() {
            repos.push(PathBuf::from("./src"));
        }
        if PathBuf::from("./docs").exists() {
            docs.push(PathBuf::from("./docs"));
        }
    }

    let mut roots: Vec<SourceRoot> = Vec::new();
    roots.extend(repos.into_iter().map(SourceRoot::code));
    roots.extend(docs.into_iter().map(SourceRoot::docs));
    if args.examples.exists() {
        roots.push(SourceRoot::examples(args.examples.clone()));
    }

    let summarizer = ChatSummarizer::from_env(&args.llm_base_url, &args.llm_model);
    let mut registry = ComponentRegistry::new();

    log::info!("starting ingestion");
    let outcome = corpus_ingest::run(&config, &roots, &summarizer, &mut registry)?;

    if args.dry_run {
        log::info!("dry run: skipping segment export");
        report::print_summary(&outcome, &registry);
        return Ok(());
    }

    let batch = SegmentBatch::from_chunks(&outcome.chunks);
    batch
        .save(&args.out)
        .with_context(|| format!("writing segment batch to {}", args.out.display()))?;
    log::info!(
        "ingest complete: {} segments -> {}",
        batch.len(),
        args.out.display()
    );
    if !outcome.report.errors.is_empty() {
        log::warn!(
            "{} example project(s) failed summarization",
            outcome.report.errors.len()
        );
    }
    Ok(())
}

fn parse_ext_set(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let token = token.to_lowercase();
            if token.starts_with('.') {
                token
            } else {
                format!(".{token}")
            }
        })
        .collect()
}

fn parse_name_set(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
