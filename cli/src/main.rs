//! Tie strength CLI: computes author tie strengths from node and adjacency lists
//!
//! Writes the per-author result table and a strength snapshot, and renders the
//! strength distribution.

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tiestrength::persistence::{load_snapshot, save_snapshot};
use tiestrength::report::{self, histogram::DEFAULT_BINS};
use tiestrength::{
    compute_from_files, Histogram, PairCounting, StrengthSnapshot, StrengthSummary,
    TieStrengthConfig, DEFAULT_TOP_K,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tiestrength", version, about = "Collaboration graph tie strength analysis")]
struct Cli {
    /// Output format for printed summaries
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Pairs {
    Unordered,
    Ordered,
}

impl From<Pairs> for PairCounting {
    fn from(p: Pairs) -> Self {
        match p {
            Pairs::Unordered => PairCounting::Unordered,
            Pairs::Ordered => PairCounting::Ordered,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute tie strengths and each author's strongest ties
    Compute {
        /// Node list: `<id> <label>` per line
        #[arg(short, long)]
        nodes: PathBuf,

        /// Adjacency list: `<source> <dest>...` per line
        #[arg(short, long)]
        adjacency: PathBuf,

        /// Tab-separated result table
        #[arg(short, long, default_value = "answer.tsv")]
        output: PathBuf,

        /// Strength snapshot file
        #[arg(long, default_value = "ties.bin.gz")]
        ties: PathBuf,

        /// Strongest ties reported per author
        #[arg(short, long = "top-k", default_value_t = DEFAULT_TOP_K, env = "TIESTRENGTH_K")]
        k: usize,

        /// Pair counting for the strength distribution
        #[arg(long, value_enum, default_value = "unordered")]
        pairs: Pairs,

        /// Evaluate on a single thread
        #[arg(long)]
        sequential: bool,

        /// Histogram bins
        #[arg(long, default_value_t = DEFAULT_BINS)]
        bins: usize,
    },
    /// Render the distribution stored in a strength snapshot
    Histogram {
        /// Snapshot written by `compute`
        snapshot: PathBuf,

        /// Histogram bins
        #[arg(long, default_value_t = DEFAULT_BINS)]
        bins: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compute {
            nodes,
            adjacency,
            output,
            ties,
            k,
            pairs,
            sequential,
            bins,
        } => {
            let config = TieStrengthConfig {
                k,
                parallel: !sequential,
                pair_counting: pairs.into(),
            };
            run_compute(&nodes, &adjacency, &output, &ties, &config, bins, &cli.format)
        }
        Commands::Histogram { snapshot, bins } => run_histogram(&snapshot, bins, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run_compute(
    nodes: &Path,
    adjacency: &Path,
    output: &Path,
    ties: &Path,
    config: &TieStrengthConfig,
    bins: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let (registry, report) = compute_from_files(nodes, adjacency, config)?;

    let file = File::create(output).with_context(|| format!("creating {:?}", output))?;
    report::write_rows(BufWriter::new(file), &report.rows)
        .with_context(|| format!("writing {:?}", output))?;
    info!("Wrote {} rows to {:?}", report.rows.len(), output);

    let snapshot = StrengthSnapshot::new(config.pair_counting, registry.len(), report.strengths);
    save_snapshot(ties, &snapshot).with_context(|| format!("writing {:?}", ties))?;

    print_distribution(&snapshot, bins, format)
}

fn run_histogram(path: &Path, bins: usize, format: &OutputFormat) -> anyhow::Result<()> {
    let snapshot = load_snapshot(path).with_context(|| format!("reading {:?}", path))?;
    print_distribution(&snapshot, bins, format)
}

fn print_distribution(
    snapshot: &StrengthSnapshot,
    bins: usize,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let summary = StrengthSummary::from_strengths(&snapshot.strengths);
    let histogram = Histogram::from_strengths(&snapshot.strengths, bins);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "nodes": snapshot.node_count,
                "pair_counting": snapshot.pair_counting,
                "summary": summary,
                "histogram": histogram.buckets(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Csv => {
            println!("lower,upper,count");
            for bucket in histogram.buckets() {
                println!("{:.3},{:.3},{}", bucket.lower, bucket.upper, bucket.count);
            }
        }
        OutputFormat::Table => {
            println!("Nodes:      {}", snapshot.node_count);
            println!("Pairs:      {} ({:?})", summary.count, snapshot.pair_counting);
            println!("Mean:       {:.4}", summary.mean);
            println!("Min / Max:  {:.4} / {:.4}", summary.min, summary.max);
            println!("Zero ties:  {}", summary.zero_count);
            println!();

            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Tie strength", "Pairs", "Distribution (log)"]);

            for bucket in histogram.buckets() {
                let bar = "#".repeat(histogram.log_bar(bucket.count, 40));
                table.add_row(vec![
                    format!("{:.2} - {:.2}", bucket.lower, bucket.upper),
                    bucket.count.to_string(),
                    bar,
                ]);
            }

            println!("{}", table);
        }
    }

    Ok(())
}
