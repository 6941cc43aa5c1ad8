//! Sorting Simulator
//!
//! Command-line front end for the instrumented sorting engine:
//! - `sort`: run one algorithm, optionally animating every event in the terminal
//! - `compare`: head-to-head comparison of two algorithms across input sizes
//! - `list`: show the available algorithms and their complexity
//!
//! Set `RUST_LOG=debug` for per-run diagnostics.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sorting_simulator::event::{DEFAULT_SPEED, STEP_BY_STEP_SPEED};
use sorting_simulator::input::{self, DISPLAY_VALUE_RANGE};
use sorting_simulator::{
    is_sorted, run_comparison, Algorithm, ComparisonConfig, Event, Highlight, NoopSink, PacedSink,
    SortStats,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default number of elements in a generated array
const DEFAULT_ARRAY_SIZE: usize = 20;
/// Default comparison sizes
const DEFAULT_COMPARISON_SIZES: &str = "100,500,1000";

#[derive(Parser)]
#[command(
    name = "sorting-simulator",
    version,
    about = "Watch classical sorting algorithms compare, swap and place elements"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort one array with one algorithm
    Sort(SortArgs),
    /// Compare two algorithms across several input sizes
    Compare(CompareArgs),
    /// List available algorithms
    List,
}

#[derive(Args)]
struct SortArgs {
    /// Algorithm name, e.g. "Bubble Sort", bubble_sort or bubble
    #[arg(short, long, default_value = "Bubble Sort")]
    algorithm: Algorithm,

    /// Comma-separated custom array; overrides --size
    #[arg(long)]
    array: Option<String>,

    /// Number of random elements to generate
    #[arg(short, long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Seed for reproducible random arrays
    #[arg(long)]
    seed: Option<u64>,

    /// Print every event as it happens
    #[arg(long)]
    animate: bool,

    /// Animation speed, 1 (slowest) to 100
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: u32,

    /// Slow animation down for step-by-step viewing
    #[arg(long)]
    step_by_step: bool,
}

#[derive(Args)]
struct CompareArgs {
    /// First algorithm
    #[arg(long)]
    first: Algorithm,

    /// Second algorithm
    #[arg(long)]
    second: Algorithm,

    /// Comma-separated array sizes, each between 1 and 10000
    #[arg(long, default_value = DEFAULT_COMPARISON_SIZES)]
    sizes: String,

    /// Seed for reproducible inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Print every swap and sorted-marker event
    #[arg(long)]
    show_events: bool,

    /// Write the report in Links Notation to this path
    #[arg(long)]
    lino: Option<PathBuf>,

    /// Write the report as Markdown to this path
    #[arg(long)]
    markdown: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.cmd {
        Command::Sort(args) => run_sort(args),
        Command::Compare(args) => run_compare(args),
        Command::List => {
            list_algorithms();
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_sort(args: SortArgs) -> Result<()> {
    let mut data = match args.array.as_deref() {
        Some(text) => input::parse_custom_array(text).context("invalid --array")?,
        None => input::random_sequence(args.size, DISPLAY_VALUE_RANGE, args.seed),
    };
    let initial = data.clone();
    let algorithm = args.algorithm;

    println!("Algorithm: {}", algorithm);
    println!("Initial array: {:?}", initial);

    let mut stats = SortStats::new();
    let outcome = if args.animate {
        let speed = if args.step_by_step {
            STEP_BY_STEP_SPEED
        } else {
            args.speed
        };
        let mut sink =
            PacedSink::new(|event: Event<'_>| println!("{}", render_event(&event)), speed);
        algorithm.timed_run(&mut data, &mut stats, &mut sink)
    } else {
        algorithm.timed_run(&mut data, &mut stats, &mut NoopSink)
    };
    outcome.with_context(|| format!("{} failed", algorithm))?;

    println!("Final array: {:?}", data);
    println!("Comparisons: {}", stats.comparisons);
    println!("Swaps: {}", stats.swaps);
    println!("Time: {:.3} s", stats.elapsed().as_secs_f64());

    if is_sorted(&data) {
        println!("Sort verified: OK");
    } else {
        println!("ERROR: {} failed verification!", algorithm);
    }
    Ok(())
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let sizes = input::parse_sizes(&args.sizes).context("invalid --sizes")?;
    let config = ComparisonConfig::new(args.first, args.second, sizes, args.seed)?;

    info!(
        first = config.first.name(),
        second = config.second.name(),
        sizes = ?config.sizes,
        "starting comparison"
    );

    let report = if args.show_events {
        run_comparison(&config, &mut |event: Event<'_>| match event.highlight {
            Some(Highlight::Swapping(i, j)) => println!("Swapping indices [{i}, {j}]"),
            Some(Highlight::Sorted(indices)) if !indices.is_empty() => {
                println!("Marked {} elements as sorted", indices.len())
            }
            _ => {}
        })?
    } else {
        run_comparison(&config, &mut NoopSink)?
    };

    println!("Algorithm Comparison Results");
    println!("============================\n");
    for avg in report.averages() {
        println!("{}:", avg.algorithm);
        println!("  Average Time: {:.3} ms", avg.avg_time_ms);
        println!("  Average Comparisons: {:.0}", avg.avg_comparisons);
        println!("  Average Swaps: {:.0}", avg.avg_swaps);
        for size in report.sizes() {
            if let Some(result) = report.find(avg.algorithm, size) {
                println!(
                    "  size {:>5}: {:>10.3} ms {:>12} comparisons {:>12} swaps",
                    size, result.time_ms, result.comparisons, result.swaps
                );
            }
        }
        println!();
    }

    if let Some(summary) = report.summary() {
        println!("Comparison Summary (size {}):", summary.array_size);
        println!("  Faster Algorithm: {}", summary.faster);
        println!("  Time Difference: {:.3} ms", summary.time_difference_ms);
        println!("  More Efficient (Comparisons): {}", summary.more_efficient);
        println!("  Comparison Difference: {}", summary.comparison_difference);
    }

    if !report.all_verified() {
        println!("WARNING: some runs failed verification!");
    }

    if let Some(path) = &args.lino {
        report
            .save_lino(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Links Notation report written to: {}", path.display());
    }
    if let Some(path) = &args.markdown {
        report
            .save_markdown(path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Markdown report written to: {}", path.display());
    }
    Ok(())
}

fn list_algorithms() {
    println!(
        "{:<16} {:<16} {:>10} {:>10} {:>10} {:>8}",
        "Name", "Key", "Best", "Average", "Worst", "Space"
    );
    println!("{:-<16} {:-<16} {:->10} {:->10} {:->10} {:->8}", "", "", "", "", "", "");
    for algorithm in Algorithm::ALL {
        let info = algorithm.info();
        println!(
            "{:<16} {:<16} {:>10} {:>10} {:>10} {:>8}",
            algorithm.name(),
            algorithm.key(),
            info.best,
            info.average,
            info.worst,
            info.space
        );
    }
}

/// One line per event: highlight tag, the array with highlighted slots in
/// brackets, and the running counters.
fn render_event(event: &Event<'_>) -> String {
    let tag = event.highlight.map_or("", Highlight::kind);
    let cells: Vec<String> = event
        .sequence
        .iter()
        .enumerate()
        .map(|(i, value)| match event.highlight {
            Some(h) if h.contains(i) => format!("[{value}]"),
            _ => value.to_string(),
        })
        .collect();

    format!(
        "{:<10} {}  (comparisons {}, swaps {})",
        tag,
        cells.join(" "),
        event.stats.comparisons,
        event.stats.swaps
    )
}
