//! Lino to Markdown Converter
//!
//! Converts a Links Notation comparison report (as written by
//! `sorting-simulator compare --lino`) to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use anyhow::{bail, Context, Result};
use sorting_simulator::lino_report::parse_lino_report;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.lino> [output.md]", args[0]);
        eprintln!();
        eprintln!("Converts a Links Notation comparison report to Markdown format.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  input.lino    Path to the Links Notation report file");
        eprintln!("  output.md     Optional output path (prints to stdout if not specified)");
        std::process::exit(1);
    }

    if let Err(e) = convert(Path::new(&args[1]), args.get(2).map(Path::new)) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn convert(input_path: &Path, output_path: Option<&Path>) -> Result<()> {
    let content = fs::read_to_string(input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let Some(report) = parse_lino_report(&content) else {
        bail!("could not parse the Links Notation report; make sure it contains a results: section");
    };

    let markdown = report.to_markdown_table();
    match output_path {
        Some(path) => {
            fs::write(path, &markdown).with_context(|| format!("writing {}", path.display()))?;
            println!("Markdown report written to: {}", path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(())
}
