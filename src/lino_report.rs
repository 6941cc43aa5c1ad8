//! Links Notation (Lino) rendering of comparison reports.
//!
//! Links Notation represents structured data as indented links between
//! references:
//! - Simple reference: `name`
//! - Link with id and values: `(id: value1 value2)`
//! - Nesting by indentation:
//!   ```text
//!   parent:
//!     child1
//!     child2
//!   ```
//!
//! A report is written as a `comparison_report:` header, a `results:` section
//! grouped by `size_N:` and then by algorithm key, an `averages:` section and
//! a `summary:` section. Only the header and results are read back by
//! [`parse_lino_report`]; averages and summary are derived data.

use crate::algorithm::Algorithm;
use crate::comparison::{ComparisonReport, TrialResult};
use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

impl ComparisonReport {
    /// Render the report in Links Notation.
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail
        let _ = self.write_lino(&mut output);
        output
    }

    fn write_lino(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "comparison_report:")?;
        writeln!(output, "  timestamp '{}'", escape_lino_string(&self.timestamp))?;
        writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;

        writeln!(output)?;
        writeln!(output, "results:")?;
        for size in self.sizes() {
            writeln!(output, "  size_{}:", size)?;
            for result in self.results.iter().filter(|r| r.array_size == size) {
                writeln!(output, "    {}:", result.algorithm.key())?;
                writeln!(output, "      time_ms {:.3}", result.time_ms)?;
                writeln!(output, "      comparisons {}", result.comparisons)?;
                writeln!(output, "      swaps {}", result.swaps)?;
                writeln!(output, "      verified {}", result.verified)?;
            }
        }

        writeln!(output)?;
        writeln!(output, "averages:")?;
        for avg in self.averages() {
            writeln!(output, "  {}:", avg.algorithm.key())?;
            writeln!(output, "    avg_time_ms {:.3}", avg.avg_time_ms)?;
            writeln!(output, "    avg_comparisons {:.1}", avg.avg_comparisons)?;
            writeln!(output, "    avg_swaps {:.1}", avg.avg_swaps)?;
        }

        if let Some(summary) = self.summary() {
            writeln!(output)?;
            writeln!(output, "summary:")?;
            writeln!(output, "  array_size {}", summary.array_size)?;
            writeln!(output, "  faster {}", summary.faster.key())?;
            writeln!(output, "  time_difference_ms {:.3}", summary.time_difference_ms)?;
            writeln!(output, "  more_efficient {}", summary.more_efficient.key())?;
            writeln!(
                output,
                "  comparison_difference {}",
                summary.comparison_difference
            )?;
        }

        Ok(())
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Render the report as Markdown tables.
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        let _ = self.write_markdown(&mut output);
        output
    }

    fn write_markdown(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "# Sorting Algorithm Comparison Report")?;
        writeln!(output)?;
        writeln!(output, "**Timestamp:** {}", self.timestamp)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output)?;

        writeln!(output, "## Results")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Size | Algorithm | Time (ms) | Comparisons | Swaps | Verified |"
        )?;
        writeln!(
            output,
            "|------|-----------|-----------|-------------|-------|----------|"
        )?;
        for size in self.sizes() {
            for result in self.results.iter().filter(|r| r.array_size == size) {
                writeln!(
                    output,
                    "| {} | {} | {:.3} | {} | {} | {} |",
                    format_count(size as u64),
                    result.algorithm.name(),
                    result.time_ms,
                    format_count(result.comparisons),
                    format_count(result.swaps),
                    if result.verified { "yes" } else { "NO" }
                )?;
            }
        }
        writeln!(output)?;

        writeln!(output, "## Averages")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Algorithm | Avg Time (ms) | Avg Comparisons | Avg Swaps |"
        )?;
        writeln!(
            output,
            "|-----------|---------------|-----------------|-----------|"
        )?;
        for avg in self.averages() {
            writeln!(
                output,
                "| {} | {:.3} | {} | {} |",
                avg.algorithm.name(),
                avg.avg_time_ms,
                format_count(avg.avg_comparisons.round() as u64),
                format_count(avg.avg_swaps.round() as u64)
            )?;
        }
        writeln!(output)?;

        if let Some(summary) = self.summary() {
            writeln!(
                output,
                "## Summary (size {})",
                format_count(summary.array_size as u64)
            )?;
            writeln!(output)?;
            writeln!(output, "- **Faster algorithm:** {}", summary.faster.name())?;
            writeln!(
                output,
                "- **Time difference:** {:.3} ms",
                summary.time_difference_ms
            )?;
            writeln!(
                output,
                "- **More efficient (comparisons):** {}",
                summary.more_efficient.name()
            )?;
            writeln!(
                output,
                "- **Comparison difference:** {}",
                format_count(summary.comparison_difference)
            )?;
            writeln!(output)?;
        }

        writeln!(output, "---")?;
        writeln!(output, "*Report generated by sorting-simulator*")?;
        Ok(())
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown_table())
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Group digits in thousands, e.g. 1234567 -> "1,234,567"
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Current UTC time as an ISO 8601 timestamp, without external dependencies
pub(crate) fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_timestamp(secs)
}

fn format_timestamp(secs: u64) -> String {
    // Leap seconds are ignored
    let days_since_epoch = secs / 86400;
    let time_of_day = secs % 86400;

    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    let mut year = 1970i64;
    let mut remaining_days = days_since_epoch as i64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let february = if is_leap_year(year) { 29 } else { 28 };
    let days_in_months = [31, february, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    let mut month = 1;
    for &days in &days_in_months {
        if remaining_days < days {
            break;
        }
        remaining_days -= days;
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        remaining_days + 1,
        hours,
        minutes,
        seconds
    )
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Parse a Links Notation comparison report.
///
/// Reads the header and the `results:` section; returns `None` when no
/// results were found. Unknown algorithm keys are skipped.
pub fn parse_lino_report(content: &str) -> Option<ComparisonReport> {
    let mut report = ComparisonReport::new("Parsed report");
    let mut current_size: Option<usize> = None;
    let mut current_result: Option<TrialResult> = None;
    let mut in_results_section = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Top-level section headers are unindented
        if !line.starts_with(' ') && trimmed.ends_with(':') {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            in_results_section = trimmed == "results:";
            current_size = None;
            continue;
        }

        if trimmed.starts_with("timestamp '") {
            if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                report.timestamp = ts;
            }
            continue;
        }
        if trimmed.starts_with("description '") {
            if let Some(desc) = extract_quoted_value(trimmed, "description") {
                report.description = desc;
            }
            continue;
        }

        if !in_results_section {
            continue;
        }

        if let Some(size_str) = trimmed
            .strip_prefix("size_")
            .and_then(|rest| rest.strip_suffix(':'))
        {
            if let Some(result) = current_result.take() {
                report.results.push(result);
            }
            current_size = size_str.parse().ok();
            continue;
        }

        if let (Some(size), Some(key)) = (current_size, trimmed.strip_suffix(':')) {
            if !key.contains(' ') {
                if let Some(result) = current_result.take() {
                    report.results.push(result);
                }
                current_result = key.parse::<Algorithm>().ok().map(|algorithm| TrialResult {
                    algorithm,
                    array_size: size,
                    time_ms: 0.0,
                    comparisons: 0,
                    swaps: 0,
                    verified: false,
                });
                continue;
            }
        }

        if let Some(ref mut result) = current_result {
            if let Some(value) = trimmed.strip_prefix("time_ms ") {
                result.time_ms = value.parse().unwrap_or(result.time_ms);
            } else if let Some(value) = trimmed.strip_prefix("comparisons ") {
                result.comparisons = value.parse().unwrap_or(result.comparisons);
            } else if let Some(value) = trimmed.strip_prefix("swaps ") {
                result.swaps = value.parse().unwrap_or(result.swaps);
            } else if let Some(value) = trimmed.strip_prefix("verified ") {
                result.verified = value == "true";
            }
        }
    }

    if let Some(result) = current_result {
        report.results.push(result);
    }

    if report.results.is_empty() {
        None
    } else {
        Some(report)
    }
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let quoted = line.strip_prefix(prefix)?.trim();
    let inner = quoted.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}
