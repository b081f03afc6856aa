//! Utility functions for the CLI.

use indicatif::{ProgressBar, ProgressStyle};
use lzss_core::StreamStats;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Create a byte progress bar with standard styling.
pub fn create_progress_bar(len: u64, enable: bool) -> ProgressBar {
    if !enable {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Open an existing input file, failing early with a clear message if it is missing.
pub fn open_input(path: &Path) -> Result<(BufReader<File>, u64), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("input file not found: {}", path.display()).into());
    }
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    Ok((BufReader::new(file), len))
}

/// Create (or truncate) the output file.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, Box<dyn std::error::Error>> {
    Ok(BufWriter::new(File::create(path)?))
}

/// Machine-readable statistics for one run.
#[derive(Debug, Serialize)]
pub struct StatsReport<'a> {
    pub mode: &'a str,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub literals: u64,
    pub matches: u64,
    pub blocks: u64,
    pub ratio: f64,
}

impl<'a> StatsReport<'a> {
    pub fn new(mode: &'a str, input: &Path, output: Option<&Path>, stats: &StreamStats) -> Self {
        Self {
            mode,
            input: input.display().to_string(),
            output: output.map(|p| p.display().to_string()),
            bytes_in: stats.bytes_in,
            bytes_out: stats.bytes_out,
            literals: stats.literals,
            matches: stats.matches,
            blocks: stats.blocks,
            ratio: stats.ratio(),
        }
    }
}

/// Print a stats report as JSON or as an aligned summary.
pub fn print_report(report: &StatsReport<'_>, json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    match &report.output {
        Some(output) => println!("{} -> {}", report.input, output),
        None => println!("{}", report.input),
    }
    println!("  {:<10} {:>12} bytes", "In:", report.bytes_in);
    println!("  {:<10} {:>12} bytes", "Out:", report.bytes_out);
    println!(
        "  {:<10} {:>12} ({} literals, {} matches)",
        "Tokens:",
        report.literals + report.matches,
        report.literals,
        report.matches
    );
    println!("  {:<10} {:>12}", "Blocks:", report.blocks);
    if report.bytes_in > 0 {
        println!("  {:<10} {:>11.1}%", "Ratio:", report.ratio * 100.0);
    }
    Ok(())
}
