use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use holereport::config::FileConfig;
use holereport::report::{DEFAULT_OUTPUT, write_report, write_rows};
use holereport::scan::{ScanOptions, list_input_files, scan_files};

/// Report hole areas of polygons in a folder of GeoJSON files
///
/// Every Polygon, and every member of a MultiPolygon, becomes one CSV row with
/// its area (exterior minus holes), total hole area and hole percentage.
///
/// Examples:
///   # Scan ./data and write hole_report.csv
///   holereport ./data
///
///   # Custom output, keep going past broken files
///   holereport ./data -o holes.csv --skip-invalid
///
///   # Print the report to stdout
///   holereport ./data -o -
#[derive(Parser, Debug)]
#[command(name = "holereport")]
#[command(version, about, long_about = None)]
struct Args {
    /// Folder containing GeoJSON files (not searched recursively)
    folder: PathBuf,

    /// Output CSV path, or "-" for stdout [default: hole_report.csv]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Path to config file (optional, auto-searches holereport.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip malformed documents with a warning instead of aborting
    #[arg(long)]
    skip_invalid: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    // Config loading logs, so the logger comes first; the level is raised
    // once the verbose setting is known.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp(None)
        .init();
    log::set_max_level(LevelFilter::Warn);

    let file_config = match args.config {
        Some(ref config_path) => FileConfig::load_from(config_path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    if args.verbose || file_config.verbose {
        log::set_max_level(LevelFilter::Debug);
    }

    let output = args
        .output
        .clone()
        .or_else(|| file_config.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let options = ScanOptions::default()
        .with_extensions(file_config.extensions.as_slice())
        .with_skip_invalid(args.skip_invalid || file_config.skip_invalid);

    log::debug!("input folder: {}", args.folder.display());
    log::debug!("output: {}", output.display());
    log::debug!("extensions: {}", options.extensions.join(", "));
    log::debug!("skip invalid: {}", options.skip_invalid);

    let files = list_input_files(&args.folder, &options.extensions)?;

    let progress = create_progress_bar(files.len() as u64)?;
    let outcome = scan_files(&files, &options, |path| {
        if let Some(name) = path.file_name() {
            progress.set_message(name.to_string_lossy().into_owned());
        }
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    if !outcome.files_skipped.is_empty() {
        log::warn!(
            "skipped {} malformed file(s)",
            outcome.files_skipped.len()
        );
    }

    if is_stdout(&output) {
        let stdout = std::io::stdout();
        write_rows(stdout.lock(), &outcome.rows).context("Failed to write report to stdout")?;
        eprintln!("Report written to standard output");
    } else {
        write_report(&output, &outcome.rows)?;
        println!("Report written to {}", output.display());
        std::io::stdout().flush()?;
    }

    log::info!(
        "{} file(s), {} polygon(s) in {:.1}s",
        outcome.files_processed,
        outcome.rows.len(),
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn create_progress_bar(len: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("=> ")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    Ok(pb)
}
