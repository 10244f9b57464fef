//! Command-line interface for the converter.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use crate::batch::run_batch;
use crate::config::{ConvertConfig, ErrorPolicy};
use crate::error::ConvertError;

const USAGE: &str = "dta2csv -i inputfolder -o outputfolder -a";

#[derive(Parser, Debug)]
#[command(name = "dta2csv")]
#[command(about = "Convert Bruker DTA/DSC spectra to CSV", version)]
pub struct Cli {
    /// Root folder searched recursively for data files
    #[arg(short = 'i', long = "ifolder")]
    pub ifolder: Option<PathBuf>,

    /// Folder the CSV files are written to
    #[arg(short = 'o', long = "ofolder")]
    pub ofolder: Option<PathBuf>,

    /// Process all data files in the input folder
    #[arg(short = 'a')]
    pub all: bool,

    /// Log the failure and continue with the next file instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// JSON file overriding extensions and error policy
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Install `env_logger` at a level picked from the `-v` count.
fn init_logging(verbose: u8) {
    // RUST_LOG still wins when set.
    let _ = env_logger::Builder::new()
        .filter_level(match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .parse_default_env()
        .format_timestamp_secs()
        .try_init();
}

fn load_config(cli: &Cli) -> Result<ConvertConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let cfg = ConvertConfig::from_json(path)?;
            info!("Loaded config from: {}", path.display());
            cfg
        }
        None => ConvertConfig::default(),
    };
    if cli.keep_going {
        config.on_error = ErrorPolicy::Skip;
    }
    Ok(config)
}

/// Run a parsed command line. Returns the process exit status.
pub fn execute(cli: &Cli) -> i32 {
    if !cli.all {
        println!("Please specify the -a option to process all files in the folder.");
        return 0;
    }

    match convert_all(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            match e.downcast_ref::<ConvertError>() {
                Some(err) => {
                    if matches!(err, ConvertError::FolderNotSpecified(_)) {
                        eprintln!("{USAGE}");
                    }
                    err.exit_code()
                }
                None => 1,
            }
        }
    }
}

fn convert_all(cli: &Cli) -> Result<i32> {
    let input = cli
        .ifolder
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConvertError::FolderNotSpecified("input"))?;
    let output = cli
        .ofolder
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConvertError::FolderNotSpecified("output"))?;
    let config = load_config(cli)?;

    let start = Instant::now();
    let report = run_batch(input, output, &config)
        .with_context(|| format!("converting files under {}", input.display()))?;

    println!(
        "Converted {} file(s), {} row(s) in {:.2?}",
        report.converted.len(),
        report.total_rows(),
        start.elapsed()
    );
    if report.failed.is_empty() {
        return Ok(0);
    }
    for (path, err) in &report.failed {
        eprintln!("Failed: {}: {}", path.display(), err);
    }
    Ok(report
        .failed
        .iter()
        .map(|(_, err)| err.exit_code())
        .max()
        .unwrap_or(1))
}

/// Parse `std::env::args`, set up logging and run.
pub fn run() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(&cli)
}
