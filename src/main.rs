//! gmean - geometric mean of per-benchmark performance ratios
//!
//! Reads a results file of `<baseline> <comparison>` pairs (typically LRU
//! IPC vs. a candidate replacement policy's IPC, one benchmark per line)
//! and prints the geometric mean of comparison/baseline.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Any error (unreadable file, malformed line, degenerate input)

mod analysis;
mod cli;
mod config;
mod error;
mod loader;
mod models;
mod report;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Where the effective configuration came from.
#[derive(Debug)]
enum ConfigSource {
    Explicit(PathBuf),
    DefaultFile,
    Builtin,
    /// The default file exists but could not be parsed.
    Ignored(anyhow::Error),
}

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let (mut config, source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("gmean v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);
    log_config_source(&source);

    let stdout = std::io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        debug!("Run failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Load the results file, compute the geometric mean and write the result line.
fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let path = &config.input.path;

    let records = loader::load_records(path)?;
    let gmean = analysis::compute_geometric_mean(&records)
        .with_context(|| format!("Cannot compute geometric mean of {}", path.display()))?;

    info!("Geometric mean over {} records: {}", gmean.count, gmean.value);

    report::write_gmean(out, &gmean).context("Failed to write result")?;

    Ok(())
}

/// Handle --init-config: generate a default .gmean.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);

    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            DEFAULT_CONFIG_FILE
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", DEFAULT_CONFIG_FILE))?;

    println!("Created {} with default settings.", DEFAULT_CONFIG_FILE);
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout carries only the result line.
fn init_logging(args: &Args, config: &Config) {
    let level = if !args.quiet && config.general.verbose {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<(Config, ConfigSource)> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        let config = Config::load(config_path)?;
        return Ok((config, ConfigSource::Explicit(config_path.clone())));
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => Ok((config, ConfigSource::DefaultFile)),
        Ok(None) => Ok((Config::default(), ConfigSource::Builtin)),
        Err(e) => Ok((Config::default(), ConfigSource::Ignored(e))),
    }
}

fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::Explicit(path) => info!("Loaded config from: {}", path.display()),
        ConfigSource::DefaultFile => info!("Loaded default config from {}", DEFAULT_CONFIG_FILE),
        ConfigSource::Builtin => debug!("No config file found, using defaults"),
        ConfigSource::Ignored(e) => warn!("Failed to load config: {:#}", e),
    }
}
