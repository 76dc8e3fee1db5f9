//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// gmean - geometric mean of per-benchmark IPC ratios
///
/// Reads a results file with one `<baseline> <comparison>` pair per line
/// and prints the geometric mean of comparison/baseline.
///
/// Examples:
///   gmean
///   gmean runs/srrip/results.txt
///   gmean --verbose results.txt
///   gmean --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Results file to read
    ///
    /// Defaults to `results.txt` in the current directory, or the
    /// `[input] path` setting of the config file.
    #[arg(value_name = "RESULTS")]
    pub results: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .gmean.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output (per-record details on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .gmean.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(ref config) = self.config {
            if !config.is_file() {
                return Err(format!("Config file does not exist: {}", config.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            results: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_parse_positional_results() {
        let args = Args::try_parse_from(["gmean", "runs/dip.txt"]).unwrap();
        assert_eq!(args.results, Some(PathBuf::from("runs/dip.txt")));

        let args = Args::try_parse_from(["gmean"]).unwrap();
        assert!(args.results.is_none());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_missing_config() {
        let mut args = make_args();
        args.config = Some(PathBuf::from("/definitely/not/here/.gmean.toml"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::WARN);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }
}
