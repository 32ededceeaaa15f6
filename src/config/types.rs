//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_SITE_NAME, DEFAULT_TWITTER_SITE};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// What the run should do with the analyzed posts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Print a detailed per-post analysis report
    Analyze,
    /// Print a batch audit summary (score distribution, common issues)
    Audit,
    /// Write one analysis row per post to a file or stdout
    Export,
    /// Suggest automatic fixes for missing SEO fields
    Fix,
}

/// Output format for the export action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Flattened CSV, one row per post
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// Run configuration.
///
/// Doubles as the CLI definition and the library configuration: the binary
/// obtains it via `Config::parse()`, library callers construct it directly
/// (all fields are plain data, `..Default::default()` fills the rest).
///
/// # Examples
///
/// ```no_run
/// use seo_audit::{Config, run_audit};
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("posts.jsonl"),
///     ..Default::default()
/// };
/// let report = run_audit(config)?;
/// println!("Analyzed {} posts", report.posts_analyzed);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "seo_audit", about = "Analyze blog post snapshots for on-page SEO quality", version)]
pub struct Config {
    /// File of post snapshots to read, one JSON object per line ("-" for stdin)
    pub file: PathBuf,

    /// Action to perform
    #[arg(long, value_enum, default_value = "analyze")]
    pub action: Action,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Output file for export and fix actions (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Only include posts with at least this score
    #[arg(long, default_value_t = 0)]
    pub min_score: u32,

    /// Only include posts with at most this score
    #[arg(long, default_value_t = 100)]
    pub max_score: u32,

    /// Site base URL used for post URLs and link classification
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Site display name used in social preview data
    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// Twitter handle of the site, used in Twitter card data
    #[arg(long, default_value = DEFAULT_TWITTER_SITE)]
    pub twitter_site: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("posts.jsonl"),
            action: Action::Analyze,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: None,
            format: ExportFormat::Csv,
            min_score: 0,
            max_score: 100,
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            twitter_site: DEFAULT_TWITTER_SITE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        // Test all LogLevel variants convert correctly to log::LevelFilter
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.action, Action::Analyze);
        assert_eq!(config.format, ExportFormat::Csv);
        assert_eq!(config.min_score, 0);
        assert_eq!(config.max_score, 100);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_score_range_covers_full_scale_by_default() {
        let config = Config::default();
        assert!(config.min_score <= config.max_score);
        assert_eq!(config.max_score, 100);
    }
}
