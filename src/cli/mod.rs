//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use quotewatch_config::LoggingConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quotewatch")]
#[command(author, version, about = "Periodic quote polling with a live terminal chart")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the config `[logging]` section)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format (overrides the config `[logging]` section)
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Resolve the effective log level and format: CLI flags win, the
/// config `[logging]` section fills in whatever the flags leave unset.
pub fn effective_logging(
    level_flag: Option<&LogLevel>,
    json_flag: bool,
    config: &LoggingConfig,
) -> (String, bool) {
    let level = match level_flag {
        Some(level) => level.as_str().to_string(),
        None => config.level.clone(),
    };
    let json = json_flag || config.format.eq_ignore_ascii_case("json");
    (level, json)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Stream live quotes from the configured quote service
    Stream(StreamArgs),
    /// Stream a synthetic random walk (no API key needed)
    Demo(DemoArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct StreamArgs {
    /// Symbol to observe (overrides config)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Seconds between polls (overrides config)
    #[arg(short, long)]
    pub interval_secs: Option<u64>,

    /// Most recent rows kept for rendering (overrides config)
    #[arg(long)]
    pub backlog: Option<usize>,

    /// Print rows as text instead of drawing the chart
    #[arg(long)]
    pub plain: bool,
}

#[derive(clap::Args)]
pub struct DemoArgs {
    /// Symbol label for the synthetic stream
    #[arg(short, long, default_value = "DEMO")]
    pub symbol: String,

    /// Starting mid price for the random walk
    #[arg(long, default_value = "100.0")]
    pub base_price: f64,

    /// Seconds between ticks (overrides config)
    #[arg(short, long)]
    pub interval_secs: Option<u64>,

    /// Most recent rows kept for rendering (overrides config)
    #[arg(long)]
    pub backlog: Option<usize>,

    /// Print rows as text instead of drawing the chart
    #[arg(long)]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_logging_defaults_from_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "json".to_string(),
        };

        let (level, json) = effective_logging(None, false, &config);
        assert_eq!(level, "debug");
        assert!(json);
    }

    #[test]
    fn test_effective_logging_flags_override_config() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        };

        let (level, json) = effective_logging(Some(&LogLevel::Warn), true, &config);
        assert_eq!(level, "warn");
        assert!(json);
    }

    #[test]
    fn test_effective_logging_pretty_config_stays_pretty() {
        let (level, json) = effective_logging(None, false, &LoggingConfig::default());
        assert_eq!(level, "info");
        assert!(!json);
    }
}
