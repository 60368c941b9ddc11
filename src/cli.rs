//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap, exposing the
//! cache sweep cadence and staleness threshold as independent flags along
//! with the page size used by the map commands.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::cache::CacheConfig;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// An interval flag was set to zero
    #[error("Invalid {flag}: must be at least 1 second")]
    ZeroInterval { flag: &'static str },

    /// The page limit was set to zero
    #[error("Invalid --page-limit: must be at least 1")]
    ZeroPageLimit,
}

/// Pokedex CLI - browse the Pokemon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds between background sweeps of the response cache
    #[arg(long, value_name = "SECONDS", default_value_t = 5)]
    pub sweep_interval: u64,

    /// Seconds a cached response stays usable before the sweeper may evict it
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub stale_after: u64,

    /// Location areas fetched per map page
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    pub page_limit: u32,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Copy)]
pub struct StartupConfig {
    /// Cache tuning passed through to the response cache
    pub cache: CacheConfig,
    /// Results per location page
    pub page_limit: u32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            page_limit: 20,
        }
    }
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a startup configuration.
    ///
    /// Zero intervals are rejected here because the sweeper's timer cannot
    /// run on a zero period.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.sweep_interval == 0 {
            return Err(CliError::ZeroInterval {
                flag: "--sweep-interval",
            });
        }
        if cli.stale_after == 0 {
            return Err(CliError::ZeroInterval {
                flag: "--stale-after",
            });
        }
        if cli.page_limit == 0 {
            return Err(CliError::ZeroPageLimit);
        }

        Ok(Self {
            cache: CacheConfig {
                sweep_interval: Duration::from_secs(cli.sweep_interval),
                stale_after: Duration::from_secs(cli.stale_after),
            },
            page_limit: cli.page_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_original_constants() {
        let cli = Cli::parse_from(["pokedex"]);
        assert_eq!(cli.sweep_interval, 5);
        assert_eq!(cli.stale_after, 30);
        assert_eq!(cli.page_limit, 20);
    }

    #[test]
    fn test_startup_config_from_default_cli() {
        let cli = Cli::parse_from(["pokedex"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache.sweep_interval, Duration::from_secs(5));
        assert_eq!(config.cache.stale_after, Duration::from_secs(30));
        assert_eq!(config.page_limit, 20);
    }

    #[test]
    fn test_custom_intervals_are_independent() {
        let cli = Cli::parse_from([
            "pokedex",
            "--sweep-interval",
            "2",
            "--stale-after",
            "120",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache.sweep_interval, Duration::from_secs(2));
        assert_eq!(config.cache.stale_after, Duration::from_secs(120));
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        let cli = Cli::parse_from(["pokedex", "--sweep-interval", "0"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("--sweep-interval"));
    }

    #[test]
    fn test_zero_stale_after_rejected() {
        let cli = Cli::parse_from(["pokedex", "--stale-after", "0"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("--stale-after"));
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let cli = Cli::parse_from(["pokedex", "--page-limit", "0"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("--page-limit"));
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.cache.sweep_interval, Duration::from_secs(5));
        assert_eq!(config.cache.stale_after, Duration::from_secs(30));
        assert_eq!(config.page_limit, 20);
    }
}
