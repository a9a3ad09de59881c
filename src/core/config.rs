//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.homeview/config.toml` unless `--config` points
//! elsewhere. A missing default file is fine; nothing is ever written.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::status::LoanStatus;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HomeviewConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub active: Option<bool>,
    pub loan_status: Option<LoanStatus>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

/// Values taken from the command line. `None` means the flag was not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub active: Option<bool>,
    pub loan_status: Option<LoanStatus>,
    /// Number of `-v` flags.
    pub verbosity: u8,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ACTIVE: bool = true;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub const ENV_ACTIVE: &str = "HOMEVIEW_ACTIVE";
pub const ENV_LOAN_STATUS: &str = "HOMEVIEW_LOAN_STATUS";
pub const ENV_LOG_LEVEL: &str = "HOMEVIEW_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub active: bool,
    pub loan_status: LoanStatus,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.homeview/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".homeview").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.homeview/config.toml`.
///
/// A missing default file yields `HomeviewConfig::default()`. A missing
/// explicit file is `ConfigError::Io`, and a malformed one is
/// `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<HomeviewConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => {
                debug!("No config file at {}, using defaults", p.display());
                return Ok(HomeviewConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(HomeviewConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<HomeviewConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &HomeviewConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &HomeviewConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Active: CLI → env → config → default
    let active = cli
        .active
        .or_else(|| env_parsed(&env, ENV_ACTIVE))
        .or(config.general.active)
        .unwrap_or(DEFAULT_ACTIVE);

    // Loan status: CLI → env → config → default
    let loan_status = cli
        .loan_status
        .or_else(|| env_parsed(&env, ENV_LOAN_STATUS))
        .or(config.general.loan_status)
        .unwrap_or_default();

    // Log level: env → config → default, then raised once per -v
    let base_level: LevelFilter = env_parsed(&env, ENV_LOG_LEVEL)
        .or_else(|| {
            config.logging.level.as_deref().and_then(|raw| match raw.parse() {
                Ok(level) => Some(level),
                Err(_) => {
                    warn!("Ignoring invalid log level in config: {raw}");
                    None
                }
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        active,
        loan_status,
        log_level: raise_level(base_level, cli.verbosity),
        log_file: config.logging.file.as_ref().map(PathBuf::from),
    }
}

/// Reads and parses an env var, warning about (and dropping) bad values.
fn env_parsed<T: std::str::FromStr>(env: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value for {key}: {raw}");
            None
        }
    }
}

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Moves `level` `steps` places toward `Trace`, saturating.
fn raise_level(level: LevelFilter, steps: u8) -> LevelFilter {
    let start = LEVELS.iter().position(|l| *l == level).unwrap_or(0);
    let idx = (start + steps as usize).min(LEVELS.len() - 1);
    LEVELS[idx]
}
