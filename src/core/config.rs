//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.todo-tui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The config file only holds settings; items are never written to disk.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use simplelog::LevelFilter;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub reject_blank_titles: Option<bool>,
    pub seed_demo_items: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "todo-tui.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub reject_blank_titles: bool,
    pub seed_demo_items: bool,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&TodoConfig::default(), &CliOverrides::default())
    }
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub empty: bool,
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

/// Returns the path to `~/.todo-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".todo-tui").join("config.toml"))
}

/// Load config from `path`, or from `~/.todo-tui/config.toml` when `path` is None.
///
/// If the default file doesn't exist, generates a commented-out template and
/// returns `TodoConfig::default()`. An explicit path that doesn't exist is an error.
pub fn load_config(path: Option<&Path>) -> Result<TodoConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(TodoConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(TodoConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TodoConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# todo-tui Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# reject_blank_titles = true    # Ignore Enter on an empty or whitespace-only input
# seed_demo_items = true        # Start with "Item 1", "Item 2", "Item 3"

# [logging]
# level = "debug"               # "off", "error", "warn", "info", "debug", "trace"
# file = "todo-tui.log"         # Or set TODO_TUI_LOG_FILE env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TodoConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("TODO_TUI_LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone())
        .and_then(|raw| parse_level(&raw))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = std::env::var("TODO_TUI_LOG_FILE")
        .ok()
        .or_else(|| config.logging.file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        reject_blank_titles: config.general.reject_blank_titles.unwrap_or(true),
        seed_demo_items: !cli.empty && config.general.seed_demo_items.unwrap_or(true),
        log_level,
        log_file: PathBuf::from(log_file),
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(raw.trim()) {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', falling back to default", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TodoConfig::default();
        assert!(config.general.reject_blank_titles.is_none());
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&TodoConfig::default(), &CliOverrides::default());
        assert!(resolved.reject_blank_titles);
        assert!(resolved.seed_demo_items);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = TodoConfig {
            general: GeneralConfig {
                reject_blank_titles: Some(false),
                seed_demo_items: Some(false),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(!resolved.reject_blank_titles);
        assert!(!resolved.seed_demo_items);
    }

    #[test]
    fn test_cli_empty_wins_over_config() {
        let config = TodoConfig {
            general: GeneralConfig {
                seed_demo_items: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            empty: true,
            ..Default::default()
        };
        assert!(!resolve(&config, &cli).seed_demo_items);
    }

    #[test]
    fn test_cli_log_level_wins() {
        let config = TodoConfig {
            logging: LoggingConfig {
                level: Some("warn".to_string()),
                file: None,
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            log_level: Some("trace".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&config, &cli).log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let cli = CliOverrides {
            log_level: Some("chatty".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&TodoConfig::default(), &cli).log_level,
            DEFAULT_LOG_LEVEL
        );
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
reject_blank_titles = false
seed_demo_items = false

[logging]
level = "info"
file = "/tmp/todo.log"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.reject_blank_titles, Some(false));
        assert_eq!(config.general.seed_demo_items, Some(false));
        assert_eq!(config.logging.level.as_deref(), Some("info"));
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/todo.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[logging]
level = "error"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.logging.level.as_deref(), Some("error"));
        assert!(config.general.reject_blank_titles.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nreject_blank_titles = yes").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_explicit_missing_path_is_io_error() {
        let path = Path::new("/definitely/not/here/todo-tui.toml");
        let err = load_config(Some(path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
