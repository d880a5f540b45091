//! Configuration loading for docnav sites.
//!
//! Parses `docnav.toml` files with serde and provides auto-discovery of the
//! config file in parent directories.
//!
//! Loading fails closed: a configuration that parses but violates a
//! navigation invariant is refused, and every violation is reported in one
//! list. There is no built-in default site — a build without a config file
//! has nothing to render, so absence is an error.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use docnav_site::{SiteConfig, ValidationError};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration parsed but violates navigation invariants.
    #[error("Invalid site configuration:{}", format_violations(.0))]
    Invalid(Vec<ValidationError>),
}

/// One violation per line, for the `Invalid` display.
fn format_violations(errors: &[ValidationError]) -> String {
    errors.iter().fold(String::new(), |mut out, e| {
        let _ = write!(out, "\n  - {e}");
        out
    })
}

/// Load the site configuration.
///
/// If `config_path` is provided, loads from that file. Otherwise searches
/// for `docnav.toml` in the current directory and its parents.
///
/// # Errors
///
/// Returns an error if no config file is found, it cannot be read or
/// parsed, or it fails validation.
pub fn load(config_path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let path = match config_path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let start = std::env::current_dir()?;
            discover_from(&start).ok_or_else(|| ConfigError::NotFound(start.join(CONFIG_FILENAME)))?
        }
    };
    load_from_file(&path)
}

/// Search for `docnav.toml` in `start` and its parent directories.
#[must_use]
pub fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "Discovered config file");
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// configuration fails validation.
pub fn load_from_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse(&content)?;
    tracing::info!(
        path = %path.display(),
        nav_items = config.nav.len(),
        sidebars = config.sidebars.len(),
        "Site configuration loaded"
    );
    Ok(config)
}

/// Parse and validate configuration from a TOML string.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed TOML and
/// `ConfigError::Invalid` with the full violation list for a configuration
/// that breaks navigation invariants.
pub fn parse(content: &str) -> Result<SiteConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(content)?;
    let violations = config.validate();
    if violations.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Invalid(violations))
    }
}
