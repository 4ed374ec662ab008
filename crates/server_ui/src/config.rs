//! Baseline page asset configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Stylesheets and scripts every [`crate::Page`] includes before caller resources.
///
/// Missing keys fall back to the pinned CDN defaults, so a config file only lists what it
/// overrides:
///
/// ```toml
/// bootstrap_css = "/static/bootstrap.min.css"
/// lang = "de"
/// ```
pub struct AssetConfig {
    /// Bootstrap stylesheet URL.
    pub bootstrap_css: String,
    /// Bootstrap JS bundle URL (includes Popper).
    pub bootstrap_js: String,
    /// Bootstrap Icons stylesheet URL.
    pub icons_css: String,
    /// Document language emitted on `<html lang>`.
    pub lang: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            bootstrap_css: BOOTSTRAP_CSS.to_string(),
            bootstrap_js: BOOTSTRAP_JS.to_string(),
            icons_css: ICONS_CSS.to_string(),
            lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Error)]
/// Failures while loading an [`AssetConfig`] file.
pub enum AssetConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse {}: {message}", path.display())]
    Parse {
        /// File that failed (`<inline>` for string input).
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl AssetConfig {
    /// Parses TOML text.
    pub fn from_toml_str(body: &str) -> Result<Self, AssetConfigError> {
        toml::from_str(body).map_err(|err| AssetConfigError::Parse {
            path: PathBuf::from("<inline>"),
            message: err.to_string(),
        })
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Self, AssetConfigError> {
        let body = fs::read_to_string(path).map_err(|source| AssetConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&body).map_err(|err| AssetConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}
