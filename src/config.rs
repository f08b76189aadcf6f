//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for a lit.toml in the working directory and load settings from there if present.
//! It chooses the comment marker and which rendering hooks are used. Command line flags
//! override whatever the file says.

use crate::hooks::highlight::DEFAULT_THEME;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "lit.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from lit.toml or falling back to defaults.
pub struct Config {
    #[facet(default)]
    /// Line-comment marker; when unset it is picked from each file's extension.
    pub comment_marker: Option<String>,
    #[facet(default = true)]
    /// Render comment prose as Markdown.
    pub markdown: bool,
    #[facet(default = true)]
    /// Syntax-highlight code regions.
    pub highlight: bool,
    #[facet(default = DEFAULT_THEME.to_string())]
    /// Highlighting theme whose stylesheet goes into standalone pages.
    pub theme: String,
    #[facet(default = false)]
    /// Emit a complete HTML page instead of a fragment.
    pub standalone: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            comment_marker: None,
            markdown: true,
            highlight: true,
            theme: DEFAULT_THEME.to_string(),
            standalone: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from lit.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not parse config, using defaults"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
