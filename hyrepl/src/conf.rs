use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ReplError, ReplResult},
    magic::{DEFAULT_INDENT_WIDTH, DEFAULT_MAX_DEPTH, ENV_FORMAT_CONFIG_PATH},
};

/// Layout options of the value formatter.
///
/// Missing keys fall back to their defaults when loaded from TOML, unknown keys are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Columns added per nesting level.
    pub indent_width: usize,

    /// Maximum number of collections open at once. Aggregates nested deeper render as
    /// `(truncated)`.
    pub max_depth: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FormatOptions {
    /// Get the default path to the format configuration file.
    pub fn default_path() -> PathBuf {
        // Check if the environment variable is set
        if let Ok(config_path) = std::env::var(ENV_FORMAT_CONFIG_PATH) {
            return config_path.into();
        }

        let mut path = PathBuf::new();

        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                path.push(appdata);
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
                path.push(xdg_config_home);
            } else if let Ok(home) = std::env::var("HOME") {
                path.push(home);
                path.push(".config");
            }
        }

        path.push("hyrepl");
        path.push("format.toml");
        path
    }

    /// Parse options from TOML text. `origin` only names the source in errors.
    pub fn from_toml_str(toml_str: &str, origin: &str) -> ReplResult<Self> {
        toml::from_str(toml_str).map_err(|e| ReplError::ConfigParseError {
            source: e,
            file: origin.to_string(),
        })
    }

    /// Load options from a TOML file.
    pub fn load_from_toml(path: &Path) -> ReplResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;
        let options = Self::from_toml_str(&toml_str, &path.display().to_string())?;
        debug!("Loaded format options from `{}`: {:?}", path.display(), options);
        Ok(options)
    }

    /// Save options to a TOML file, creating parent directories as needed.
    pub fn save_to_toml(&self, path: &Path) -> ReplResult<()> {
        let toml_str = toml::to_string(self).map_err(|e| ReplError::ConfigSerializeError {
            source: e,
            file: path.display().to_string(),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Load options from [`Self::default_path`] if the file exists, defaults otherwise.
    ///
    /// A file that exists but cannot be read or parsed is reported with `warn!` and
    /// replaced by the defaults: formatting diagnostics must not fail on configuration.
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.is_file() {
            debug!("No format configuration at `{}`, using defaults.", path.display());
            return Self::default();
        }

        match Self::load_from_toml(&path) {
            Ok(options) => options,
            Err(e) => {
                warn!("Ignoring format configuration `{}`: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let options = FormatOptions::from_toml_str("max_depth = 3", "inline").unwrap();
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.indent_width, DEFAULT_INDENT_WIDTH);
        assert_eq!(
            FormatOptions::from_toml_str("", "inline").unwrap(),
            FormatOptions::default()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FormatOptions::from_toml_str("indent = 4", "inline").unwrap_err();
        assert!(matches!(err, ReplError::ConfigParseError { ref file, .. } if file == "inline"));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("format.toml");
        let options = FormatOptions {
            indent_width: 4,
            max_depth: 8,
        };
        options.save_to_toml(&path).unwrap();
        assert_eq!(FormatOptions::load_from_toml(&path).unwrap(), options);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FormatOptions::load_from_toml(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ReplError::IoError(_)));
    }
}
