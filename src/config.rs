use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ProfileError, Result};

/// Settings filename, looked up in the project root.
const CONFIG_FILE: &str = "profile-api.toml";
/// Default profile document.
const DEFAULT_INPUT: &str = "profile.md";
/// Default directory for generated records.
const DEFAULT_OUTPUT_DIR: &str = "api";
/// Version tag written into every envelope.
const DEFAULT_VERSION: &str = "1.0";

/// Project-level configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory relative paths are resolved against.
    pub project_root: PathBuf,
    /// Path to the settings file.
    pub config_path: PathBuf,
    /// User settings loaded from profile-api.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from profile-api.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub build: BuildSettings,
    pub output: OutputSettings,
}

/// Where to read the document and write records.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSettings {
    /// Profile document, relative to the project root.
    pub input: String,
    /// Output directory, relative to the project root.
    pub output_dir: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
        }
    }
}

/// How records are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// "pretty" (default) or "minified".
    pub format: String,
    /// Version tag in each envelope.
    pub version: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "pretty".into(),
            version: DEFAULT_VERSION.into(),
        }
    }
}

impl Config {
    /// Create config for a given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let config_path = project_root.join(CONFIG_FILE);
        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            project_root,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ProfileError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings if the file exists and parses; otherwise `None`.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "ignoring invalid settings file");
                None
            }
        }
    }

    /// Profile document path; an explicit path wins over settings.
    #[must_use]
    pub fn input_path(&self, explicit: Option<&str>) -> PathBuf {
        self.project_root
            .join(explicit.unwrap_or(self.settings.build.input.as_str()))
    }

    /// Output directory; an explicit path wins over settings.
    #[must_use]
    pub fn output_dir(&self, explicit: Option<&str>) -> PathBuf {
        self.project_root
            .join(explicit.unwrap_or(self.settings.build.output_dir.as_str()))
    }

    #[must_use]
    pub fn pretty(&self) -> bool {
        self.settings.output.format != "minified"
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.settings.output.version
    }
}
