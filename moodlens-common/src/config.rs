//! Configuration loading and root folder resolution
//!
//! Root folder priority order:
//! 1. Command-line argument (applied by the binary via [`RootFolderResolver::with_cli_override`])
//! 2. `MOODLENS_ROOT_FOLDER`, then `MOODLENS_ROOT` environment variables
//! 3. `root_folder` key in the module's TOML file
//! 4. OS-dependent compiled default
//!
//! A missing or unreadable TOML file is never fatal: a warning is logged and
//! defaults apply.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Primary root folder environment variable
pub const ROOT_FOLDER_ENV: &str = "MOODLENS_ROOT_FOLDER";
/// Alternative root folder environment variable
pub const ROOT_ENV: &str = "MOODLENS_ROOT";
/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "sentiment.db";

/// Contents of `<config_dir>/moodlens/<module>.toml`
///
/// Every key is optional; absent keys fall through to [`CompiledDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    /// Listen address, e.g. "127.0.0.1:5780"
    pub bind_addr: Option<String>,
    /// `tracing` filter directive, e.g. "info" or "moodlens_web=debug"
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
    }

    /// Load the module's TOML file, falling back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Built-in defaults used when nothing else is configured
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub bind_addr: String,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            bind_addr: "127.0.0.1:5780".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/moodlens
        dirs::data_local_dir()
            .map(|d| d.join("moodlens"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/moodlens"))
    } else if cfg!(target_os = "macos") {
        // ~/Library/Application Support/moodlens
        dirs::data_dir()
            .map(|d| d.join("moodlens"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/moodlens"))
    } else if cfg!(target_os = "windows") {
        // %LOCALAPPDATA%\moodlens
        dirs::data_local_dir()
            .map(|d| d.join("moodlens"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\moodlens"))
    } else {
        PathBuf::from("./moodlens_data")
    }
}

/// Default TOML location for a module
pub fn config_file_path(module_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("moodlens").join(format!("{}.toml", module_name)))
}

/// Resolves the root folder following the module-level priority order
#[derive(Debug, Clone)]
pub struct RootFolderResolver {
    module_name: String,
    cli_override: Option<PathBuf>,
    config_file: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_override: None,
            config_file: config_file_path(module_name),
        }
    }

    /// Highest-priority value, normally from a command-line flag
    pub fn with_cli_override(mut self, root_folder: Option<PathBuf>) -> Self {
        self.cli_override = root_folder;
        self
    }

    /// Read a specific TOML file instead of the module default
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// TOML file consulted by this resolver, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Resolve the root folder; never fails
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_override {
            return path.clone();
        }

        for var in [ROOT_FOLDER_ENV, ROOT_ENV] {
            if let Ok(path) = std::env::var(var) {
                if !path.is_empty() {
                    return PathBuf::from(path);
                }
            }
        }

        let toml = TomlConfig::load_or_default(self.config_file.as_deref());
        if let Some(root_folder) = toml.root_folder {
            return root_folder;
        }

        CompiledDefaults::for_current_platform().root_folder
    }
}

/// Prepares the resolved root folder
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    /// Create the root folder (and parents) if missing; idempotent
    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}
