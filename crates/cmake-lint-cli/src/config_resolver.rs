//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path; the value `None` disables config files)
//! 2. `cmake-lint.toml` or `.cmake-lint.toml` in the current directory
//! 3. The first existing `cmakelintrc` among the global candidates
//! 4. No config found → defaults

use anyhow::{Context, Result};
use cmake_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from a global location.
    Global(PathBuf),
    /// Disabled with `--config=None`.
    Disabled,
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Disabled | Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from a global location.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }

    /// Reads the configuration file, or an empty configuration when there is
    /// none.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            return Ok(Config::new());
        };
        if self.is_global() {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Value of `--config` that turns configuration files off.
const DISABLED: &str = "None";

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["cmake-lint.toml", ".cmake-lint.toml"];

/// Config file name within a global config directory.
const GLOBAL_CONFIG_NAME: &str = "cmakelintrc";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&str>) -> ConfigSource {
    resolve_inner(project_dir, explicit, &global_candidates())
}

/// Testable core: accepts the global candidates as a parameter to avoid env
/// var races.
fn resolve_inner(project_dir: &Path, explicit: Option<&str>, global: &[PathBuf]) -> ConfigSource {
    match explicit {
        Some(DISABLED) => return ConfigSource::Disabled,
        Some(p) => return ConfigSource::Explicit(PathBuf::from(p)),
        None => {}
    }

    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    for candidate in global {
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate.clone());
        }
    }

    ConfigSource::Default
}

/// Global config locations, most specific first.
///
/// `$CMAKE_LINT_CONFIG_DIR/cmakelintrc`, `$XDG_CONFIG_DIR/cmakelintrc`,
/// `~/.config/cmakelintrc`, `~/.cmakelintrc`.
#[must_use]
pub fn global_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    for var in ["CMAKE_LINT_CONFIG_DIR", "XDG_CONFIG_DIR"] {
        if let Ok(dir) = std::env::var(var) {
            candidates.push(PathBuf::from(dir).join(GLOBAL_CONFIG_NAME));
        }
    }
    if let Some(home) = home::home_dir() {
        candidates.push(home.join(".config").join(GLOBAL_CONFIG_NAME));
        candidates.push(home.join(format!(".{GLOBAL_CONFIG_NAME}")));
    }
    candidates
}
