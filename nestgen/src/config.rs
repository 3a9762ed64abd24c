//! Generator configuration
//!
//! Configuration is merged from several sources, lowest precedence first:
//!
//! 1. Built-in defaults (production module list, root `src`)
//! 2. A TOML file: the explicit `--config` path, or `./nestgen.toml` if present
//! 3. Environment variables with the `NESTGEN_` prefix (`NESTGEN_ROOT`,
//!    `NESTGEN_CREATE_DIRS`)
//!
//! # Example Configuration
//!
//! ```toml
//! root = "backend/src"
//! create_dirs = false
//!
//! [[modules]]
//! name = "invoices"
//! table = "invoice"
//!
//! [[modules]]
//! name = "call-reports"
//! table = "call_report"
//! ```
//!
//! A file that sets `modules` replaces the built-in list entirely.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::descriptor::{self, ModuleDescriptor};
use crate::error::{GenerateError, Result};

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "nestgen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NESTGEN_";

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding one sub-directory per module
    pub root: PathBuf,

    /// Create missing module directories instead of failing
    pub create_dirs: bool,

    /// Modules to generate, in order
    pub modules: Vec<ModuleDescriptor>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("src"),
            create_dirs: false,
            modules: descriptor::production(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, a TOML file and the environment
    ///
    /// With `path` set, that file must exist. Without it,
    /// [`DEFAULT_CONFIG_FILE`] is merged only when present.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingConfig`] for an explicit path that does
    /// not exist, or [`GenerateError::Config`] if merging or extraction fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(GenerateError::MissingConfig(path.to_path_buf()));
                }
                tracing::debug!(path = %path.display(), "loading config file");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    tracing::debug!(path = %local.display(), "loading config file");
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Self = figment.extract()?;
        tracing::debug!(
            root = %config.root.display(),
            create_dirs = config.create_dirs,
            modules = config.modules.len(),
            "configuration loaded"
        );
        Ok(config)
    }
}
