//! CLI command implementations

pub mod check;
pub mod generate;
pub mod list;

pub use check::CheckCommand;
pub use generate::GenerateCommand;
pub use list::ListCommand;

use anyhow::{Context, Result};
use clap::Args;
use nestgen::GeneratorConfig;
use std::path::PathBuf;

/// Options shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigArgs {
    /// Configuration file (default: ./nestgen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding one sub-directory per module (default: src)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load configuration and apply command-line overrides
    pub fn load(&self) -> Result<GeneratorConfig> {
        let mut config = GeneratorConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;

        if let Some(root) = &self.root {
            config.root.clone_from(root);
        }

        Ok(config)
    }
}
