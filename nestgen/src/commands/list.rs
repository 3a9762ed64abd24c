//! Module listing command

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use nestgen::DerivedNames;

use super::ConfigArgs;

/// Show configured modules and their derived names
#[derive(Debug, Clone, Default, Args)]
pub struct ListCommand {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the effective configuration as a `nestgen.toml` document
    #[arg(long)]
    toml: bool,
}

impl ListCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or serialized.
    pub fn execute(&self) -> Result<()> {
        let config = self.config.load()?;

        if self.toml {
            let document =
                toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            print!("{document}");
            return Ok(());
        }

        println!(
            "{} {}",
            style("Modules under").cyan().bold(),
            style(config.root.display()).green().bold()
        );
        println!();

        for descriptor in &config.modules {
            let names = DerivedNames::from_descriptor(descriptor);
            println!(
                "  {:<20} {:<20} {:<24} {}",
                style(&names.module_name).cyan(),
                names.class_name,
                style(&names.table_plural).yellow(),
                style(format!("this.{}Service", names.property_name)).dim()
            );
        }

        println!();
        println!("{} modules", style(config.modules.len()).bold());

        Ok(())
    }
}
