//! Module generation command

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use nestgen::{
    CreateMissing, DirectoryPolicy, FileWriter, GeneratedModule, ModuleGenerator, RequireExisting,
};

use super::ConfigArgs;

static SUCCESS: Emoji<'_, '_> = Emoji("✓", "√");
static DONE: Emoji<'_, '_> = Emoji("✅", "*");

/// Write module, service and controller files for every configured module
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    config: ConfigArgs,

    /// Create missing module directories instead of failing
    #[arg(long)]
    create_dirs: bool,

    /// Render everything and list target paths without writing
    #[arg(long)]
    dry_run: bool,
}

impl GenerateCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - A descriptor has an invalid name
    /// - A module directory is missing (without `--create-dirs`)
    /// - A file cannot be written
    pub fn execute(&self) -> Result<()> {
        let config = self.config.load()?;
        let create_dirs = self.create_dirs || config.create_dirs;

        let generator =
            ModuleGenerator::new(config.modules).context("Invalid module configuration")?;

        if self.dry_run {
            return Self::dry_run(&generator, &FileWriter::new(config.root));
        }

        if create_dirs {
            Self::write_all(&generator, &FileWriter::with_policy(config.root, CreateMissing))
        } else {
            Self::write_all(&generator, &FileWriter::with_policy(config.root, RequireExisting))
        }
    }

    fn write_all<P: DirectoryPolicy>(generator: &ModuleGenerator, writer: &FileWriter<P>) -> Result<()> {
        let report = generator
            .generate(writer, |module: &GeneratedModule| {
                println!(
                    "{} Created {} module",
                    SUCCESS,
                    style(&module.names.module_name).cyan()
                );
            })
            .context("Module generation stopped")?;

        tracing::info!(
            modules = report.modules,
            files = report.files.len(),
            "generation complete"
        );

        println!(
            "\n{} {}",
            DONE,
            style("All modules generated successfully!").green().bold()
        );

        Ok(())
    }

    fn dry_run(generator: &ModuleGenerator, writer: &FileWriter) -> Result<()> {
        let modules = generator.render_all().context("Failed to render modules")?;

        for module in &modules {
            println!("{}", style(&module.names.module_name).cyan().bold());
            for file in &module.files {
                println!(
                    "  {} ({})",
                    style(writer.target(file).display()).dim(),
                    style(&file.description).dim()
                );
            }
        }

        println!(
            "\n{} modules rendered, nothing written (dry run)",
            style(modules.len()).bold()
        );

        Ok(())
    }
}
