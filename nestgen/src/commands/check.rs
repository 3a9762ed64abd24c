//! Drift check for generated files
//!
//! Renders every module and compares the result with the files on disk.
//! Nothing is written.

use anyhow::{bail, Context, Result};
use clap::Args;
use console::{style, Emoji};
use nestgen::{FileStatus, FileWriter, ModuleGenerator};
use similar::{ChangeTag, TextDiff};

use super::ConfigArgs;

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "");
static MISSING: Emoji<'_, '_> = Emoji("? ", "");

/// Report generated files that are missing or out of date
#[derive(Debug, Clone, Default, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print a line diff for every stale file
    #[arg(long)]
    diff: bool,
}

impl CheckCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or rendering fails, or if any file is
    /// stale or missing.
    pub fn execute(&self) -> Result<()> {
        let config = self.config.load()?;
        let generator =
            ModuleGenerator::new(config.modules).context("Invalid module configuration")?;
        let writer = FileWriter::new(config.root);

        let entries = generator.check(&writer).context("Failed to compare generated files")?;

        let mut drifted = 0;
        for entry in &entries {
            let target = writer.target(&entry.file);
            match &entry.status {
                FileStatus::UpToDate => {
                    println!("{}{}", CHECK, style(target.display()).dim());
                }
                FileStatus::Missing => {
                    drifted += 1;
                    println!(
                        "{}{} {}",
                        MISSING,
                        target.display(),
                        style("(missing)").yellow()
                    );
                }
                FileStatus::Stale { on_disk } => {
                    drifted += 1;
                    println!(
                        "{}{} {}",
                        CROSS,
                        target.display(),
                        style("(out of date)").red()
                    );
                    if self.diff {
                        print_diff(on_disk, &entry.file.content);
                    }
                }
            }
        }

        println!();
        if drifted > 0 {
            bail!(
                "{drifted} of {} generated files are missing or out of date",
                entries.len()
            );
        }

        println!(
            "{}",
            style(format!("All {} generated files are up to date", entries.len()))
                .green()
                .bold()
        );
        Ok(())
    }
}

/// Print a line diff from the on-disk content to the rendered content
fn print_diff(on_disk: &str, rendered: &str) {
    let diff = TextDiff::from_lines(on_disk, rendered);

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                print!("{}", style(format!("-{change}")).red());
            }
            ChangeTag::Insert => {
                print!("{}", style(format!("+{change}")).green());
            }
            ChangeTag::Equal => {}
        }
    }
    println!();
}
