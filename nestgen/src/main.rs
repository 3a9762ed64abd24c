//! nestgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{CheckCommand, GenerateCommand, ListCommand};

#[derive(Parser)]
#[command(name = "nestgen")]
#[command(version)]
#[command(about = "Generate NestJS CRUD modules backed by Supabase tables", long_about = None)]
struct Cli {
    /// Show debug logging (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write module, service and controller files for every module (default)
    Generate(GenerateCommand),
    /// Show configured modules and their derived names
    List(ListCommand),
    /// Report generated files that are missing or out of date
    Check(CheckCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "nestgen=debug" } else { "warn" };
    nestgen::observability::init(directive)?;

    match cli.command {
        Some(Commands::Generate(cmd)) => cmd.execute()?,
        Some(Commands::List(cmd)) => cmd.execute()?,
        Some(Commands::Check(cmd)) => cmd.execute()?,
        None => GenerateCommand::default().execute()?,
    }

    Ok(())
}
