//! CLI interface module
//!
//! Every command loads a section file into a [`SectionEditor`] and drives it
//! the way the form would.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::Result;
use commands::{config_generate, delete_section, reorder_section, reset_section, save_section, validate_section};

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<()> {
    match cmd {
        Commands::Validate { file_path } => validate_section(config, &file_path),
        Commands::Reorder {
            file_path,
            from,
            to,
            below,
            write,
        } => reorder_section(config, &file_path, from, to, below, write),
        Commands::Save { file_path } => save_section(config, &file_path).await,
        Commands::Delete { file_path, yes } => delete_section(config, &file_path, yes).await,
        Commands::Reset { file_path, yes } => reset_section(config, &file_path, yes).await,
        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
        },
    }
}
