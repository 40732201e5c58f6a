//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// sidebar-sections - custom sidebar section editor
#[derive(Parser)]
#[command(name = "sidebar-sections")]
#[command(version)]
#[command(about = "Validate, reorder and submit custom sidebar sections", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check a section file and print every field problem
    Validate {
        /// Section JSON file
        file_path: String,
    },

    /// Move a link next to another one
    ///
    /// Link numbers are the `#n` shown by `validate`.
    Reorder {
        /// Section JSON file
        file_path: String,

        /// Link being moved
        from: u64,

        /// Link it is dropped on
        to: u64,

        /// Insert below the target instead of above
        #[arg(long)]
        below: bool,

        /// Write the result back to the file
        #[arg(long)]
        write: bool,
    },

    /// Create or update the section on the server
    Save {
        /// Section JSON file
        file_path: String,
    },

    /// Delete the section on the server
    Delete {
        /// Section JSON file
        file_path: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Reset a system section to its default links
    Reset {
        /// Section JSON file
        file_path: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: stdout)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
