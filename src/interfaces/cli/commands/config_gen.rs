//! Config generate command

use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::{Result, SidebarError};

pub fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let sample = StaticConfig::generate_sample_config();

    let Some(path) = output_path else {
        print!("{}", sample);
        return Ok(());
    };

    if std::path::Path::new(&path).exists() && !force {
        return Err(SidebarError::file_operation(format!(
            "{} already exists, use --force to overwrite",
            path
        )));
    }

    std::fs::write(&path, sample)?;
    println!("{} Configuration written to {}", "✓".bold().green(), path.cyan());
    Ok(())
}
