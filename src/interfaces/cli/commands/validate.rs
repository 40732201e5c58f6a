//! Validate command

use colored::Colorize;

use super::helpers::{open_editor, print_section};
use crate::config::StaticConfig;
use crate::errors::{Result, SidebarError};

pub fn validate_section(config: &StaticConfig, file_path: &str) -> Result<()> {
    let editor = open_editor(config, file_path)?;
    let ctx = editor.context();
    let section = editor
        .model()
        .ok_or_else(|| SidebarError::not_found("No section is open"))?;

    println!("{}", editor.header_text().bold());
    println!();
    print_section(section, ctx);
    println!();

    if editor.valid() {
        println!("{} Section is valid", "✓".bold().green());
        Ok(())
    } else {
        Err(SidebarError::validation(format!(
            "{} has invalid fields",
            file_path
        )))
    }
}
