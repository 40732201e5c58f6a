//! Reorder command

use colored::Colorize;

use super::helpers::{open_editor, print_section, write_section};
use crate::config::StaticConfig;
use crate::errors::{Result, SidebarError};

pub fn reorder_section(
    config: &StaticConfig,
    file_path: &str,
    from: u64,
    to: u64,
    below: bool,
    write: bool,
) -> Result<()> {
    let mut editor = open_editor(config, file_path)?;
    editor.reorder(from, to, !below)?;

    if let Some(section) = editor.model() {
        print_section(section, editor.context());
    }

    if write {
        let data = editor
            .snapshot()
            .ok_or_else(|| SidebarError::not_found("No section is open"))?;
        write_section(file_path, &data)?;
        println!("{} Saved to {}", "✓".bold().green(), file_path.cyan());
    }
    Ok(())
}
