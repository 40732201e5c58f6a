//! Section file loading and printing shared by the commands

use colored::Colorize;

use crate::config::StaticConfig;
use crate::editor::SectionEditor;
use crate::errors::{Result, SidebarError};
use crate::models::SidebarSectionData;
use crate::section::{Section, SectionLink, ValidationContext};

pub fn load_section(file_path: &str) -> Result<SidebarSectionData> {
    let content = std::fs::read_to_string(file_path).map_err(|e| {
        SidebarError::file_operation(format!("Failed to read {}: {}", file_path, e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SidebarError::serialization(format!("Invalid section file {}: {}", file_path, e))
    })
}

pub fn write_section(file_path: &str, data: &SidebarSectionData) -> Result<()> {
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(file_path, content).map_err(|e| {
        SidebarError::file_operation(format!("Failed to write {}: {}", file_path, e))
    })
}

/// Editor opened on the section stored in `file_path`.
pub fn open_editor(config: &StaticConfig, file_path: &str) -> Result<SectionEditor> {
    let data = load_section(file_path)?;
    let mut editor = SectionEditor::new(ValidationContext::from_config(config)?);
    editor.open(Some(&data));
    Ok(editor)
}

fn print_link(link: &SectionLink, ctx: &ValidationContext) {
    let marker = if link.marked_for_deletion {
        "✗".red().to_string()
    } else if link.valid(ctx) {
        "✓".green().to_string()
    } else {
        "!".yellow().bold().to_string()
    };
    let kind = if link.external(ctx) { "external" } else { "internal" };
    println!(
        "  {} {} [{}] {} -> {} {}",
        marker,
        format!("#{}", link.object_id).cyan(),
        link.icon.as_deref().unwrap_or(""),
        link.name.as_deref().unwrap_or("").bold(),
        link.value.as_deref().unwrap_or("").blue().underline(),
        format!("({})", kind).dimmed()
    );

    let messages = [
        link.invalid_icon_message(ctx),
        link.invalid_name_message(ctx),
        link.invalid_value_message(ctx),
    ];
    for message in messages.into_iter().flatten() {
        println!("      {}", message.yellow());
    }
}

pub fn print_section(section: &Section, ctx: &ValidationContext) {
    println!(
        "{} {}",
        "Title:".bold(),
        section.title.as_deref().unwrap_or("(none)")
    );
    if let Some(message) = section.invalid_title_message(ctx) {
        println!("      {}", message.yellow());
    }

    println!("{}", "Primary links:".bold().green());
    for link in &section.primary_links {
        print_link(link, ctx);
    }
    println!("{}", "Secondary links:".bold().green());
    for link in &section.secondary_links {
        print_link(link, ctx);
    }
}
