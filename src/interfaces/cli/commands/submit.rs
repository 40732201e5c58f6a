//! Save / delete / reset commands (talk to the server)

use colored::Colorize;

use super::helpers::open_editor;
use crate::client::{AutoConfirm, ConfirmDialog, HttpTransport, TerminalConfirm};
use crate::config::StaticConfig;
use crate::editor::{SubmitOutcome, UserSections};
use crate::errors::Result;

fn dialog(yes: bool) -> Box<dyn ConfirmDialog> {
    if yes {
        Box::new(AutoConfirm(true))
    } else {
        Box::new(TerminalConfirm)
    }
}

fn report(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Saved(section) => println!(
            "{} Saved section {} ({})",
            "✓".bold().green(),
            section.title.as_deref().unwrap_or("").cyan(),
            section.id.map_or_else(|| "-".to_string(), |id| id.to_string())
        ),
        SubmitOutcome::Deleted => println!("{} Section deleted", "✓".bold().green()),
        SubmitOutcome::Cancelled => println!("{} Cancelled", "ℹ".bold().blue()),
    }
}

pub async fn save_section(config: &StaticConfig, file_path: &str) -> Result<()> {
    let mut editor = open_editor(config, file_path)?;
    let transport = HttpTransport::from_config(&config.site, &config.http);
    let mut sections = UserSections::default();

    let outcome = editor.save(&transport, &mut sections).await?;
    report(&outcome);
    Ok(())
}

pub async fn delete_section(config: &StaticConfig, file_path: &str, yes: bool) -> Result<()> {
    let mut editor = open_editor(config, file_path)?;
    let transport = HttpTransport::from_config(&config.site, &config.http);
    let mut sections = UserSections::default();

    if !editor.can_delete() {
        println!(
            "{} This section cannot be deleted",
            "⚠".bold().yellow()
        );
        return Ok(());
    }

    let outcome = editor
        .delete(dialog(yes).as_ref(), &transport, &mut sections)
        .await?;
    report(&outcome);
    Ok(())
}

pub async fn reset_section(config: &StaticConfig, file_path: &str, yes: bool) -> Result<()> {
    let mut editor = open_editor(config, file_path)?;
    let transport = HttpTransport::from_config(&config.site, &config.http);
    let mut sections = UserSections::default();

    let outcome = editor
        .reset_to_default(dialog(yes).as_ref(), &transport, &mut sections)
        .await?;
    report(&outcome);
    Ok(())
}
