//! Resolve command implementation

use colored::Colorize;
use nexus_core::ComponentLocation;

use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(path: &str, json: bool) -> Result<()> {
    let location = ComponentLocation::parse(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&location)?);
        return Ok(());
    }

    println!("{}", format_location(&location));
    Ok(())
}

/// Human-readable breakdown of a resolved location.
fn format_location(location: &ComponentLocation) -> String {
    let none = "-".dimmed().to_string();
    let directory = location
        .directory()
        .map_or_else(|| none.clone(), |d| d.cyan().to_string());
    let filename = location
        .filename()
        .map_or_else(|| none.clone(), |f| f.green().to_string());

    format!(
        "{}: {}\n{}:  {}\n{}:   {}",
        "Repository".dimmed(),
        location.repository().bold(),
        "Directory".dimmed(),
        directory,
        "Filename".dimmed(),
        filename,
    )
}
