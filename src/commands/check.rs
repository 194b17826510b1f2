//! Check command implementation
//!
//! Reports keys that both manifests define with different values, grouped by
//! section. This is the manual post-merge conflict review the merge itself
//! does not perform. Advisory only: the command never modifies files and
//! exits zero whether or not collisions exist.

use console::style;
use serde_json::Value;

use crate::cli::CheckArgs;
use crate::error::{Result, file_not_found};
use crate::manifest::Manifest;
use crate::merge::section_conflicts;

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    for path in [&args.host, &args.template] {
        if !path.exists() {
            return Err(file_not_found(path));
        }
    }

    let host = Manifest::read(&args.host)?;
    let template = Manifest::read(&args.template)?;

    let conflicts = section_conflicts(&host, &template);
    if conflicts.is_empty() {
        println!("No collisions: merging would only add new keys.");
        return Ok(());
    }

    println!(
        "Collisions ({}): merging resolves these in the boilerplate's favor.",
        conflicts.len()
    );
    println!();

    let mut current_section = "";
    for conflict in &conflicts {
        if conflict.section != current_section {
            current_section = conflict.section;
            println!("  {}", style(current_section).bold().yellow());
        }
        println!(
            "    {}: {} -> {}",
            conflict.key,
            display_value(&conflict.host_value),
            display_value(&conflict.template_value)
        );
    }

    Ok(())
}

/// Render a value the way package.json shows it (strings unquoted)
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
