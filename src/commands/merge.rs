//! Merge command implementation
//!
//! Backs up the host manifest, merges the boilerplate sections into it and
//! overwrites it in place. The pipeline is strictly linear: verify paths,
//! read both manifests, back up, merge, write. The first failure aborts the
//! invocation; after a successful backup there is no rollback, the backup
//! itself is the recovery mechanism.

use console::style;

use crate::backup::{backup, default_backup_dir};
use crate::cli::MergeArgs;
use crate::error::{Result, file_not_found};
use crate::manifest::{DESIGNATED_SECTIONS, Manifest};
use crate::merge::merge_manifests;

/// Run merge command
pub fn run(args: MergeArgs, verbose: bool) -> Result<()> {
    // Fail fast before any filesystem mutation
    for path in [&args.host, &args.template] {
        if !path.exists() {
            return Err(file_not_found(path));
        }
    }

    let host = Manifest::read(&args.host)?;
    let template = Manifest::read(&args.template)?;

    if args.dry_run {
        let merged = merge_manifests(&host, &template);
        print!("{}", merged.to_pretty_string()?);
        return Ok(());
    }

    println!(
        "Starting {} merge...",
        style(args.host.display()).bold()
    );

    let backup_dir = args.backup_dir.unwrap_or_else(default_backup_dir);
    let outcome = backup(&args.host, &backup_dir)?;
    if outcome.created_dir {
        println!("Created backup directory: {}", backup_dir.display());
    }
    println!(
        "Backed up existing {} to {}",
        args.host.display(),
        outcome.path.display()
    );

    let merged = merge_manifests(&host, &template);

    if verbose {
        print_section_summary(&host, &template);
    }

    merged.write(&args.host)?;

    println!(
        "{} Merge completed! {} has been merged with the boilerplate.",
        style("✓").green().bold(),
        args.host.display()
    );
    println!("Check for dependency conflicts/duplicates after merging (see 'pkgmerge check').");

    Ok(())
}

/// Per-section counts of keys the template adds and overrides
fn print_section_summary(host: &Manifest, template: &Manifest) {
    for section in DESIGNATED_SECTIONS {
        let host_section = host.section(section);
        let template_section = template.section(section);
        let added = template_section
            .keys()
            .filter(|k| !host_section.contains_key(*k))
            .count();
        let overridden = template_section.len() - added;
        println!(
            "  {}: {} added, {} overridden, {} kept",
            style(section).bold(),
            added,
            overridden,
            host_section.len() - overridden
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn merge_args(temp: &TempDir) -> MergeArgs {
        MergeArgs {
            host: temp.path().join("package.json"),
            template: temp.path().join("boilerplate/package.json"),
            backup_dir: Some(temp.path().join("backup")),
            dry_run: false,
        }
    }

    #[test]
    fn test_run_merges_and_backs_up() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name":"x","dependencies":{"a":"1.0.0"}}"#,
        )
        .unwrap();
        fs::create_dir_all(temp.path().join("boilerplate")).unwrap();
        fs::write(
            temp.path().join("boilerplate/package.json"),
            r#"{"dependencies":{"a":"2.0.0","b":"1.0.0"}}"#,
        )
        .unwrap();

        run(merge_args(&temp), false).unwrap();

        let backup_content =
            fs::read_to_string(temp.path().join("backup/package.json")).unwrap();
        assert_eq!(
            backup_content,
            r#"{"name":"x","dependencies":{"a":"1.0.0"}}"#
        );

        let merged = Manifest::read(&temp.path().join("package.json")).unwrap();
        assert_eq!(
            merged.section("dependencies").get("a"),
            Some(&serde_json::Value::from("2.0.0"))
        );
    }

    #[test]
    fn test_run_fails_fast_on_missing_template() {
        let temp = TempDir::new().unwrap();
        let original = r#"{"name":"x"}"#;
        fs::write(temp.path().join("package.json"), original).unwrap();

        let result = run(merge_args(&temp), false);
        assert!(result.is_err());

        // No side effects at all
        assert!(!temp.path().join("backup").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            original
        );
    }

    #[test]
    fn test_run_fails_before_backup_on_malformed_host() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{broken").unwrap();
        fs::create_dir_all(temp.path().join("boilerplate")).unwrap();
        fs::write(temp.path().join("boilerplate/package.json"), "{}").unwrap();

        let result = run(merge_args(&temp), false);
        assert!(result.is_err());
        assert!(!temp.path().join("backup").exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let original = r#"{"name":"x"}"#;
        fs::write(temp.path().join("package.json"), original).unwrap();
        fs::create_dir_all(temp.path().join("boilerplate")).unwrap();
        fs::write(
            temp.path().join("boilerplate/package.json"),
            r#"{"dependencies":{"b":"1.0.0"}}"#,
        )
        .unwrap();

        let args = MergeArgs {
            dry_run: true,
            backup_dir: Some(PathBuf::from("should-not-exist")),
            ..merge_args(&temp)
        };
        run(args, false).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("package.json")).unwrap(),
            original
        );
        assert!(!temp.path().join("backup").exists());
        assert!(!PathBuf::from("should-not-exist").exists());
    }
}
