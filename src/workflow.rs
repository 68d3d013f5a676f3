use crate::agents::{ManifestReader, PackageUpdater};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the single-package update workflow
pub fn execute_update<P: AsRef<Path>>(project_path: P, package: &str) -> Result<bool> {
    println!(
        "{}",
        format!("Updating {package} to its latest safe version...")
            .cyan()
            .bold()
    );

    let updater = PackageUpdater::new(project_path.as_ref());
    let updated = updater.update_package(package);

    if updated {
        println!(
            "\n{}",
            format!("✨ {package} updated successfully!").green().bold()
        );
    } else {
        println!("\n{}", format!("✗ {package} was not updated").red());
    }

    Ok(updated)
}

/// Execute the update workflow for every dependency in pyproject.toml
pub fn execute_update_all<P: AsRef<Path>>(project_path: P) -> Result<bool> {
    let project_path = project_path.as_ref();
    println!(
        "{}",
        "Starting safe update of all dependencies...".cyan().bold()
    );

    println!("\n{}", "1. Reading pyproject.toml...".yellow());
    let reader = ManifestReader::new(project_path);
    let packages = reader.list_dependencies()?;
    println!(
        "{}",
        format!("✓ Found {} dependencies", packages.len()).green()
    );

    println!("\n{}", "2. Updating dependencies...".yellow());
    let updater = PackageUpdater::new(project_path);
    let all_updated = updater.update_all(&packages);

    if all_updated {
        println!(
            "\n{}",
            "✨ All dependencies updated successfully!".green().bold()
        );
    } else {
        println!(
            "\n{}",
            "⚠ Some dependencies could not be updated".yellow()
        );
    }

    Ok(all_updated)
}
