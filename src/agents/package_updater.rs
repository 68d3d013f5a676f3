use crate::agents::poetry_execution::{CommandRunner, PoetryCli};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;

/// PackageUpdater drives the dry-run-then-commit update workflow.
///
/// Every update is checked with `poetry add <name>@latest --dry-run` first;
/// the real update only runs when the resolver reported no conflicts. A
/// failure at any step ends the workflow for that package, with no retries.
pub struct PackageUpdater {
    runner: Arc<dyn CommandRunner>,
}

impl PackageUpdater {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self::with_runner(Arc::new(PoetryCli::new(project_path)))
    }

    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Returns true when the `poetry` binary responds to `--version`.
    fn poetry_available(&self) -> bool {
        match self.runner.run(&["poetry", "--version"]) {
            Ok(output) if output.success() => {
                log::debug!("{}", output.stdout.trim());
                true
            }
            Ok(_) => false,
            Err(e) => {
                log::debug!("poetry availability check failed: {e}");
                false
            }
        }
    }

    /// Dry-run check: would updating to the latest version resolve cleanly?
    /// Leaves the manifest and lock file untouched.
    fn check_package_update(&self, package: &str) -> bool {
        let spec = format!("{package}@latest");
        match self
            .runner
            .run(&["poetry", "add", &spec, "--dry-run", "--no-interaction"])
        {
            Ok(output) if output.success() => true,
            Ok(output) => {
                log::error!(
                    "Adding latest version of {package} would cause conflicts: {}",
                    output.stderr.trim()
                );
                false
            }
            Err(e) => {
                log::error!("Dry-run check for {package} could not be executed: {e}");
                false
            }
        }
    }

    /// Update a single package to its latest version if safe.
    pub fn update_package(&self, package: &str) -> bool {
        log::info!("Checking updates for {package}...");

        if !self.poetry_available() {
            log::error!("Poetry is not installed. Please install it first.");
            return false;
        }

        if !self.check_package_update(package) {
            log::error!("Cannot safely update {package}");
            return false;
        }

        let spec = format!("{package}@latest");
        match self.runner.run(&["poetry", "add", &spec, "--no-interaction"]) {
            Ok(output) if output.success() => {
                log::info!("Successfully updated {package} to latest version");
                true
            }
            Ok(output) => {
                log::error!("Failed to update {package}: {}", output.stderr.trim());
                false
            }
            Err(e) => {
                log::error!("Failed to update {package}: {e}");
                false
            }
        }
    }

    /// Update every package in the list sequentially, continuing past
    /// individual failures. Returns true only when every update succeeded;
    /// an empty list reports failure, not vacuous success.
    pub fn update_all(&self, packages: &[String]) -> bool {
        if packages.is_empty() {
            log::error!("No packages found to update");
            return false;
        }

        log::info!("Found {} packages to update", packages.len());

        let pb = ProgressBar::new(packages.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        let mut success = true;
        for package in packages {
            pb.set_message(format!("Updating {package}"));
            if !self.update_package(package) {
                success = false;
                log::warn!("Failed to update {package}");
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        success
    }
}
