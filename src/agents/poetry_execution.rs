use crate::error::{PoetryUpError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured output of a finished external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs an external command to completion and captures its output.
///
/// A nonzero exit code is a normal outcome reported through `CommandOutput`;
/// only failing to start the process at all surfaces as an error.
pub trait CommandRunner {
    fn run(&self, argv: &[&str]) -> Result<CommandOutput>;
}

/// PoetryCli spawns real processes inside the project directory.
pub struct PoetryCli {
    project_path: PathBuf,
}

impl PoetryCli {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }
}

impl CommandRunner for PoetryCli {
    fn run(&self, argv: &[&str]) -> Result<CommandOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| PoetryUpError::CommandSpawn {
            command: String::new(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        })?;

        log::debug!("Executing: {}", argv.join(" "));

        let output = Command::new(program)
            .current_dir(&self.project_path)
            .args(args)
            .output()
            .map_err(|e| PoetryUpError::CommandSpawn {
                command: (*program).to_string(),
                source: e,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code().unwrap_or(-1),
        })
    }
}
