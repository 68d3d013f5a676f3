use crate::error::{PoetryUpError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal typed view over pyproject.toml.
///
/// Only the dependency table under `[tool.poetry.dependencies]` is exposed;
/// values are kept opaque since just the package names matter here. Absent
/// sections deserialize as empty tables.
#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: ToolSection,
}

#[derive(Debug, Default, Deserialize)]
struct ToolSection {
    #[serde(default)]
    poetry: PoetrySection,
}

#[derive(Debug, Default, Deserialize)]
struct PoetrySection {
    #[serde(default)]
    dependencies: BTreeMap<String, toml::Value>,
}

/// ManifestReader extracts the declared dependency names from a project's
/// pyproject.toml.
pub struct ManifestReader {
    project_path: PathBuf,
}

impl ManifestReader {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Returns every dependency name declared in the manifest, excluding the
    /// `python` runtime entry. Package names are not validated here; poetry
    /// rejects malformed names itself during the update.
    pub fn list_dependencies(&self) -> Result<Vec<String>> {
        let manifest_path = self.project_path.join("pyproject.toml");
        if !manifest_path.exists() {
            return Err(PoetryUpError::ManifestNotFound(self.project_path.clone()));
        }

        let content = fs::read_to_string(&manifest_path)?;
        let manifest: PyProject = toml::from_str(&content)?;

        Ok(manifest
            .tool
            .poetry
            .dependencies
            .into_keys()
            .filter(|name| name != "python")
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
[tool.poetry]
name = "demo"
version = "0.1.0"

[tool.poetry.dependencies]
python = "^3.11"
click = "^8.1.7"
loguru = "^0.7.0"
"#;

    #[test]
    fn lists_dependencies_without_the_runtime_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), MANIFEST).unwrap();

        let deps = ManifestReader::new(dir.path()).list_dependencies().unwrap();
        assert_eq!(deps, vec!["click".to_string(), "loguru".to_string()]);
    }

    #[test]
    fn table_valued_dependencies_are_listed() {
        let dir = tempdir().unwrap();
        let manifest = r#"
[tool.poetry.dependencies]
python = "^3.11"
requests = { version = "^2.32", extras = ["socks"] }
"#;
        fs::write(dir.path().join("pyproject.toml"), manifest).unwrap();

        let deps = ManifestReader::new(dir.path()).list_dependencies().unwrap();
        assert_eq!(deps, vec!["requests".to_string()]);
    }

    #[test]
    fn missing_manifest_is_reported() {
        let dir = tempdir().unwrap();
        let err = ManifestReader::new(dir.path())
            .list_dependencies()
            .unwrap_err();
        assert!(matches!(err, PoetryUpError::ManifestNotFound(_)));
    }

    #[test]
    fn malformed_manifest_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "not = [ toml").unwrap();

        let err = ManifestReader::new(dir.path())
            .list_dependencies()
            .unwrap_err();
        assert!(matches!(err, PoetryUpError::ManifestMalformed(_)));
    }

    #[test]
    fn manifest_without_poetry_section_yields_no_dependencies() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[tool.black]\nline-length = 88\n").unwrap();

        let deps = ManifestReader::new(dir.path()).list_dependencies().unwrap();
        assert!(deps.is_empty());
    }
}
