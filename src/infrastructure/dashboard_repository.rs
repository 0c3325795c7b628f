// Dashboard repository - locating, loading and writing dashboard files
use crate::domain::dashboard::{Dashboard, DashboardFile, DashboardSet};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_FILE: &str = "index.json";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("No dashboard files found matching {pattern}")]
    NoDashboards { pattern: String },
    #[error("Invalid dashboard glob {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Where dashboards come from: one file, or an integration directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardTarget {
    File(PathBuf),
    Integration(PathBuf),
}

impl DashboardTarget {
    /// Paths ending in `.json` are single dashboards, anything else an integration directory
    pub fn resolve(path: &Path) -> Self {
        if path.to_string_lossy().ends_with(".json") {
            Self::File(path.to_path_buf())
        } else {
            Self::Integration(path.to_path_buf())
        }
    }

    pub fn glob_pattern(&self) -> String {
        match self {
            Self::File(path) => glob::Pattern::escape(&path.to_string_lossy()),
            Self::Integration(dir) => format!(
                "{}/dashboards/*.json",
                glob::Pattern::escape(&dir.to_string_lossy())
            ),
        }
    }

    pub fn index_path(&self) -> Option<PathBuf> {
        match self {
            Self::File(_) => None,
            Self::Integration(dir) => Some(dir.join(INDEX_FILE)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardIndex {
    #[serde(default)]
    pub dashboards: Vec<IndexEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexEntry {
    pub url: String,
}

/// Dashboard files matching the target, in sorted order
pub fn discover_dashboard_files(target: &DashboardTarget) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = target.glob_pattern();
    let paths: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|source| DiscoveryError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();

    tracing::debug!("Found {} dashboard files matching {}", paths.len(), pattern);

    if paths.is_empty() {
        return Err(DiscoveryError::NoDashboards { pattern });
    }
    Ok(paths)
}

pub fn load_dashboard(path: &Path) -> Result<DashboardFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dashboard {}", path.display()))?;
    let dashboard: Dashboard = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse dashboard {}", path.display()))?;

    Ok(DashboardFile {
        path: path.to_path_buf(),
        contents,
        dashboard,
    })
}

/// Discover and parse every dashboard for the target
pub fn load_dashboards(target: &DashboardTarget) -> Result<DashboardSet> {
    let files = discover_dashboard_files(target)?
        .iter()
        .map(|path| load_dashboard(path))
        .collect::<Result<Vec<_>>>()?;

    Ok(DashboardSet::new(files, target.index_path()))
}

/// Replace a dashboard file's contents in a single write
pub fn write_dashboard(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write dashboard {}", path.display()))
}

/// Read the index file; `Ok(None)` when it does not exist
pub fn load_index(path: &Path) -> Result<Option<DashboardIndex>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Failed to read index {}", path.display())),
    };

    let index = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse index {}", path.display()))?;
    Ok(Some(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{"name": "TAS: Router", "sections": [], "parameterDetails": {}}"#;

    fn integration_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("dashboards")).unwrap();
        fs::write(dir.path().join("dashboards/router.json"), MINIMAL).unwrap();
        fs::write(dir.path().join("dashboards/diego.json"), MINIMAL).unwrap();
        fs::write(dir.path().join("dashboards/README.md"), "not a dashboard").unwrap();
        dir
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            DashboardTarget::resolve(Path::new("tas/dashboards/router.json")),
            DashboardTarget::File(PathBuf::from("tas/dashboards/router.json"))
        );
        let integration = DashboardTarget::resolve(Path::new("tas"));
        assert_eq!(integration, DashboardTarget::Integration(PathBuf::from("tas")));
        assert_eq!(integration.glob_pattern(), "tas/dashboards/*.json");
        assert_eq!(integration.index_path(), Some(PathBuf::from("tas/index.json")));
        assert_eq!(DashboardTarget::resolve(Path::new("a.json")).index_path(), None);
    }

    #[test]
    fn test_discover_sorted_json_files() {
        let dir = integration_dir();
        let target = DashboardTarget::Integration(dir.path().to_path_buf());
        let names: Vec<String> = discover_dashboard_files(&target)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["diego.json", "router.json"]);
    }

    #[test]
    fn test_no_dashboards_is_an_error() {
        let dir = TempDir::new().unwrap();
        let target = DashboardTarget::Integration(dir.path().to_path_buf());
        assert!(matches!(
            discover_dashboard_files(&target),
            Err(DiscoveryError::NoDashboards { .. })
        ));
    }

    #[test]
    fn test_load_dashboards_keeps_raw_contents() {
        let dir = integration_dir();
        let target = DashboardTarget::Integration(dir.path().to_path_buf());
        let set = load_dashboards(&target).unwrap();

        assert_eq!(set.files().len(), 2);
        assert_eq!(set.files()[0].contents, MINIMAL);
        assert_eq!(set.files()[0].dashboard.name, "TAS: Router");
        assert_eq!(set.index_path(), Some(dir.path().join("index.json").as_path()));
    }

    #[test]
    fn test_load_dashboard_rejects_missing_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, r#"{"name": "Broken", "parameterDetails": {}}"#).unwrap();
        let err = load_dashboard(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse dashboard"));
    }

    #[test]
    fn test_load_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.json");
        assert!(load_index(&path).unwrap().is_none());

        fs::write(&path, r#"{"dashboards": [{"url": "dashboards/router.json"}]}"#).unwrap();
        let index = load_index(&path).unwrap().unwrap();
        assert_eq!(index.dashboards[0].url, "dashboards/router.json");
    }

    #[test]
    fn test_write_dashboard_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("router.json");
        fs::write(&path, "old").unwrap();
        write_dashboard(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
