// Index checker - every dashboard file must be listed in the integration's index.json
use crate::application::checker::Checker;
use crate::application::reporter::Reporter;
use crate::domain::dashboard::DashboardSet;
use crate::domain::issue::Finding;
use crate::infrastructure::dashboard_repository::{load_index, DashboardIndex};
use std::collections::HashSet;
use std::path::Path;

pub struct IndexChecker;

impl IndexChecker {
    /// Basenames of dashboard files the index does not reference
    pub fn missing_entries<'a>(dashboards: &'a DashboardSet, index: &DashboardIndex) -> Vec<&'a str> {
        let listed: HashSet<&str> = index
            .dashboards
            .iter()
            .filter_map(|entry| Path::new(&entry.url).file_name())
            .filter_map(|name| name.to_str())
            .collect();

        dashboards
            .files()
            .iter()
            .filter_map(|file| file.file_name())
            .filter(|name| !listed.contains(*name))
            .collect()
    }
}

impl Checker for IndexChecker {
    fn name(&self) -> &'static str {
        "index"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        let Some(index_path) = dashboards.index_path() else {
            tracing::info!("Skipping index check, no index file applies to a single dashboard");
            return Ok(());
        };

        let Some(index) = load_index(index_path)? else {
            reporter.report(Finding::Notice(format!(
                "Index file not found: {}",
                index_path.display()
            )));
            return Ok(());
        };

        for name in Self::missing_entries(dashboards, &index) {
            reporter.report(Finding::Notice(format!(
                "Dashboard {} missing from {}",
                name,
                index_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{Dashboard, DashboardFile};
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;

    fn dashboard_file(path: PathBuf) -> DashboardFile {
        let dashboard: Dashboard =
            serde_json::from_value(json!({"name": "D", "sections": [], "parameterDetails": {}})).unwrap();
        DashboardFile {
            path,
            contents: String::new(),
            dashboard,
        }
    }

    fn run(set: &DashboardSet) -> Vec<Finding> {
        let mut reporter = Reporter::new();
        IndexChecker.run(set, &mut reporter).unwrap();
        reporter.summarize().findings
    }

    #[test]
    fn test_single_file_mode_skips_check() {
        let set = DashboardSet::new(vec![dashboard_file(PathBuf::from("router.json"))], None);
        assert!(run(&set).is_empty());
    }

    #[test]
    fn test_missing_index_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let index_path = dir.path().join("index.json");
        let set = DashboardSet::new(
            vec![dashboard_file(dir.path().join("dashboards/router.json"))],
            Some(index_path.clone()),
        );
        assert_eq!(
            run(&set),
            vec![Finding::Notice(format!("Index file not found: {}", index_path.display()))]
        );
    }

    #[test]
    fn test_unlisted_dashboard_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let index_path = dir.path().join("index.json");
        fs::write(
            &index_path,
            json!({"dashboards": [{"url": "https://example.com/integrations/tas/dashboards/router.json"}]}).to_string(),
        )
        .unwrap();

        let set = DashboardSet::new(
            vec![
                dashboard_file(dir.path().join("dashboards/router.json")),
                dashboard_file(dir.path().join("dashboards/diego.json")),
            ],
            Some(index_path.clone()),
        );
        assert_eq!(
            run(&set),
            vec![Finding::Notice(format!(
                "Dashboard diego.json missing from {}",
                index_path.display()
            ))]
        );
    }
}
