// Dashboard domain model - the JSON tree of a dashboard definition
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const MARKDOWN_CHART_TYPE: &str = "markdown-widget";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub name: String,
    pub sections: Vec<Section>,
    pub parameter_details: BTreeMap<String, ParameterDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    pub charts: Vec<Chart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDetail {
    #[serde(default)]
    pub query_value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub chart_attributes: Option<ChartAttributes>,
    #[serde(default)]
    pub chart_settings: Option<ChartSettings>,
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAttributes {
    #[serde(default)]
    pub single_stat: Option<SingleStat>,
    #[serde(default)]
    pub dashboard_links: Option<BTreeMap<String, DashboardLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleStat {
    #[serde(default)]
    pub sparkline_display_sub_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardLink {
    pub destination: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSettings {
    #[serde(default, rename = "type")]
    pub chart_type: Option<String>,
    /// Usually a string, but dashboards in the wild also carry numbers here
    #[serde(default)]
    pub sparkline_display_font_size: Option<Value>,
    #[serde(default)]
    pub show_value_column: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub query: String,
}

impl Chart {
    pub fn chart_type(&self) -> Option<&str> {
        self.chart_settings.as_ref()?.chart_type.as_deref()
    }

    pub fn is_markdown(&self) -> bool {
        self.chart_type() == Some(MARKDOWN_CHART_TYPE)
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn sparkline_sublabel(&self) -> Option<&str> {
        self.chart_attributes
            .as_ref()?
            .single_stat
            .as_ref()?
            .sparkline_display_sub_label
            .as_deref()
    }

    pub fn dashboard_links(&self) -> impl Iterator<Item = &DashboardLink> {
        self.chart_attributes
            .as_ref()
            .and_then(|attrs| attrs.dashboard_links.as_ref())
            .into_iter()
            .flat_map(|links| links.values())
    }
}

/// A dashboard file as loaded from disk: its path, raw text and parsed tree
#[derive(Debug, Clone)]
pub struct DashboardFile {
    pub path: PathBuf,
    pub contents: String,
    pub dashboard: Dashboard,
}

impl DashboardFile {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Read-only traversal over every loaded dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardSet {
    files: Vec<DashboardFile>,
    index_path: Option<PathBuf>,
}

impl DashboardSet {
    pub fn new(files: Vec<DashboardFile>, index_path: Option<PathBuf>) -> Self {
        Self { files, index_path }
    }

    pub fn files(&self) -> &[DashboardFile] {
        &self.files
    }

    /// Index file to cross-check against; `None` in single-file mode
    pub fn index_path(&self) -> Option<&Path> {
        self.index_path.as_deref()
    }

    pub fn each_dashboard(&self) -> impl Iterator<Item = &Dashboard> {
        self.files.iter().map(|f| &f.dashboard)
    }

    /// Every chart paired with the name of the dashboard holding it
    pub fn each_chart(&self) -> impl Iterator<Item = (&Chart, &str)> {
        self.each_dashboard().flat_map(|dashboard| {
            dashboard
                .sections
                .iter()
                .flat_map(|section| &section.rows)
                .flat_map(|row| &row.charts)
                .map(move |chart| (chart, dashboard.name.as_str()))
        })
    }
}
