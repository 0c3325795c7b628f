// Chart rule checkers - titles, sparkline settings, descriptions, links and units
use crate::application::checker::Checker;
use crate::application::prose::{ends_with_period, has_multiple_clauses, is_capitalized, is_title_case};
use crate::application::reporter::Reporter;
use crate::domain::dashboard::{Chart, DashboardSet};
use crate::domain::issue::Issue;
use serde_json::Value;

pub const CANONICAL_LINK_PREFIX: &str = "/dashboards/integration-tas-v4";

pub const SPARKLINE_FONT_SIZE: &str = "150";

pub const VALID_UNITS: [&str; 37] = [
    "Messages",
    "%",
    "#",
    "Markdown",
    "1 = Enabled, 0 = Disabled",
    "1 = Healthy, 0 = Unhealthy",
    "1 = Success, 0 = Failure",
    "Chunks",
    "Crashes",
    "Bytes",
    "Hits",
    "Misses",
    "ms",
    "Errors",
    "Metrics",
    "Requests",
    "Clients",
    "Queries per Second",
    "Cache Hits",
    "Threads",
    "Tables",
    "Envelopes",
    "Connections per Second",
    "Connections",
    "Commands per Second",
    "Queries",
    "GiB",
    "MiB",
    "ns",
    "B",
    "s",
    "Seconds",
    "Failures per Second",
    "millicores",
    "bps",
    "pps",
    "items",
];

/// Sparkline and gauge charts only have room for short units
pub const VALID_SPARKLINE_UNITS: [&str; 5] = ["%", "", "B", "ms", "bps"];

const TITLE_EXCEPTIONS: [&str; 1] = ["Make your own version..."];

const SUBLABEL_EXCEPTIONS: [&str; 1] = ["of Router Jobs Running"];

const DESCRIPTION_EXCEPTIONS: [&str; 2] = [
    "Number of Deployments in the processing state of type update or delete deployment.",
    "Number of deployments in the queued state of type update or delete deployment.",
];

pub struct ChartTitleChecker;

impl Checker for ChartTitleChecker {
    fn name(&self) -> &'static str {
        "chart-title"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            let title = chart.name.as_deref();
            if is_title_case(title) || title.is_some_and(|t| TITLE_EXCEPTIONS.contains(&t)) {
                continue;
            }
            reporter.report(Issue::new(
                "Chart Title not in Title Case",
                chart.name_or_empty(),
                dashboard_name,
            ));
        }
        Ok(())
    }
}

pub struct SparklineSublabelChecker;

impl Checker for SparklineSublabelChecker {
    fn name(&self) -> &'static str {
        "sparkline-sublabel"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            let Some(label) = chart.sparkline_sublabel() else {
                continue;
            };
            if is_title_case(Some(label)) || SUBLABEL_EXCEPTIONS.contains(&label) {
                continue;
            }
            reporter.report(Issue::new(
                "sparklineDisplaySubLabel not in Title Case",
                label,
                dashboard_name,
            ));
        }
        Ok(())
    }
}

pub struct SparklineFontSizeChecker;

impl Checker for SparklineFontSizeChecker {
    fn name(&self) -> &'static str {
        "sparkline-font-size"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            let font_size = chart
                .chart_settings
                .as_ref()
                .and_then(|settings| settings.sparkline_display_font_size.as_ref());

            match font_size {
                None | Some(Value::Bool(false)) => {}
                Some(Value::String(size)) if size == SPARKLINE_FONT_SIZE => {}
                Some(Value::String(size)) => {
                    reporter.report(Issue::new("sparklineDisplayFontSize not 150", size.as_str(), dashboard_name));
                }
                Some(other) => {
                    reporter.report(Issue::new(
                        "sparklineDisplayFontSize not 150",
                        other.to_string(),
                        dashboard_name,
                    ));
                }
            }
        }
        Ok(())
    }
}

pub struct ChartDescriptionChecker;

impl ChartDescriptionChecker {
    fn is_sentence_form(description: &str) -> bool {
        is_capitalized(description)
            && (ends_with_period(description) || has_multiple_clauses(description))
    }
}

impl Checker for ChartDescriptionChecker {
    fn name(&self) -> &'static str {
        "chart-description"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            if chart.is_markdown() {
                continue;
            }

            let description = chart.description.as_deref().unwrap_or_default();
            if description.is_empty() {
                reporter.report(Issue::new(
                    "Description should not be empty",
                    chart.name_or_empty(),
                    dashboard_name,
                ));
                continue;
            }

            if Self::is_sentence_form(description) || DESCRIPTION_EXCEPTIONS.contains(&description) {
                continue;
            }
            reporter.report(Issue::new(
                "Description not in sentence form",
                description,
                dashboard_name,
            ));
        }
        Ok(())
    }
}

pub struct DashboardLinkChecker;

impl Checker for DashboardLinkChecker {
    fn name(&self) -> &'static str {
        "dashboard-link"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            for link in chart.dashboard_links() {
                if !link.destination.starts_with(CANONICAL_LINK_PREFIX) {
                    reporter.report(Issue::new(
                        "dashboard link destination not canonical url",
                        link.destination.as_str(),
                        dashboard_name,
                    ));
                }
            }
        }
        Ok(())
    }
}

pub struct ChartUnitChecker;

impl ChartUnitChecker {
    /// Summary of the rule the chart's unit breaks, if any
    pub fn violation(chart: &Chart) -> Option<&'static str> {
        let unit = chart.units.as_deref()?;
        let settings = chart.chart_settings.as_ref();

        if chart.is_markdown() {
            return (!unit.is_empty()).then_some("Markdown charts should not have a unit defined");
        }

        if settings.and_then(|s| s.show_value_column) == Some(false) {
            return (!unit.is_empty())
                .then_some("Charts with no value column should not have a unit defined");
        }

        if matches!(chart.chart_type(), Some("sparkline" | "gauge")) {
            return (!VALID_SPARKLINE_UNITS.contains(&unit))
                .then_some("Unrecognized sparkline/gauge chart unit");
        }

        (!VALID_UNITS.contains(&unit)).then_some("Unrecognized unit")
    }
}

impl Checker for ChartUnitChecker {
    fn name(&self) -> &'static str {
        "chart-unit"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            if let Some(summary) = Self::violation(chart) {
                reporter.report(Issue::new(
                    summary,
                    chart.units.as_deref().unwrap_or_default(),
                    format!("{}: {}", dashboard_name, chart.name_or_empty()),
                ));
            }
        }
        Ok(())
    }
}
