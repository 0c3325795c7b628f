// Query checkers - unquoted metric names and variables in chart and parameter queries
use crate::application::checker::Checker;
use crate::application::query_checks::{unquoted_metrics, unquoted_variables};
use crate::application::reporter::Reporter;
use crate::domain::dashboard::DashboardSet;
use crate::domain::issue::Issue;

fn report_query(query: &str, dashboard_name: &str, reporter: &mut Reporter) {
    for metric in unquoted_metrics(query) {
        reporter.report(Issue::new(
            format!("Unquoted metric name {}", metric),
            query,
            dashboard_name,
        ));
    }
    for variable in unquoted_variables(query) {
        reporter.report(Issue::new(
            format!("Unquoted variable in filter expression: {}", variable),
            query,
            dashboard_name,
        ));
    }
}

pub struct ChartQueryChecker;

impl Checker for ChartQueryChecker {
    fn name(&self) -> &'static str {
        "chart-query"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for (chart, dashboard_name) in dashboards.each_chart() {
            for source in &chart.sources {
                report_query(&source.query, dashboard_name, reporter);
            }
        }
        Ok(())
    }
}

pub struct ParameterQueryChecker;

impl Checker for ParameterQueryChecker {
    fn name(&self) -> &'static str {
        "parameter-query"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for dashboard in dashboards.each_dashboard() {
            let queries = dashboard
                .parameter_details
                .values()
                .filter_map(|param| param.query_value.as_deref());
            for query in queries {
                report_query(query, &dashboard.name, reporter);
            }
        }
        Ok(())
    }
}
