// Checker trait - one implementation per dashboard rule
use crate::application::reporter::Reporter;
use crate::domain::dashboard::DashboardSet;

pub trait Checker {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Report every violation found in `dashboards`. Invalid data is reported,
    /// never returned as an error; errors are reserved for I/O failures.
    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()>;
}
