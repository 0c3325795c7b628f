// Reporter - collects findings from every checker for one run
use crate::domain::issue::Finding;
use std::collections::HashSet;
use std::process::ExitCode;

#[derive(Debug, Default)]
pub struct Reporter {
    findings: Vec<Finding>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, finding: impl Into<Finding>) {
        self.findings.push(finding.into());
    }

    pub fn len(&self) -> usize {
        self.findings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Drop duplicate findings, keeping the first occurrence of each
    pub fn summarize(self) -> Summary {
        let mut seen = HashSet::new();
        let findings: Vec<Finding> = self
            .findings
            .into_iter()
            .filter(|finding| seen.insert(finding.clone()))
            .collect();

        Summary { findings }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub findings: Vec<Finding>,
}

impl Summary {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn color_violation_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_color()).count()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::{ColorViolation, Issue};
    use std::path::PathBuf;

    #[test]
    fn test_summarize_dedups_in_first_seen_order() {
        let mut reporter = Reporter::new();
        reporter.report(Issue::new("b", "x", "d"));
        reporter.report(Issue::new("a", "x", "d"));
        reporter.report(Issue::new("b", "x", "d"));
        reporter.report(Finding::Notice("index missing".to_string()));
        assert_eq!(reporter.len(), 4);

        let summary = reporter.summarize();
        assert_eq!(
            summary.findings,
            vec![
                Finding::from(Issue::new("b", "x", "d")),
                Finding::from(Issue::new("a", "x", "d")),
                Finding::Notice("index missing".to_string()),
            ]
        );
        assert!(!summary.passed());
    }

    #[test]
    fn test_empty_run_passes() {
        let reporter = Reporter::new();
        assert!(reporter.is_empty());
        let summary = reporter.summarize();
        assert!(summary.passed());
    }

    #[test]
    fn test_color_violation_count() {
        let mut reporter = Reporter::new();
        reporter.report(ColorViolation {
            file: PathBuf::from("a.json"),
            line_number: 1,
            raw_line: "#ffbf00".to_string(),
            matched_token: "#ffbf00".to_string(),
        });
        reporter.report(Issue::new("s", "x", "d"));
        assert_eq!(reporter.summarize().color_violation_count(), 1);
    }
}
