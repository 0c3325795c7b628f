// Findings reported by the checkers
use std::fmt;
use std::path::PathBuf;

/// A rule violation found in a dashboard tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    pub summary: String,
    pub snippet: String,
    pub context: String,
}

impl Issue {
    pub fn new(
        summary: impl Into<String>,
        snippet: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            snippet: snippet.into(),
            context: context.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.summary, self.snippet, self.context)
    }
}

/// A color token on a dashboard line that is not in the palette
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorViolation {
    pub file: PathBuf,
    pub line_number: usize,
    pub raw_line: String,
    pub matched_token: String,
}

impl fmt::Display for ColorViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.file.display(),
            self.line_number,
            self.raw_line.trim_end_matches(['\r', '\n'])
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Finding {
    Issue(Issue),
    Color(ColorViolation),
    /// Plain-text problem such as a missing index entry
    Notice(String),
}

impl Finding {
    pub fn is_color(&self) -> bool {
        matches!(self, Finding::Color(_))
    }
}

impl From<Issue> for Finding {
    fn from(issue: Issue) -> Self {
        Finding::Issue(issue)
    }
}

impl From<ColorViolation> for Finding {
    fn from(violation: ColorViolation) -> Self {
        Finding::Color(violation)
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Issue(issue) => issue.fmt(f),
            Finding::Color(violation) => violation.fmt(f),
            Finding::Notice(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = Issue::new("Unrecognized unit", "Widgets", "TAS: Router: Requests");
        assert_eq!(issue.to_string(), "Unrecognized unit: Widgets (TAS: Router: Requests)");
    }

    #[test]
    fn test_color_violation_display_strips_line_ending() {
        let violation = ColorViolation {
            file: PathBuf::from("dashboards/router.json"),
            line_number: 12,
            raw_line: "    \"color\": \"#ffbf00\",\r\n".to_string(),
            matched_token: "#ffbf00".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "dashboards/router.json:12:     \"color\": \"#ffbf00\","
        );
    }

    #[test]
    fn test_findings_compare_by_all_fields() {
        let a = Finding::from(Issue::new("s", "x", "d"));
        let b = Finding::from(Issue::new("s", "x", "d"));
        let c = Finding::from(Issue::new("s", "x", "other"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(!a.is_color());
    }
}
