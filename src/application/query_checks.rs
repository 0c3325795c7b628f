// Query pattern checks - unquoted metric names and template variables
use regex::Regex;
use std::sync::LazyLock;

/// Known false positive: the metric is the first argument of label_replace
const WHITELISTED_QUERY: &str =
    r#"label_replace(tas.gorouter.file_descriptors, "placement_tag", "cf", "placement_tag", "")"#;

static TAS_METRIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"tas\.[A-Za-z0-9_.\-]*").expect("valid tas metric pattern"));

static TS_METRIC_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ts\((?<metric>[A-Za-z0-9_.\-~*]+)").expect("valid ts() pattern"));

static UNQUOTED_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=(?<var>\$\{[a-z_]*\})").expect("valid variable pattern"));

/// Metric names that should be quoted: bare `tas.*` names, then bare `ts(...)` arguments
pub fn unquoted_metrics(query: &str) -> impl Iterator<Item = &str> {
    let whitelisted = query == WHITELISTED_QUERY;
    let tas = UnquotedTasMetrics { query, pos: 0 };
    let ts = TS_METRIC_NAME
        .captures_iter(query)
        .filter_map(|caps| caps.name("metric"))
        .map(|m| m.as_str());

    tas.chain(ts).take_while(move |_| !whitelisted)
}

/// `${var}` placeholders used directly as a filter value, e.g. `source=${env}`
pub fn unquoted_variables(query: &str) -> impl Iterator<Item = &str> {
    UNQUOTED_VARIABLE
        .captures_iter(query)
        .filter_map(|caps| caps.name("var"))
        .map(|m| m.as_str())
}

/// `tas.` tokens not immediately preceded by a double quote. A rejected
/// candidate restarts the search one byte later, so a quoted name never hides
/// an unquoted one nested inside it.
struct UnquotedTasMetrics<'a> {
    query: &'a str,
    pos: usize,
}

impl<'a> Iterator for UnquotedTasMetrics<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos <= self.query.len() {
            let m = TAS_METRIC_NAME.find_at(self.query, self.pos)?;
            let quoted = self.query[..m.start()].ends_with('"');
            if quoted {
                // "tas." is ASCII, so start + 1 is a char boundary
                self.pos = m.start() + 1;
                continue;
            }
            self.pos = m.end().max(m.start() + 1);
            return Some(m.as_str());
        }
        None
    }
}
