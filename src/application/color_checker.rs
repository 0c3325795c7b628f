// Color match checker - every color token in a dashboard must be a palette color
use crate::application::checker::Checker;
use crate::application::color_autofix::fix_line;
use crate::application::reporter::Reporter;
use crate::domain::color::{Color, HEX_PATTERN, RGBA_PATTERN};
use crate::domain::dashboard::DashboardSet;
use crate::domain::issue::ColorViolation;
use crate::domain::palette::Palette;
use crate::infrastructure::dashboard_repository::write_dashboard;
use regex::Regex;
use std::path::Path;

pub struct ColorChecker {
    autofix: bool,
}

/// Result of scanning one file
#[derive(Debug, Default, PartialEq)]
pub struct ColorScan {
    pub violations: Vec<ColorViolation>,
    /// Full new file contents when autofix changed at least one line
    pub rewritten: Option<String>,
}

impl ColorChecker {
    pub fn new(autofix: bool) -> Self {
        Self { autofix }
    }

    /// Scan `contents` line by line. With autofix on, each line is repaired
    /// before it is checked, so only colors that could not be fixed are reported.
    pub fn scan(&self, path: &Path, contents: &str) -> ColorScan {
        let mut scan = ColorScan::default();
        let mut output = String::with_capacity(contents.len());
        let mut changed = false;

        for (index, raw_line) in contents.split_inclusive('\n').enumerate() {
            let line_number = index + 1;
            let mut line = raw_line.to_string();

            if self.autofix {
                if let Some(replacement) = fix_line(&line) {
                    tracing::info!(
                        file = %path.display(),
                        line = line_number,
                        before = %replacement.before,
                        after = %replacement.after,
                        "Replaced non-palette color: {}",
                        replacement.line.trim_end()
                    );
                    line = replacement.line;
                    changed = true;
                }
            }

            let hex = first_violation(&HEX_PATTERN, &line, Palette::contains_hex);
            let rgba = first_violation(&RGBA_PATTERN, &line, Palette::contains_rgba);
            for token in hex.into_iter().chain(rgba) {
                scan.violations.push(ColorViolation {
                    file: path.to_path_buf(),
                    line_number,
                    raw_line: line.clone(),
                    matched_token: token,
                });
            }

            output.push_str(&line);
        }

        if changed {
            scan.rewritten = Some(output);
        }
        scan
    }
}

/// First token matching `pattern` when it is a real color outside the palette
fn first_violation(pattern: &Regex, line: &str, in_palette: fn(&str) -> bool) -> Option<String> {
    let token = pattern.find(line)?.as_str();
    if in_palette(token) {
        return None;
    }
    if let Err(e) = Color::parse(token) {
        tracing::warn!("Encountered an error matching {:?}, assuming this was not a color: {}", token, e);
        return None;
    }
    Some(token.to_string())
}

impl Checker for ColorChecker {
    fn name(&self) -> &'static str {
        "color-match"
    }

    fn run(&self, dashboards: &DashboardSet, reporter: &mut Reporter) -> anyhow::Result<()> {
        for file in dashboards.files() {
            tracing::debug!("Scanning colors in {}", file.path.display());
            let scan = self.scan(&file.path, &file.contents);

            if let Some(contents) = scan.rewritten {
                write_dashboard(&file.path, &contents)?;
                tracing::info!("Rewrote {} with palette colors", file.path.display());
            }

            for violation in scan.violations {
                reporter.report(violation);
            }
        }
        Ok(())
    }
}
