// Console output - palette preview, findings and the run summary
use crate::application::reporter::Summary;
use crate::domain::color::Color;
use crate::domain::issue::Finding;
use crate::domain::palette::Palette;
use colored::Colorize;

const SWATCH_WIDTH: usize = 21;

fn swatch(color: &Color) -> String {
    " ".repeat(SWATCH_WIDTH)
        .on_truecolor(color.r, color.g, color.b)
        .to_string()
}

pub fn render_palette(swatches: bool) -> String {
    let mut out = String::from("Palette\n");
    for color in Palette::sorted_for_display() {
        if swatches {
            out.push_str(&swatch(&color));
        }
        out.push_str(&format!("{}\t{}\n", color.to_hex(), color.to_rgba()));
    }
    out
}

pub fn render_finding(finding: &Finding, swatches: bool) -> String {
    match finding {
        Finding::Color(violation) if swatches => match Color::parse(&violation.matched_token) {
            Ok(color) => format!("{} {}", swatch(&color), violation),
            Err(_) => violation.to_string(),
        },
        other => other.to_string(),
    }
}

pub fn render_summary(summary: &Summary) -> String {
    let colors = summary.color_violation_count();
    let color_glyph = if colors == 0 { "✅" } else { "❌" };
    let verdict = if summary.passed() {
        "✅ No reportable linting issues found 🧡".green()
    } else {
        "🙀 Found things to fix 💻".red()
    };

    format!(
        "--- Summary ---\n{} Non-palette colors used: {}\n{} Total issues: {}\n{}",
        color_glyph,
        colors,
        if summary.passed() { "✅" } else { "❌" },
        summary.findings.len(),
        verdict
    )
}

pub fn print_palette(swatches: bool) {
    print!("{}", render_palette(swatches));
}

pub fn print_report(summary: &Summary, swatches: bool) {
    for finding in &summary.findings {
        println!("{}", render_finding(finding, swatches));
    }
    println!("{}", render_summary(summary));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::{ColorViolation, Issue};
    use std::path::PathBuf;

    #[test]
    fn test_render_palette_without_swatches() {
        assert_eq!(
            render_palette(false),
            "Palette\n\
             #000000\trgba(0,0,0,1)\n\
             #49afd9\trgba(73,175,217,1)\n\
             #85c81a\trgba(133,200,26,1)\n\
             #f54f47\trgba(245,79,71,1)\n\
             #f57600\trgba(245,118,0,1)\n\
             #ffffff\trgba(255,255,255,1)\n"
        );
    }

    #[test]
    fn test_render_findings_without_swatches() {
        let issue = Finding::from(Issue::new("Unrecognized unit", "Widgets", "TAS: Router: Disk"));
        assert_eq!(render_finding(&issue, false), "Unrecognized unit: Widgets (TAS: Router: Disk)");

        let color = Finding::from(ColorViolation {
            file: PathBuf::from("dashboards/router.json"),
            line_number: 3,
            raw_line: "  \"c\": \"#ffbf00\"\n".to_string(),
            matched_token: "#ffbf00".to_string(),
        });
        assert_eq!(render_finding(&color, false), "dashboards/router.json:3:   \"c\": \"#ffbf00\"");
    }

    #[test]
    fn test_render_summary_counts() {
        let summary = Summary {
            findings: vec![
                Finding::Notice("Index file not found: tas/index.json".to_string()),
                Finding::from(ColorViolation {
                    file: PathBuf::from("a.json"),
                    line_number: 1,
                    raw_line: "#ffbf00".to_string(),
                    matched_token: "#ffbf00".to_string(),
                }),
            ],
        };
        let text = render_summary(&summary);
        assert!(text.contains("❌ Non-palette colors used: 1"));
        assert!(text.contains("Total issues: 2"));
        assert!(text.contains("Found things to fix"));

        let text = render_summary(&Summary { findings: vec![] });
        assert!(text.contains("✅ Non-palette colors used: 0"));
        assert!(text.contains("No reportable linting issues found"));
    }
}
