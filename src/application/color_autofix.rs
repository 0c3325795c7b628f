// Color autofix - nearest palette color and in-place line rewriting
use crate::domain::color::{Color, HEX_PATTERN, RGBA_PATTERN};
use crate::domain::palette::{Palette, BLACK, BLUE, GREEN, RED};

/// A single token substitution made on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub before: String,
    pub after: String,
    pub line: String,
}

/// Nearest palette color and its L1 distance.
///
/// Black, and colors with a single nonzero channel, map straight to black or
/// the red/green/blue brand color so primaries keep their intended hue. The
/// test is a loose "one channel equals the channel sum", which is kept as is.
/// Everything else takes the minimum Manhattan distance, ties going to the
/// color listed first in the palette.
pub fn nearest_palette_color(color: &Color) -> (Color, u32) {
    let sum = color.channel_sum();
    if sum == 0 {
        return (BLACK, 0);
    }
    if u32::from(color.r) == sum {
        return (RED, 0);
    }
    if u32::from(color.g) == sum {
        return (GREEN, 0);
    }
    if u32::from(color.b) == sum {
        return (BLUE, 0);
    }

    let mut best = (BLACK, u32::MAX);
    for candidate in Palette::all_colors() {
        let distance = color.l1_distance(&candidate);
        if distance < best.1 {
            best = (candidate, distance);
        }
    }
    best
}

/// Replace the first occurrence of `token` in `line`, leaving every other byte alone
pub fn replace_first(line: &str, token: &str, replacement: &str) -> String {
    line.replacen(token, replacement, 1)
}

/// Rewrite the first non-palette hex color on the line, or failing that the
/// first non-palette rgba color. Returns `None` when nothing changes.
pub fn fix_line(line: &str) -> Option<Replacement> {
    if let Some(m) = HEX_PATTERN.find(line) {
        let token = m.as_str();
        if !Palette::contains_hex(token) {
            if let Ok(color) = Color::parse(token) {
                let (nearest, _) = nearest_palette_color(&color);
                return Some(substitute(line, token, nearest.to_hex()));
            }
        }
    }

    if let Some(m) = RGBA_PATTERN.find(line) {
        let token = m.as_str();
        if !Palette::contains_rgba(token) {
            if let Ok(color) = Color::parse(token) {
                let (nearest, _) = nearest_palette_color(&color);
                return Some(substitute(line, token, nearest.to_rgba()));
            }
        }
    }

    None
}

fn substitute(line: &str, token: &str, after: String) -> Replacement {
    Replacement {
        before: token.to_string(),
        line: replace_first(line, token, &after),
        after,
    }
}
