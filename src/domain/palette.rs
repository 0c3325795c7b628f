// Palette domain model - the fixed set of approved dashboard colors
use super::color::Color;

pub const RED: Color = Color::new(0xf5, 0x4f, 0x47);
pub const ORANGE: Color = Color::new(0xf5, 0x76, 0x00);
pub const GREEN: Color = Color::new(0x85, 0xc8, 0x1a);
pub const BLUE: Color = Color::new(0x49, 0xaf, 0xd9);
pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

/// Brand colors, in declaration order
pub const BACKGROUND_COLORS: [Color; 4] = [RED, ORANGE, GREEN, BLUE];

pub const OTHER_COLORS: [Color; 2] = [BLACK, WHITE];

pub struct Palette;

impl Palette {
    /// Background colors followed by other colors. Nearest-color ties resolve
    /// to whichever entry comes first in this order.
    pub fn all_colors() -> impl Iterator<Item = Color> {
        BACKGROUND_COLORS.into_iter().chain(OTHER_COLORS)
    }

    pub fn contains_hex(text: &str) -> bool {
        Self::all_colors().any(|c| c.to_hex().eq_ignore_ascii_case(text))
    }

    pub fn contains_rgba(text: &str) -> bool {
        Self::all_colors().any(|c| c.to_rgba().eq_ignore_ascii_case(text))
    }

    /// Palette ordered by hex text, as shown in the console preview
    pub fn sorted_for_display() -> Vec<Color> {
        let mut colors: Vec<Color> = Self::all_colors().collect();
        colors.sort_by_key(|c| c.to_hex());
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_colors_order() {
        let colors: Vec<String> = Palette::all_colors().map(|c| c.to_hex()).collect();
        assert_eq!(
            colors,
            vec!["#f54f47", "#f57600", "#85c81a", "#49afd9", "#000000", "#ffffff"]
        );
    }

    #[test]
    fn test_contains_hex_is_case_insensitive() {
        assert!(Palette::contains_hex("#F54F47"));
        assert!(Palette::contains_hex("#49afd9"));
        assert!(!Palette::contains_hex("#ffbf00"));
    }

    #[test]
    fn test_contains_rgba_requires_canonical_text() {
        assert!(Palette::contains_rgba("rgba(245,79,71,1)"));
        assert!(Palette::contains_rgba("RGBA(0,0,0,1)"));
        assert!(!Palette::contains_rgba("rgba(245,79,71,0.5)"));
        assert!(!Palette::contains_rgba("rgba(245, 79, 71, 1)"));
    }

    #[test]
    fn test_sorted_for_display() {
        let first = Palette::sorted_for_display()[0];
        assert_eq!(first, BLACK);
        assert_eq!(Palette::sorted_for_display().len(), 6);
    }
}
