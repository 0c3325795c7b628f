// Color domain model - RGB triples parsed from hex or rgba notation
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Six hex digits after a `#`, anywhere in the text
pub static HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{6}").expect("valid hex pattern"));

/// An `rgb(...)` or `rgba(...)` call, up to its closing parenthesis
pub static RGBA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba?\([^)]*\)").expect("valid rgba pattern"));

static RGBA_CHANNELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\((?<r>\d+),(?<g>\d+),(?<b>\d+)").expect("valid rgba channel pattern")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("not a hex or rgba color: {0:?}")]
    Unrecognized(String),
    #[error("channel value out of range in {0:?}")]
    ChannelOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (any case) or `rgba(r,g,b[,a])`; whitespace and alpha are ignored
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        if let Some(m) = HEX_PATTERN.find(text) {
            return Ok(Self::from_hex_digits(&m.as_str()[1..]));
        }
        Self::from_rgba(text)
    }

    fn from_hex_digits(digits: &str) -> Self {
        // HEX_PATTERN guarantees six ASCII hex digits
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or_default();
        Self::new(channel(0), channel(2), channel(4))
    }

    fn from_rgba(text: &str) -> Result<Self, ColorParseError> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let caps = RGBA_CHANNELS
            .captures(&compact)
            .ok_or_else(|| ColorParseError::Unrecognized(text.to_string()))?;

        let channel = |name: &str| -> Result<u8, ColorParseError> {
            caps[name]
                .parse::<u8>()
                .map_err(|_| ColorParseError::ChannelOutOfRange(text.to_string()))
        };

        Ok(Self::new(channel("r")?, channel("g")?, channel("b")?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Always rendered fully opaque
    pub fn to_rgba(&self) -> String {
        format!("rgba({},{},{},1)", self.r, self.g, self.b)
    }

    pub fn channel_sum(&self) -> u32 {
        u32::from(self.r) + u32::from(self.g) + u32::from(self.b)
    }

    /// Manhattan distance over the three channels
    pub fn l1_distance(&self, other: &Color) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
