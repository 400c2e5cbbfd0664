use palette::{FromColor, Srgb};
use thiserror::Error;

/// HSL in the sRGB standard: hue in degrees, saturation and lightness in [0, 1].
pub type Hsl = palette::Hsl<palette::encoding::Srgb, f32>;

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("invalid hex color {input:?}: expected 6 hex digits, got {len}")]
    InvalidLength { input: String, len: usize },

    #[error("invalid hex color {0:?}: contains non-hex characters")]
    InvalidDigits(String),
}

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components and provides conversions to and from HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigits(hex.to_string()));
        }
        if digits.len() != 6 {
            return Err(ColorParseError::InvalidLength {
                input: hex.to_string(),
                len: digits.len(),
            });
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigits(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Serialize as a CSS `rgb(r, g, b)` function.
    pub fn to_rgb_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        Hsl::from_color(srgb_f32)
    }

    /// Create from HSL, rounding each channel to the nearest 8-bit value.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Build an HSL value from hue degrees, saturation and lightness.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Hsl {
    Hsl::new(hue, saturation, lightness)
}

/// Parse a hex color and convert it to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorParseError> {
    Color::from_hex(hex).map(Color::to_hsl)
}

/// Convert an HSL value to a lowercase `#rrggbb` string.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Color::from_hsl(hsl).to_hex()
}

/// Render an HSL value as a CSS `hsl(h, s%, l%)` function.
pub fn hsl_to_css(hsl: Hsl) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        format_number(hsl.hue.into_positive_degrees()),
        format_number(hsl.saturation * 100.0),
        format_number(hsl.lightness * 100.0),
    )
}

/// One decimal place, with a trailing `.0` dropped.
fn format_number(value: f32) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
