//! Tint/shade scale derivation.
//!
//! A base color is converted to HSL once; every shade keeps its hue and
//! saturation and only swaps in a fixed lightness.

use std::fmt;

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::color::{self, Color, ColorParseError, Hsl};
use crate::config::{ColorEntry, Config};

/// Position in the shade scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    /// The base color itself.
    Default,
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// Every shade, in output order.
    pub const ALL: [Shade; 12] = [
        Shade::Default,
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Shade::Default => "default",
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
            Shade::S950 => "950",
        }
    }

    /// Target lightness, or `None` for the base color which keeps its own.
    pub fn lightness(self) -> Option<f32> {
        let step = match self {
            Shade::Default => return None,
            Shade::S50 => return Some(0.95),
            Shade::S950 => return Some(0.05),
            Shade::S100 => 0,
            Shade::S200 => 1,
            Shade::S300 => 2,
            Shade::S400 => 3,
            Shade::S500 => 4,
            Shade::S600 => 5,
            Shade::S700 => 6,
            Shade::S800 => 7,
            Shade::S900 => 8,
        };
        Some(lightness_for(step))
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lightness of the `i`-th hundred step: 0.90 for `100` down to 0.10 for `900`.
pub fn lightness_for(i: usize) -> f32 {
    (90 - 10 * i as i32) as f32 / 100.0
}

/// A single rendered shade value.
#[derive(Debug, Clone, Copy)]
pub enum ShadeValue {
    Hex(Color),
    Rgb(Color),
    Hsl(Hsl),
}

impl ShadeValue {
    fn from_hsl(hsl: Hsl, format: OutputFormat) -> Self {
        match format {
            OutputFormat::Hex => ShadeValue::Hex(Color::from_hsl(hsl)),
            OutputFormat::Rgb => ShadeValue::Rgb(Color::from_hsl(hsl)),
            OutputFormat::Hsl => ShadeValue::Hsl(hsl),
        }
    }

    /// The value as an sRGB color, for previews.
    pub fn to_color(self) -> Color {
        match self {
            ShadeValue::Hex(c) | ShadeValue::Rgb(c) => c,
            ShadeValue::Hsl(hsl) => Color::from_hsl(hsl),
        }
    }
}

impl fmt::Display for ShadeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeValue::Hex(c) => f.write_str(&c.to_hex()),
            ShadeValue::Rgb(c) => f.write_str(&c.to_rgb_css()),
            ShadeValue::Hsl(hsl) => f.write_str(&color::hsl_to_css(*hsl)),
        }
    }
}

/// The full scale derived from one base color, in [`Shade::ALL`] order.
#[derive(Debug, Clone)]
pub struct ShadeSet {
    entries: [(Shade, ShadeValue); 12],
}

impl ShadeSet {
    pub fn get(&self, shade: Shade) -> ShadeValue {
        // entries are stored in ALL order
        let idx = Shade::ALL.iter().position(|s| *s == shade).unwrap_or(0);
        self.entries[idx].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, ShadeValue)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive the shade scale for `base`, rendered in `format`.
///
/// Only the base's hue and saturation carry over; `default` keeps the base's
/// own HSL value. Fails only when `base` is not a well-formed hex color.
pub fn generate_shades(base: &str, format: OutputFormat) -> Result<ShadeSet, ColorParseError> {
    let base_hsl = color::hex_to_hsl(base)?;
    let hue = base_hsl.hue.into_positive_degrees();
    let saturation = base_hsl.saturation;

    let entries = Shade::ALL.map(|shade| {
        let hsl = match shade.lightness() {
            Some(lightness) => color::hsl(hue, saturation, lightness),
            None => base_hsl,
        };
        (shade, ShadeValue::from_hsl(hsl, format))
    });

    Ok(ShadeSet { entries })
}

/// Theme mode a shade set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

/// One configured color with its light and dark scales.
#[derive(Debug, Clone)]
pub struct Palette {
    pub name: String,
    pub light: ShadeSet,
    pub dark: ShadeSet,
}

impl Palette {
    pub fn from_entry(entry: &ColorEntry, format: OutputFormat) -> Result<Self> {
        let light = generate_shades(&entry.default, format)
            .with_context(|| format!("color '{}' (light mode)", entry.name))?;
        let dark = generate_shades(&entry.dark, format)
            .with_context(|| format!("color '{}' (dark mode)", entry.name))?;
        tracing::debug!(name = %entry.name, "built palette");
        Ok(Self {
            name: entry.name.clone(),
            light,
            dark,
        })
    }

    pub fn shades(&self, mode: Mode) -> &ShadeSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Build every palette in config order. Nothing is returned unless all succeed.
pub fn build_palettes(config: &Config, format: OutputFormat) -> Result<Vec<Palette>> {
    config
        .colors
        .iter()
        .map(|entry| Palette::from_entry(entry, format))
        .collect()
}
