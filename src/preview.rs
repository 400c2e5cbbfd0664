use std::io::Write;

use anyhow::Result;
use crossterm::style::{Color as TermColor, Stylize};

use crate::shades::{Mode, Palette, Shade};

/// Print one row of swatches per palette and mode.
pub fn print_preview(out: &mut impl Write, palettes: &[Palette]) -> Result<()> {
    let width = palettes
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        + " (dark)".len();

    write!(out, "{:width$} ", "")?;
    for shade in Shade::ALL {
        write!(out, "{:^7}", short_label(shade))?;
    }
    writeln!(out)?;

    for palette in palettes {
        for (mode, suffix) in [(Mode::Light, ""), (Mode::Dark, " (dark)")] {
            let label = format!("{}{suffix}", palette.name);
            write!(out, "{label:width$} ")?;
            for (_, value) in palette.shades(mode).iter() {
                let c = value.to_color();
                let swatch = "       ".on(TermColor::Rgb {
                    r: c.r,
                    g: c.g,
                    b: c.b,
                });
                write!(out, "{swatch}")?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn short_label(shade: Shade) -> &'static str {
    match shade {
        Shade::Default => "base",
        other => other.label(),
    }
}
