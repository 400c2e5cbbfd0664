use crate::shades::{Mode, Palette};

use super::{variable_name, StyleBackend};

/// SCSS variables: `$name-shade` for light, `$name-dark-shade` for dark.
pub struct ScssBackend;

impl StyleBackend for ScssBackend {
    fn name(&self) -> &str {
        "SCSS"
    }

    fn serialize(&self, palettes: &[Palette]) -> String {
        let mut out = String::new();
        write_section(&mut out, palettes, Mode::Light);
        out.push('\n');
        write_section(&mut out, palettes, Mode::Dark);
        out
    }
}

fn write_section(out: &mut String, palettes: &[Palette], mode: Mode) {
    for palette in palettes {
        let base = match mode {
            Mode::Light => palette.name.clone(),
            Mode::Dark => format!("{}-dark", palette.name),
        };
        for (shade, value) in palette.shades(mode).iter() {
            out.push_str(&format!("${}: {};\n", variable_name(&base, shade), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::ColorEntry;

    fn palette() -> Palette {
        let entry = ColorEntry {
            name: "brand".into(),
            default: "#3366cc".into(),
            dark: "#1a2b3c".into(),
        };
        Palette::from_entry(&entry, OutputFormat::Rgb).unwrap()
    }

    #[test]
    fn light_then_dark_variables() {
        let output = ScssBackend.serialize(&[palette()]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12 + 1 + 12);
        assert_eq!(lines[0], "$brand: rgb(51, 102, 204);");
        assert_eq!(lines[12], "");
        assert_eq!(lines[13], "$brand-dark: rgb(26, 43, 60);");
        assert!(lines[24].starts_with("$brand-dark-950: rgb("));
    }

    #[test]
    fn no_tailwind_directives() {
        let output = ScssBackend.serialize(&[palette()]);
        assert!(!output.contains("@tailwind"));
        assert!(!output.contains(":root"));
    }
}
