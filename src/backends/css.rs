use crate::shades::{Mode, Palette};

use super::{variable_name, StyleBackend};

const TAILWIND_DIRECTIVES: [&str; 3] = [
    "@tailwind base;",
    "@tailwind components;",
    "@tailwind utilities;",
];

/// Tailwind stylesheet with custom properties under `:root` and `.dark`.
pub struct CssBackend;

impl StyleBackend for CssBackend {
    fn name(&self) -> &str {
        "CSS"
    }

    fn serialize(&self, palettes: &[Palette]) -> String {
        let mut out = String::new();
        for line in TAILWIND_DIRECTIVES {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        write_block(&mut out, ":root", palettes, Mode::Light);
        out.push('\n');
        write_block(&mut out, ".dark", palettes, Mode::Dark);
        out
    }
}

fn write_block(out: &mut String, selector: &str, palettes: &[Palette], mode: Mode) {
    out.push_str(&format!("{selector} {{\n"));
    for palette in palettes {
        for (shade, value) in palette.shades(mode).iter() {
            out.push_str(&format!(
                "  --{}: {};\n",
                variable_name(&palette.name, shade),
                value
            ));
        }
    }
    out.push_str("}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::config::ColorEntry;

    fn test_palettes(format: OutputFormat) -> Vec<Palette> {
        let entries = [
            ColorEntry {
                name: "primary".into(),
                default: "#3366cc".into(),
                dark: "#1a2b3c".into(),
            },
            ColorEntry {
                name: "danger".into(),
                default: "#cc3333".into(),
                dark: "#661a1a".into(),
            },
        ];
        entries
            .iter()
            .map(|e| Palette::from_entry(e, format).unwrap())
            .collect()
    }

    #[test]
    fn starts_with_tailwind_directives() {
        let output = CssBackend.serialize(&test_palettes(OutputFormat::Hex));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "@tailwind base;");
        assert_eq!(lines[1], "@tailwind components;");
        assert_eq!(lines[2], "@tailwind utilities;");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], ":root {");
    }

    #[test]
    fn line_count() {
        // 3 directives + blank + (open + 24 decls + close) + blank + (open + 24 + close)
        let output = CssBackend.serialize(&test_palettes(OutputFormat::Hex));
        assert_eq!(output.lines().count(), 3 + 1 + 26 + 1 + 26);
    }

    #[test]
    fn default_entry_has_no_suffix() {
        let output = CssBackend.serialize(&test_palettes(OutputFormat::Hex));
        assert!(output.contains("  --primary: #3366cc;\n"));
        assert!(output.contains("  --primary-500: #3366cc;\n"));
        assert!(!output.contains("--primary-default"));
    }

    #[test]
    fn dark_block_uses_dark_base() {
        let output = CssBackend.serialize(&test_palettes(OutputFormat::Hex));
        let dark = &output[output.find(".dark {").unwrap()..];
        assert!(dark.contains("  --primary: #1a2b3c;\n"));
        assert!(dark.contains("  --danger: #661a1a;\n"));
    }

    #[test]
    fn hsl_values_are_css_functions() {
        let output = CssBackend.serialize(&test_palettes(OutputFormat::Hsl));
        assert!(output.contains("  --primary-900: hsl(220, 60%, 10%);\n"));
    }

    #[test]
    fn empty_palette_list_still_has_blocks() {
        let output = CssBackend.serialize(&[]);
        assert!(output.contains(":root {\n}\n"));
        assert!(output.contains(".dark {\n}\n"));
    }
}
