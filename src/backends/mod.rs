pub mod css;
pub mod scss;

use std::path::Path;

use anyhow::{Context, Result};

use crate::shades::Palette;

pub use css::CssBackend;
pub use scss::ScssBackend;

/// A stylesheet dialect the generated palettes can be rendered into.
pub trait StyleBackend {
    /// Human-readable name for log messages.
    fn name(&self) -> &str;

    /// Render every palette to stylesheet text.
    fn serialize(&self, palettes: &[Palette]) -> String;

    /// Render and write to `path`.
    fn write_to(&self, palettes: &[Palette], path: &Path) -> Result<()> {
        let content = self.serialize(palettes);
        std::fs::write(path, content)
            .with_context(|| format!("failed to write stylesheet to {}", path.display()))?;
        tracing::info!(backend = self.name(), path = %path.display(), "wrote stylesheet");
        Ok(())
    }
}

/// Pick the backend for the preprocessor toggle.
pub fn select(scss: bool) -> Box<dyn StyleBackend> {
    if scss {
        Box::new(ScssBackend)
    } else {
        Box::new(CssBackend)
    }
}

/// Variable name for one shade: the `default` entry has no suffix.
pub(crate) fn variable_name(base: &str, shade: crate::shades::Shade) -> String {
    match shade {
        crate::shades::Shade::Default => base.to_string(),
        other => format!("{base}-{}", other.label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shades::Shade;

    #[test]
    fn default_shade_has_no_suffix() {
        assert_eq!(variable_name("primary", Shade::Default), "primary");
        assert_eq!(variable_name("primary", Shade::S950), "primary-950");
    }

    #[test]
    fn select_by_toggle() {
        assert_eq!(select(false).name(), "CSS");
        assert_eq!(select(true).name(), "SCSS");
    }
}
