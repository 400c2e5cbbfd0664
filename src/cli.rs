use std::path::PathBuf;

use clap::Parser;

/// Generate Tailwind-style light/dark shade scales as CSS custom properties.
#[derive(Parser, Debug)]
#[command(name = "tailshade", version, about)]
pub struct Args {
    /// Path to the JSON color config
    #[arg(short, long, default_value = "colors.json")]
    pub config: PathBuf,

    /// Color notation used for every generated value
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Hex)]
    pub format: OutputFormat,

    /// Emit SCSS variables instead of CSS custom properties
    #[arg(long)]
    pub scss: bool,

    /// Write the stylesheet to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a colored terminal preview of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Hex,
    Rgb,
    Hsl,
}
