use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use tailshade::backends;
use tailshade::cli::Args;
use tailshade::config::Config;
use tailshade::logging;
use tailshade::preview::print_preview;
use tailshade::shades::build_palettes;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;

    let palettes = build_palettes(&config, args.format)?;
    tracing::debug!(count = palettes.len(), format = ?args.format, "palettes built");

    if args.preview {
        print_preview(&mut std::io::stderr().lock(), &palettes)?;
    }

    let backend = backends::select(args.scss);
    match &args.output {
        Some(path) => backend.write_to(&palettes, path)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(backend.serialize(&palettes).as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
