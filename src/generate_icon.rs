use anyhow::{Context, Result};
use clap::Parser;
use irize::config::parse_hex_color;
use irize::constants::colors;
use irize::logging::init_logging;
use irize::render::{self, RenderOptions};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Render a rounded-corner preview of the app icon
#[derive(Parser)]
#[command(name = "generate-icon")]
struct Args {
    /// Edge length in pixels
    #[arg(short, long, default_value_t = 1024)]
    size: u32,
    /// Output PNG path
    #[arg(short, long, default_value = "AppIconPreview.png")]
    output: PathBuf,
    /// Accent color as #RRGGBB
    #[arg(long, default_value = colors::DEFAULT_ACCENT_HEX)]
    accent: String,
    /// Export the square, unmasked artwork instead
    #[arg(long)]
    square: bool,
}

fn main() -> Result<()> {
    let _logger = init_logging("info")?;
    let args = Args::parse();

    let options = RenderOptions {
        apply_corner_mask: !args.square,
        accent: parse_hex_color(&args.accent)?,
    };

    println!("Generating {}x{} icon preview...", args.size, args.size);

    let bytes = render::render_size(args.size, &options)
        .with_context(|| format!("Failed to render {}px icon", args.size))?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .context("Failed to create output directory")?;
        }
    }
    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!("wrote {} ({} bytes)", args.output.display(), bytes.len());

    println!("✅ Icon preview created: {}", args.output.display());

    Ok(())
}
