// CLI driver for the recoloring engine. Loads one source icon, recolors it
// once per requested variant, and writes each result next to the input (or
// into --out-dir). With no color flags it produces the two shipped variants,
// stealth and bold.

use anyhow::{Context, Result};
use clap::Parser;
use icon_recolor::core_modules::utils::image_helper::image_helper;
use icon_recolor::pipeline::{Color, DEFAULT_VARIANTS, RecolorConfig, RecolorPipeline};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Recolors a two-tone icon into alternate color variants.")]
struct Args {
    /// Source icon to recolor.
    #[arg(default_value = "assets/icon.png")]
    input: PathBuf,

    /// Directory the recolored icons are written to. Defaults to the
    /// directory of the input file.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Background color for a single custom variant, e.g. "#151517".
    #[arg(long, requires = "foreground")]
    background: Option<String>,

    /// Foreground color for a single custom variant, e.g. "#D68F70".
    #[arg(long, requires = "background")]
    foreground: Option<String>,

    /// Output file stem for the custom variant.
    #[arg(long, default_value = "icon_custom")]
    name: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let image = image_helper::load(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;

    let out_dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => args
            .input
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf(),
    };

    let jobs: Vec<(String, RecolorConfig)> = match (&args.background, &args.foreground) {
        (Some(background), Some(foreground)) => vec![(
            format!("{}.png", args.name),
            RecolorConfig {
                foreground: Color::from_hex(foreground)?,
                background: Color::from_hex(background)?,
            },
        )],
        _ => DEFAULT_VARIANTS
            .iter()
            .map(|variant| {
                (
                    format!("{}.png", variant.name),
                    RecolorConfig::from(*variant),
                )
            })
            .collect(),
    };

    for (file_name, config) in jobs {
        let recolored = RecolorPipeline::new(config).recolor_image(&image);
        let path = out_dir.join(file_name);
        image_helper::save(&path, recolored.width(), recolored.height(), recolored.as_raw())
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Saved {}", path.display());
    }

    Ok(())
}
