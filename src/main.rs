use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use irize::config::GeneratorConfig;
use irize::generate::Generator;
use irize::icon_spec::{app_icon_specs, select_specs};
use irize::logging::init_logging;
use irize::manifest::AppIconManifest;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "irize-icons")]
#[command(about = "Generate the I RIZE app icon set for the iOS asset catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every icon and write it into the asset catalog
    Generate(GenerateArgs),
    /// Print the icon table
    List,
    /// Print the asset catalog Contents.json
    Manifest,
}

#[derive(clap::Args, Default)]
struct GenerateArgs {
    /// YAML settings file; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// AppIcon.appiconset directory
    #[arg(long)]
    primary_dir: Option<PathBuf>,
    /// Directory used when the asset catalog cannot be written
    #[arg(long)]
    fallback_dir: Option<PathBuf>,
    /// Clip corners to a rounded square (for previews, not for the catalog)
    #[arg(long)]
    corner_mask: bool,
    /// Skip writing Contents.json
    #[arg(long)]
    no_manifest: bool,
    /// Only generate these identifiers (repeatable)
    #[arg(long = "only", value_name = "IDENTIFIER")]
    only: Vec<String>,
}

fn main() -> Result<()> {
    let _logger = init_logging("info")?;
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate(args)) => generate_command(args),
        Some(Commands::List) => {
            list_command();
            Ok(())
        }
        Some(Commands::Manifest) => manifest_command(),
        None => generate_command(GenerateArgs::default()),
    }
}

fn generate_command(args: GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = args.primary_dir {
        config.primary_dir = dir;
    }
    if let Some(dir) = args.fallback_dir {
        config.fallback_dir = dir;
    }
    if args.corner_mask {
        config.apply_corner_mask = true;
    }
    if args.no_manifest {
        config.write_manifest = false;
    }

    let specs = select_specs(&args.only).context("see `irize-icons list` for valid identifiers")?;

    let generator = Generator::from_config(&config).context("Invalid generator settings")?;

    println!("🎨 Generating {} app icons...", specs.len());
    println!("   Asset catalog: {}", generator.writer().primary_dir().display());
    println!("   Fallback:      {}", generator.writer().fallback_dir().display());
    println!();

    let report = generator.generate_all(&specs);
    println!("{}", report);

    if report.all_failed() {
        bail!("no icons could be written");
    }

    Ok(())
}

fn list_command() {
    println!("{:<20} {:>6}  {:<14} {}", "IDENTIFIER", "PIXELS", "IDIOM", "DESCRIPTION");
    for spec in app_icon_specs() {
        println!(
            "{:<20} {:>6}  {:<14} {}",
            spec.identifier,
            spec.pixel_size,
            spec.idiom.as_str(),
            spec.description
        );
    }
}

fn manifest_command() -> Result<()> {
    let json = AppIconManifest::from_specs(app_icon_specs())
        .to_json()
        .context("Failed to serialize Contents.json")?;
    println!("{}", json);
    Ok(())
}
