use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser, Debug)]
#[command(name = "retrosnap", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the category of a photo.
    Classify(SourceArgs),
    /// Print the category, its display name and a caption for a photo.
    Caption(SourceArgs),
    /// Compose a polaroid from a photo.
    Render(RenderArgs),
    /// Print the built-in film presets as JSON.
    Filters,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Input image (JPEG, PNG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Seed for the random choices; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input image (JPEG, PNG, ...).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output file.
    #[arg(long)]
    out: PathBuf,

    /// Film preset id.
    #[arg(long, default_value = "kodak")]
    filter: String,

    /// Caption text. Defaults to the fallback caption.
    #[arg(long)]
    caption: Option<String>,

    /// Date stamp (MM.DD.YYYY). Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Horizontal caption anchor as a fraction of the width.
    #[arg(long, requires = "y")]
    x: Option<f32>,

    /// Vertical caption anchor as a fraction of the height.
    #[arg(long, requires = "x")]
    y: Option<f32>,

    /// Caption size multiplier.
    #[arg(long, default_value_t = 1.0)]
    scale: f32,

    /// Render config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write PNG instead of JPEG.
    #[arg(long)]
    png: bool,

    /// Skip installed-font lookup; text only renders with configured font files.
    #[arg(long)]
    no_system_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
        Command::Caption(args) => cmd_caption(args),
        Command::Render(args) => cmd_render(args),
        Command::Filters => cmd_filters(),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))
}

fn cmd_classify(args: SourceArgs) -> anyhow::Result<()> {
    let bytes = read_input(&args.in_path)?;
    let mut rng = make_rng(args.seed);
    let category = retrosnap::classify_bytes(&bytes, &mut rng);
    println!("{category}");
    Ok(())
}

fn cmd_caption(args: SourceArgs) -> anyhow::Result<()> {
    let bytes = read_input(&args.in_path)?;
    let mut rng = make_rng(args.seed);
    let suggestion = retrosnap::suggest_caption(&bytes, &mut rng);
    println!(
        "{}\t{}\t{}",
        suggestion.category,
        suggestion.category.display_name(),
        suggestion.text
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => retrosnap::RenderConfig::from_json_file(path)?,
        None => retrosnap::RenderConfig::default(),
    }
    .with_env_overrides();
    if args.png {
        config.output_format = retrosnap::OutputFormat::Png;
    }
    if args.no_system_fonts {
        config.system_fonts = false;
    }

    let mut session = retrosnap::PhotoSession::new();
    session.select_filter(args.filter.parse()?);
    if let Some(caption) = args.caption {
        session.set_caption_text(caption);
    }
    if let (Some(x), Some(y)) = (args.x, args.y) {
        session.placement = retrosnap::CaptionPlacement::at(x, y);
    }
    session.set_caption_scale(args.scale);
    let date = args.date.unwrap_or_else(retrosnap::today_label);

    let bytes = read_input(&args.in_path)?;
    let mut renderer = retrosnap::PolaroidRenderer::new(config)?;
    let out = renderer.render(&bytes, &session.request(date))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &out)
        .with_context(|| format!("write polaroid '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_filters() -> anyhow::Result<()> {
    let rows: Vec<serde_json::Value> = retrosnap::presets()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "name": p.name,
                "css_filter": p.css_filter(),
                "vignette": p.vignette,
                "border": p.border,
            })
        })
        .collect();
    let json = serde_json::to_string_pretty(&rows).context("serialize presets")?;
    println!("{json}");
    Ok(())
}
