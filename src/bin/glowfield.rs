use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use glowfield::{EffectKind, FrameIndex, FrameRange, PngSequenceSink, SceneConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "glowfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range as a numbered PNG sequence.
    Render(RenderArgs),
    /// Write a starter scene config for an effect.
    InitConfig(InitConfigArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Directory receiving `frame_00000.png`, `frame_00001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// First frame to render.
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Number of frames; defaults to the config's `frames`.
    #[arg(long)]
    frames: Option<u64>,
}

#[derive(Parser, Debug)]
struct InitConfigArgs {
    #[arg(long, value_enum)]
    effect: EffectChoice,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EffectChoice {
    Blob,
    Radar,
    Particles,
    Backdrop,
}

impl From<EffectChoice> for EffectKind {
    fn from(c: EffectChoice) -> Self {
        match c {
            EffectChoice::Blob => Self::Blob,
            EffectChoice::Radar => Self::Radar,
            EffectChoice::Particles => Self::Particles,
            EffectChoice::Backdrop => Self::Backdrop,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::InitConfig(args) => cmd_init_config(args),
    }
}

fn init_logging() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("glowfield=info".parse()?)
        .from_env()
        .context("parse RUST_LOG directives")?;
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    Ok(())
}

fn load_scene(path: &std::path::Path) -> anyhow::Result<SceneConfig> {
    SceneConfig::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.config)?;
    let mut session = Session::from_config(&scene)?;
    let frame = session.render_frame(FrameIndex(args.frame))?;
    session.stop();
    frame.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.config)?;
    let count = args.frames.unwrap_or(scene.frames);
    let end = args
        .start
        .checked_add(count)
        .context("frame range overflows")?;
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let mut session = Session::from_config(&scene)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = session.render_range(range, &mut sink)?;
    session.stop();

    eprintln!(
        "wrote {} frames to {} ({} dropped)",
        stats.frames_total,
        args.out_dir.display(),
        stats.engine.failed_paints
    );
    Ok(())
}

fn cmd_init_config(args: InitConfigArgs) -> anyhow::Result<()> {
    let json = SceneConfig::example(args.effect.into()).to_json_pretty()?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write config '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
