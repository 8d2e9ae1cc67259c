use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use bouquet::{
    BouquetConfig, Color, DeviceClass, FfmpegSink, FfmpegSinkOpts, Fps, LayoutPreset, MusicInput,
    PngSequenceSink, RenderSession, RenderSessionOpts, ResizeEvent, Rng64, Size, place_bouquet,
    write_png,
};

#[derive(Parser, Debug)]
#[command(name = "bouquet", version, about = "Render blooming flower bouquets")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the bouquet at one point in time as a PNG.
    Frame(FrameArgs),
    /// Render the whole bloom as a PNG sequence.
    Frames(FramesArgs),
    /// Render the whole bloom as an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print the bouquet layout as JSON.
    Layout(LayoutArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    Desktop,
    Narrow,
    LandscapeNarrow,
}

impl From<PresetArg> for DeviceClass {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Desktop => DeviceClass::Desktop,
            PresetArg::Narrow => DeviceClass::Narrow,
            PresetArg::LandscapeNarrow => DeviceClass::LandscapeNarrow,
        }
    }
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Surface width in device pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,
    /// Surface height in device pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Device pixels per CSS pixel, used to pick the layout preset.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,
    /// Force a layout preset instead of classifying the viewport.
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,
    /// Bouquet configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for a reproducible bouquet.
    #[arg(long)]
    seed: Option<u64>,
    /// Background fill as `#RRGGBB`; overrides the config.
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,
}

impl CommonArgs {
    fn config(&self) -> anyhow::Result<BouquetConfig> {
        let mut config = match &self.config {
            Some(path) => BouquetConfig::from_path(path)?,
            None => BouquetConfig::default(),
        };
        if self.background.is_some() {
            config.background = self.background;
        }
        Ok(config)
    }

    fn session_opts(&self, fps: Fps) -> RenderSessionOpts {
        RenderSessionOpts {
            width: self.width,
            height: self.height,
            fps,
            device_pixel_ratio: self.dpr,
            device_class: self.preset.map(DeviceClass::from),
            seed: self.seed,
            ..RenderSessionOpts::default()
        }
    }
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Milliseconds since the bouquet started.
    #[arg(long)]
    at_ms: f64,
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
    /// Simulate a host resize, as `FRAME:WIDTHxHEIGHT` (repeatable).
    #[arg(long = "resize-at")]
    resize_at: Vec<ResizeEvent>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    common: CommonArgs,
    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
    /// Background music to mux into the clip.
    #[arg(long)]
    music: Option<PathBuf>,
    /// Music volume in [0, 1].
    #[arg(long, default_value_t = bouquet::DEFAULT_VOLUME)]
    volume: f64,
    /// Overwrite output if it already exists (`--overwrite false` to refuse).
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    overwrite: bool,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    common: CommonArgs,
}

fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = args.common.config()?;
    let opts = args.common.session_opts(Fps::new(60, 1)?);
    let mut sess = RenderSession::new(config, opts)?;
    let frame = sess.render_frame_at(args.at_ms)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let config = args.common.config()?;
    let opts = RenderSessionOpts {
        max_frames: args.max_frames,
        resizes: args.resize_at,
        ..args.common.session_opts(Fps::new(args.fps, 1)?)
    };
    let mut sess = RenderSession::new(config, opts)?;
    let mut sink = PngSequenceSink::new(&args.out_dir);
    let stats = sess.render_all(&mut sink)?;

    eprintln!(
        "wrote {} frames to {}{}",
        stats.frames,
        args.out_dir.display(),
        if stats.completed { "" } else { " (frame cap reached)" }
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.common.config()?;
    let background = config.background.unwrap_or(Color::rgb(0, 0, 0));
    let opts = RenderSessionOpts {
        max_frames: args.max_frames,
        music: args.music.map(|path| MusicInput::new(path, args.volume)),
        ..args.common.session_opts(Fps::new(args.fps, 1)?)
    };
    let mut sess = RenderSession::new(config, opts)?;

    let mut sink = FfmpegSink::new(FfmpegSinkOpts {
        out_path: args.out.clone(),
        overwrite: args.overwrite,
        background,
    });
    let _stats = sess.render_all(&mut sink)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let common = &args.common;
    let config = common.config()?;
    let class = common.preset.map(DeviceClass::from).unwrap_or_else(|| {
        DeviceClass::classify(
            f64::from(common.width) / common.dpr,
            f64::from(common.height) / common.dpr,
        )
    });
    let preset = config
        .preset
        .unwrap_or_else(|| LayoutPreset::for_class(class));
    let envelope = preset.envelope(Size::new(
        f64::from(common.width),
        f64::from(common.height),
    ));
    let mut rng = common.seed.map_or_else(Rng64::from_entropy, Rng64::new);
    let anchors = place_bouquet(preset.count, &envelope, &config.layers, &mut rng);

    let out = serde_json::json!({
        "device_class": class,
        "envelope": envelope,
        "anchors": anchors,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
