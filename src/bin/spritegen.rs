use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use spritegen::{
    BatchOutcome, FrameBuffer, FrameSink, NullSink, PngSequenceSink, ShapeKind, SpriteConfig,
    SpriteSession, SpriteSheetSink, TeeSink,
};

#[derive(Parser, Debug)]
#[command(name = "spritegen", version, about = "Procedural sprite frame generator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available generators.
    List,
    /// Generate a frame sequence as PNG files and/or a sprite sheet.
    Generate(GenerateArgs),
    /// Paint a single standalone shape as a PNG.
    Shape(ShapeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generator name (see `spritegen list`).
    #[arg(long)]
    generator: Option<String>,

    /// Number of frames.
    #[arg(long)]
    frames: Option<u32>,

    /// Square frame size in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Worker thread override.
    #[arg(long)]
    threads: Option<usize>,

    /// Parameter override as `key=json`, e.g. `--param circular=true`. Repeatable.
    #[arg(long = "param", value_parser = parse_param)]
    params: Vec<(String, serde_json::Value)>,

    /// Directory for one PNG per frame.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Sprite sheet PNG path.
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Frames per sprite sheet row.
    #[arg(long, default_value_t = 8)]
    columns: u32,
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// Shape to paint.
    #[arg(long, value_parser = parse_shape)]
    kind: ShapeKind,

    /// Normalized animation time.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Square size in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Generate(args) => cmd_generate(args),
        Command::Shape(args) => cmd_shape(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_param(s: &str) -> Result<(String, serde_json::Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=json, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in '{s}'"));
    }
    let value = serde_json::from_str(raw).map_err(|e| format!("'{raw}' is not JSON: {e}"))?;
    Ok((key.to_owned(), value))
}

fn parse_shape(s: &str) -> Result<ShapeKind, String> {
    ShapeKind::from_name(s).map_err(|_| {
        let names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.name()).collect();
        format!("unknown shape '{s}' (available: {})", names.join(", "))
    })
}

fn cmd_list() -> anyhow::Result<()> {
    let session = SpriteSession::default();
    for name in session.registry().names() {
        println!("{name}");
    }
    Ok(())
}

fn load_config(args: &GenerateArgs) -> anyhow::Result<SpriteConfig> {
    let mut cfg = match &args.config {
        Some(path) => SpriteConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SpriteConfig::default(),
    };
    if let Some(name) = &args.generator {
        cfg.generator = name.clone();
    }
    if let Some(n) = args.frames {
        cfg.frame_count = n;
    }
    if let Some(n) = args.size {
        cfg.size = n;
    }
    if args.threads.is_some() {
        cfg.threads = args.threads;
    }
    if !args.params.is_empty() {
        let patch = cfg
            .params
            .get_or_insert_with(|| serde_json::Value::Object(Default::default()));
        let fields = patch
            .as_object_mut()
            .context("config 'params' must be a JSON object")?;
        for (key, value) in &args.params {
            fields.insert(key.clone(), value.clone());
        }
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    let session = SpriteSession::from_config(&cfg)?;

    let mut png_sink = args.out.as_ref().map(PngSequenceSink::new);
    let mut sheet_sink = args
        .sheet
        .as_ref()
        .map(|p| SpriteSheetSink::new(p, args.columns))
        .transpose()?;
    let mut null_sink = NullSink;

    let mut sinks: Vec<&mut dyn FrameSink> = Vec::new();
    if let Some(s) = png_sink.as_mut() {
        sinks.push(s);
    }
    if let Some(s) = sheet_sink.as_mut() {
        sinks.push(s);
    }
    if sinks.is_empty() {
        sinks.push(&mut null_sink);
    }
    let mut sink = TeeSink::new(sinks);

    let outcome = session
        .generate(&mut sink)
        .with_context(|| format!("generate '{}'", cfg.generator))?;
    let BatchOutcome::Completed(stats) = outcome else {
        anyhow::bail!("generation was skipped: {outcome:?}");
    };
    drop(sink);

    if let Some(dir) = &args.out {
        eprintln!("wrote {} frames to {}", stats.frames, dir.display());
    }
    if let Some(path) = &args.sheet {
        eprintln!("wrote {}", path.display());
    }
    println!(
        "{} frames {}x{} fingerprint {:016x}",
        stats.frames,
        stats.size,
        stats.size,
        session.sequence().fingerprint()
    );
    Ok(())
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.size >= 1, "size must be >= 1");
    let mut buffer = FrameBuffer::square(args.size);
    args.kind.paint_default(&mut buffer, args.time);
    write_output(&args.out, &buffer)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_output(path: &Path, frame: &FrameBuffer) -> anyhow::Result<()> {
    spritegen::write_png(path, frame).with_context(|| format!("write png '{}'", path.display()))
}
