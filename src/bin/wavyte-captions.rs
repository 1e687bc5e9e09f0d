use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "wavyte-captions", version)]
struct Cli {
    /// Log direction decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Direct a request JSON and write the subtitle envelope.
    Direct(DirectArgs),
    /// Split one text span into timed lines and print them as JSON.
    Split(SplitArgs),
}

#[derive(Parser, Debug)]
struct DirectArgs {
    /// Input request JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the request's style.
    #[arg(long, value_enum)]
    style: Option<StyleChoice>,

    /// Override the request's preset (implies dynamic placement).
    #[arg(long, value_enum)]
    preset: Option<PresetChoice>,

    /// Override the request's creativity.
    #[arg(long)]
    creativity: Option<f64>,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Parser, Debug)]
struct SplitArgs {
    /// Text to split.
    #[arg(long)]
    text: String,

    /// Start time in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// End time in seconds.
    #[arg(long)]
    end: f64,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Target characters per line.
    #[arg(long)]
    max_chars: Option<usize>,

    /// Line budget per segment.
    #[arg(long)]
    max_lines: Option<usize>,

    /// What to do when a split exceeds the line budget.
    #[arg(long, value_enum)]
    overflow: Option<OverflowChoice>,
}

impl LayoutArgs {
    fn apply(&self, layout: &mut wavyte_captions::LineLayout) {
        if let Some(n) = self.max_chars {
            layout.max_chars_per_line = n;
        }
        if let Some(n) = self.max_lines {
            layout.max_lines = Some(n);
        }
        if let Some(o) = self.overflow {
            layout.overflow_strategy = o.into();
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    OneLine,
    TwoLines,
    Documentary,
    CinematicDynamic,
    Trailer,
    AlexHormozi,
}

impl From<StyleChoice> for wavyte_captions::Style {
    fn from(c: StyleChoice) -> Self {
        match c {
            StyleChoice::OneLine => Self::OneLine,
            StyleChoice::TwoLines => Self::TwoLines,
            StyleChoice::Documentary => Self::Documentary,
            StyleChoice::CinematicDynamic => Self::CinematicDynamic,
            StyleChoice::Trailer => Self::Trailer,
            StyleChoice::AlexHormozi => Self::AlexHormozi,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Documentary,
    CinematicDynamicV1,
    TrailerV1,
}

impl From<PresetChoice> for wavyte_captions::DirectionPreset {
    fn from(c: PresetChoice) -> Self {
        match c {
            PresetChoice::Documentary => Self::Documentary,
            PresetChoice::CinematicDynamicV1 => Self::CinematicDynamicV1,
            PresetChoice::TrailerV1 => Self::TrailerV1,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OverflowChoice {
    Allow,
    Rebalance,
    Shrink,
    RebalanceThenShrink,
}

impl From<OverflowChoice> for wavyte_captions::OverflowStrategy {
    fn from(c: OverflowChoice) -> Self {
        match c {
            OverflowChoice::Allow => Self::Allow,
            OverflowChoice::Rebalance => Self::Rebalance,
            OverflowChoice::Shrink => Self::Shrink,
            OverflowChoice::RebalanceThenShrink => Self::RebalanceThenShrink,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Direct(args) => cmd_direct(args),
        Command::Split(args) => cmd_split(args),
    }
}

fn cmd_direct(args: DirectArgs) -> anyhow::Result<()> {
    let mut req = wavyte_captions::DirectionRequest::from_path(&args.in_path)
        .with_context(|| format!("load request '{}'", args.in_path.display()))?;

    if let Some(style) = args.style {
        req.input.style = style.into();
    }
    if let Some(preset) = args.preset {
        req.input.direction_preset = Some(preset.into());
        req.input.placement_strategy = wavyte_captions::PlacementStrategy::Dynamic;
    }
    if let Some(c) = args.creativity {
        req.input.creativity = c;
    }
    args.layout.apply(&mut req.layout);

    let directed = req.run()?;
    let json = directed.to_json()?;
    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!(
                "wrote {} segments to {}",
                directed.segments.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_split(args: SplitArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.start.is_finite() && args.end.is_finite() && args.start >= 0.0 && args.end >= args.start,
        "--start/--end must be finite with 0 <= start <= end"
    );
    let mut layout = wavyte_captions::LineLayout::default();
    args.layout.apply(&mut layout);

    let lines = layout.split(&args.text, args.start, args.end, None);
    println!(
        "{}",
        serde_json::to_string_pretty(&lines).context("encode lines")?
    );
    Ok(())
}
