use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use layout_transformer::{LayoutTransform, Size, SolverSettings};

#[derive(Parser, Debug)]
#[command(name = "layout-transformer", version)]
struct Cli {
    /// Log solver steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the bounding box of a transformed rectangle.
    Bounds(BoundsArgs),
    /// Measure a fixed-size child under a transform.
    Measure(MeasureArgs),
    /// Arrange a child under a transform.
    Arrange(ArrangeArgs),
}

#[derive(Parser, Debug)]
struct BoundsArgs {
    /// Transform as JSON, or `@path` to a JSON file.
    #[arg(long)]
    transform: String,

    /// Rectangle size as `WxH`.
    #[arg(long, value_parser = parse_size)]
    size: Size,
}

#[derive(Parser, Debug)]
struct MeasureArgs {
    /// Transform as JSON, or `@path` to a JSON file.
    #[arg(long)]
    transform: String,

    /// Space available to the transformed container as `WxH` (`inf` allowed).
    #[arg(long, value_parser = parse_size)]
    available: Size,

    /// Natural size of the child as `WxH`; the child never asks for more than it is offered.
    #[arg(long, value_parser = parse_size)]
    child: Size,

    /// Solver settings JSON file.
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ArrangeArgs {
    /// Transform as JSON, or `@path` to a JSON file.
    #[arg(long)]
    transform: String,

    /// Final container size as `WxH`.
    #[arg(long = "final", value_parser = parse_size)]
    final_size: Size,

    /// Child desired size from the measure pass as `WxH`.
    #[arg(long, value_parser = parse_size)]
    child_desired: Size,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Bounds(args) => cmd_bounds(args),
        Command::Measure(args) => cmd_measure(args),
        Command::Arrange(args) => cmd_arrange(args),
    }
}

fn cmd_bounds(args: BoundsArgs) -> anyhow::Result<()> {
    let transform = read_transform(&args.transform)?;
    let bounds = layout_transformer::compute_transformed_bounds(
        transform.to_affine(),
        args.size.width,
        args.size.height,
    );
    print_json(&serde_json::json!({ "bounds": bounds }))
}

fn cmd_measure(args: MeasureArgs) -> anyhow::Result<()> {
    let transform = read_transform(&args.transform)?;
    let settings = match &args.settings {
        Some(path) => read_settings(path)?,
        None => SolverSettings::default(),
    };

    let natural = args.child;
    let mut child =
        |offer: Size| Size::new(natural.width.min(offer.width), natural.height.min(offer.height));
    let out = layout_transformer::measure(
        Some(transform.to_affine()),
        args.available,
        &mut child,
        &settings,
    );
    print_json(&out)
}

fn cmd_arrange(args: ArrangeArgs) -> anyhow::Result<()> {
    let transform = read_transform(&args.transform)?;
    let out = layout_transformer::arrange(
        Some(transform.to_affine()),
        args.final_size,
        args.child_desired,
    );
    print_json(&out)
}

fn read_transform(arg: &str) -> anyhow::Result<LayoutTransform> {
    let json = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read transform '{path}'"))?,
        None => arg.to_string(),
    };
    LayoutTransform::from_json(&json).with_context(|| "parse transform JSON")
}

fn read_settings(path: &Path) -> anyhow::Result<SolverSettings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read settings '{}'", path.display()))?;
    SolverSettings::from_json(&json).with_context(|| "parse settings JSON")
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).with_context(|| "serialize output")?;
    println!("{s}");
    Ok(())
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = parse_extent(w)?;
    let h = parse_extent(h)?;
    Ok(Size::new(w, h))
}

fn parse_extent(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("inf") {
        return Ok(f64::INFINITY);
    }
    let v: f64 = s.parse().map_err(|_| format!("invalid extent '{s}'"))?;
    if !v.is_finite() || v < 0.0 {
        return Err(format!("extent must be a non-negative number or 'inf', got '{s}'"));
    }
    Ok(v)
}
