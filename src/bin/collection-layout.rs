use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use collection_layout::{
    Edges, LayoutAttributes, LayoutJob, Point, ScrollState, Size, Vec2,
};

#[derive(Parser, Debug)]
#[command(name = "collection-layout", version)]
struct Cli {
    /// Log layout passes to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the attributes visible at a scroll offset.
    Layout(LayoutArgs),
    /// Print where a carousel settles after a drag.
    Snap(SnapArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input layout job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Horizontal scroll offset.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    scroll_x: f64,

    /// Vertical scroll offset.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    scroll_y: f64,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SnapArgs {
    /// Input layout job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Proposed horizontal offset where the drag ended.
    #[arg(long, allow_hyphen_values = true)]
    x: f64,

    /// Horizontal velocity at release.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    velocity: f64,
}

#[derive(serde::Serialize)]
struct LayoutReport {
    content_size: Size,
    content_insets: Edges,
    attributes: Vec<LayoutAttributes>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Snap(args) => cmd_snap(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let job = LayoutJob::load(&args.in_path)?;
    let engine = job.prepare().context("prepare layout")?;

    let scroll = ScrollState::new(
        Point::new(args.scroll_x, args.scroll_y),
        job.descriptor.viewport,
    );
    let report = LayoutReport {
        content_size: engine.content_extent(),
        content_insets: engine.content_insets(),
        attributes: engine.visible_attributes(&scroll),
    };

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize layout report")?;
    println!("{json}");
    Ok(())
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    let job = LayoutJob::load(&args.in_path)?;
    let engine = job.prepare().context("prepare layout")?;

    let target = engine.resolve_snap_target(Point::new(args.x, 0.0), Vec2::new(args.velocity, 0.0));
    println!("{}", serde_json::to_string(&target).context("serialize snap target")?);
    Ok(())
}
