use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use symbolmap_chart::load::{load_state_names, load_topology, load_values};
use symbolmap_chart::{process_error, Document, SymbolMap, ValueRecord};
use symbolmap_eventstream::WindowEvent;
use symbolmap_geo::{AlbersUsa, Mercator};

const SVG_ID: &str = "map";

/// Symbol map renderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a symbol map and write it as SVG or HTML
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// TopoJSON file with a `land` object and optionally `states`
    #[arg(long)]
    map: PathBuf,

    /// CSV file with `longitude`, `latitude` and value columns
    #[arg(long)]
    values: PathBuf,

    /// Tab separated state names with `id`, `name` and `code` columns
    #[arg(long)]
    states: Option<PathBuf>,

    /// Column holding the plotted value
    #[arg(long, default_value = "value")]
    value_field: String,

    #[arg(long, value_enum, default_value_t = ProjectionKind::Mercator)]
    projection: ProjectionKind,

    /// Draw state boundaries and highlight the state of a hovered symbol
    #[arg(long)]
    state_layer: bool,

    /// Column holding the two letter state code of each value
    #[arg(long, default_value = "state")]
    state_field: String,

    /// Status log message for a hovered symbol, with `{column}` replaced by
    /// that column of the symbol's row
    #[arg(long)]
    describe: Option<String>,

    /// Simulate hovering the pointer at `x,y` before writing the output
    #[arg(long, value_parser = parse_point)]
    hover: Option<[f64; 2]>,

    #[arg(long, default_value_t = 960.0)]
    width: f64,

    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Output path for the SVG drawing
    #[arg(long)]
    svg_out: Option<PathBuf>,

    /// Output path for a standalone HTML page with the drawing and status log
    #[arg(long)]
    html_out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProjectionKind {
    Mercator,
    AlbersUsa,
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate `{v}`: {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

/// Fills the `{column}` placeholders of `template` from `record`.
/// Returns `None` if a column is missing or a brace is left open.
fn fill_template(template: &str, record: &ValueRecord) -> Option<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after.find('}')?;
        out.push_str(record.field(after[..end].trim())?);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Some(out)
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let document = Document::new();
    document.add_svg(SVG_ID, args.width, args.height);

    let map = load_topology(&args.map);
    let values = load_values(&args.values);
    let states = args.states.as_ref().map(load_state_names).transpose();

    // Show every load failure on the page before giving up
    let mut failed = process_error(&document, map.as_ref().err());
    failed |= process_error(&document, values.as_ref().err());
    failed |= process_error(&document, states.as_ref().err());
    if failed {
        write_outputs(&document, &args)?;
        bail!("Unable to load symbol map inputs");
    }

    let value_field = args.value_field.clone();
    let state_field = args.state_field.clone();
    let mut chart = SymbolMap::new(&document)
        .map(map?)
        .values(values?)
        .value(move |d| d.number(&value_field))
        .states(args.state_layer)
        .state(move |d| d.field(&state_field).map(str::to_string));
    if let Some(records) = states? {
        chart = chart.lookup(records);
    }
    if let Some(template) = args.describe.clone() {
        chart = chart.describe(move |d| fill_template(&template, d));
    }
    chart = match args.projection {
        ProjectionKind::Mercator => chart.projection(Mercator::for_canvas(args.width, args.height)),
        ProjectionKind::AlbersUsa => chart.projection(
            AlbersUsa::new().with_translate([args.width / 2.0, args.height / 2.0]),
        ),
    };

    chart.recalibrate();
    chart.draw(SVG_ID)?;
    chart.update_log(None);

    if let Some([x, y]) = args.hover {
        document.dispatch(SVG_ID, &WindowEvent::cursor_moved(x, y))?;
        info!("Hovered at ({x}, {y}): {}", document.log());
    }

    write_outputs(&document, &args)
}

fn write_outputs(document: &Document, args: &RenderArgs) -> anyhow::Result<()> {
    let svg = document
        .to_svg_string(SVG_ID)
        .with_context(|| format!("No svg element with id `{SVG_ID}`"))?;

    if let Some(path) = &args.svg_out {
        fs::write(path, &svg).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved SVG to {}", path.display());
    }
    if let Some(path) = &args.html_out {
        fs::write(path, document.to_html())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved HTML to {}", path.display());
    }
    if args.svg_out.is_none() && args.html_out.is_none() {
        println!("{svg}");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Setup logger
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => render(args),
    }
}
