// File: crates/demo/src/main.rs
// Summary: Demo loads one or two hourly series, renders the comparison chart to SVG (and PNG with `png`),
// and prints statistics plus the tooltip under an optional pointer position.

mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use skychart_core::svg::render_svg;
use skychart_core::{align, ChartSettings, ChartView, Metric, MetricSummary, SeriesLabels, SeriesSlot};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an hourly time-series comparison chart", long_about = None)]
struct Cli {
    /// First series (CSV or hourly JSON)
    #[arg(long, value_hint = ValueHint::FilePath)]
    a: PathBuf,

    /// Second series to compare against; omit for a single-location chart
    #[arg(long, value_hint = ValueHint::FilePath)]
    b: Option<PathBuf>,

    /// Hourly metric key; selects the value column and display unit
    #[arg(long, default_value = "temperature_2m")]
    metric: String,

    /// Legend name of series A (defaults to the file stem)
    #[arg(long)]
    label_a: Option<String>,

    /// Legend name of series B (defaults to the file stem)
    #[arg(long)]
    label_b: Option<String>,

    /// Pointer x (content-box pixels) to resolve and print the tooltip for
    #[arg(long)]
    pointer_x: Option<f64>,

    /// Pointer y; defaults to the vertical middle of the chart
    #[arg(long)]
    pointer_y: Option<f64>,

    /// TOML chart settings (pipeline limits, geometry, labels, unit)
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    let metric = Metric::from_key(&cli.metric);
    if metric.is_none() {
        warn!(metric = %cli.metric, "unknown metric; values shown without a unit");
    }
    settings.unit = Metric::unit_for_key(&cli.metric).to_string();
    settings.labels = SeriesLabels {
        a: cli.label_a.clone().unwrap_or_else(|| stem(&cli.a)),
        b: match (&cli.label_b, &cli.b) {
            (Some(l), _) => l.clone(),
            (None, Some(b)) => stem(b),
            (None, None) => settings.labels.b.clone(),
        },
    };

    let raw_a = input::load_series(&cli.a, &cli.metric)?;
    let raw_b = cli.b.as_deref().map(|p| input::load_series(p, &cli.metric)).transpose()?;
    let dataset = align(&raw_a, raw_b.as_ref()).context("aligning series")?;
    info!(samples = dataset.len(), "dataset ready");

    let mut view = ChartView::new(settings);
    view.set_data(dataset);
    print_summary(&view, metric);

    let Some(chart) = view.render() else {
        warn!("nothing to render (empty data or degenerate geometry)");
        return Ok(());
    };
    info!(min = chart.scale.min, max = chart.scale.max, step = chart.scale.step, "scale");

    let hover = match cli.pointer_x {
        Some(x) => {
            let y = cli.pointer_y.unwrap_or(view.geometry().height / 2.0);
            view.pointer_move(x, y).cloned()
        }
        None => None,
    };
    if hover.is_some() {
        print_tooltip(&view)?;
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    let svg_path = cli.out.join(format!("chart_{}.svg", stem(&cli.a)));
    std::fs::write(&svg_path, render_svg(&chart, hover.as_ref()))
        .with_context(|| format!("writing {}", svg_path.display()))?;
    println!("Wrote {}", svg_path.display());

    #[cfg(feature = "png")]
    {
        let png_path = svg_path.with_extension("png");
        skychart_render_skia::SkiaRenderer::new().render_png(&chart, hover.as_ref(), &png_path)?;
        println!("Wrote {}", png_path.display());
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<ChartSettings> {
    let Some(path) = path else { return Ok(ChartSettings::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartSettings::from_toml_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("series")
        .to_string()
}

fn print_summary(view: &ChartView, metric: Option<Metric>) {
    let labels = &view.settings().labels;
    if let Some(stats) = view.stats() {
        let leader = match stats.leader() {
            SeriesSlot::A => &labels.a,
            SeriesSlot::B => &labels.b,
        };
        println!("{} avg {:.1} / max {} | {} avg {:.1} / max {}", labels.a, stats.avg_a, stats.max_a, labels.b, stats.avg_b, stats.max_b);
        print!("Mean difference {:+.1}", stats.mean_difference());
        if let Some(pct) = stats.relative_difference_percent() {
            print!(" ({pct:+.0}%)");
        }
        println!();
        println!("{leader} leads in {}% of samples", stats.a_wins_percent.max(stats.b_wins_percent()));
        return;
    }
    let values = view.dataset().values(SeriesSlot::A);
    if let Some(summary) = metric.and_then(|m| MetricSummary::from_values(m, &values)) {
        println!("{}: average {}", labels.a, summary.display());
    }
}

fn print_tooltip(view: &ChartView) -> Result<()> {
    let Some(tooltip) = view.tooltip().context("building tooltip")? else { return Ok(()) };
    println!("{}", tooltip.time);
    for row in &tooltip.rows {
        println!("  {:<16} {}", row.label, row.value);
    }
    Ok(())
}
