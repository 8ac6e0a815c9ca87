// File: crates/spectrum-demo/src/main.rs
// Summary: Demo loads spectra from CSV (one column per spectrum), renders them to PNG and prints
// the marker reading of a simulated click.
//
// Usage: spectrum-demo <spectra.csv> [click_x_px] [options.json] [light|dark]

use anyhow::{Context, Result};
use spectrum_core::{MemoryHost, PlotOptions, PointerEvent, SpectrumPlot, Theme};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const WIDTH: i32 = 900;
const HEIGHT: i32 = 450;
const PALETTE: [&str; 6] = [
    "rgba(230, 25, 75, 1)",
    "rgba(0, 130, 200, 1)",
    "rgba(60, 180, 75, 1)",
    "rgba(245, 130, 48, 1)",
    "rgba(145, 30, 180, 1)",
    "rgba(70, 240, 240, 1)",
];

/// Spectra read from CSV: optional label column plus named value columns.
struct SpectraTable {
    labels: Option<Vec<f64>>,
    spectra: Vec<(String, Vec<f64>)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().context("usage: spectrum-demo <spectra.csv> [click_x_px] [options.json] [light|dark]")?);
    let click_x = match args.next() {
        Some(s) => s.parse::<f32>().with_context(|| format!("invalid click x '{s}'"))?,
        None => WIDTH as f32 * 0.5,
    };
    let options = match args.next() {
        Some(p) => {
            let text = std::fs::read_to_string(&p).with_context(|| format!("reading options {p}"))?;
            PlotOptions::from_json_str(&text)?
        }
        None => PlotOptions::default().with_decimals(3),
    };
    let theme = Theme::find(args.next().as_deref().unwrap_or("light"));

    let table = load_spectra_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if table.spectra.is_empty() {
        anyhow::bail!("no spectra loaded; check headers/delimiter.");
    }
    info!(spectra = table.spectra.len(), file = %path.display(), "loaded spectra");

    let mut host = MemoryHost::new();
    host.register("demo");
    let mut plot: SpectrumPlot = SpectrumPlot::create(&mut host, "demo", WIDTH, HEIGHT, options)?;
    plot.set_theme(theme)?;

    for (i, (name, values)) in table.spectra.into_iter().enumerate() {
        let show_points = values.len() <= 200;
        plot.add_spectrum_with(name, values, PALETTE[i % PALETTE.len()], show_points);
    }
    plot.set_labels(table.labels);
    plot.on("click", |reading| {
        for r in reading {
            info!(series = %r.label, x = r.x, y = r.y, "click");
        }
    });
    plot.enable_markers()?;
    plot.dispatch(PointerEvent::Click { x: click_x, y: HEIGHT as f32 * 0.5 })?;
    plot.draw()?;

    println!("{}", serde_json::to_string_pretty(plot.marker_data())?);

    let out = out_name(&path, theme.name);
    plot.save_png(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Produce output file name like target/out/spectrum_<stem>_<theme>.png
fn out_name(input: &Path, theme: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("plot");
    let mut out = PathBuf::from("target/out");
    out.push(format!("spectrum_{stem}_{theme}.png"));
    out
}

/// Load a CSV whose columns are spectra. A first column named x/label/wavelength/
/// frequency/index becomes the label axis.
fn load_spectra_csv(path: &Path) -> Result<SpectraTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let label_col = headers
        .first()
        .map(|h| h.to_lowercase())
        .filter(|h| ["x", "label", "wavelength", "frequency", "index"].contains(&h.as_str()))
        .map(|_| 0usize);

    let mut labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        for (i, field) in rec.iter().enumerate().take(headers.len()) {
            let v = match field.parse::<f64>() {
                Ok(v) => v,
                Err(_) => {
                    warn!(row, column = %headers[i], value = field, "non-numeric cell, using NaN");
                    f64::NAN
                }
            };
            if Some(i) == label_col { labels.push(v); } else { columns[i].push(v); }
        }
    }

    let spectra = headers
        .into_iter()
        .zip(columns)
        .enumerate()
        .filter(|(i, _)| Some(*i) != label_col)
        .map(|(_, pair)| pair)
        .collect();
    Ok(SpectraTable { labels: label_col.map(|_| labels), spectra })
}
