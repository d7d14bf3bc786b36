//! SVG heatmaps of distance and contact maps.
//!
//! Uses the SVG backend so no system fonts are needed.

use crate::error::{CliError, Result};
use biocontact::engine::matrix::{ContactMatrix, DistanceMatrix};
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const FIGURE_SIZE: (u32, u32) = (900, 760);
const COLOR_BAR_WIDTH: u32 = 150;
const MAX_AXIS_LABELS: usize = 20;
const COLOR_BAR_STEPS: usize = 128;

// Near end and far end of the distance scale.
const NEAR_COLOR: RGBColor = RGBColor(165, 205, 144);
const FAR_COLOR: RGBColor = RGBColor(44, 49, 114);

/// Maps `t` in `[0, 1]` onto the two-color distance scale.
pub fn distance_color(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(
        mix(NEAR_COLOR.0, FAR_COLOR.0),
        mix(NEAR_COLOR.1, FAR_COLOR.1),
        mix(NEAR_COLOR.2, FAR_COLOR.2),
    )
}

pub fn contact_color(value: u8) -> RGBColor {
    if value == 0 { WHITE } else { BLACK }
}

enum ColorBar {
    Continuous { min: f64, max: f64, caption: String },
    Binary { caption: String },
}

pub fn render_distance_map(path: &Path, label: &str, distances: &DistanceMatrix) -> Result<()> {
    let values = distances.values();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let min = values.iter().copied().fold(max, f64::min);
    let span = if max > min { max - min } else { 1.0 };

    draw_heatmap(
        path,
        &format!("{}: Distance Between Centers of Residues", label),
        distances.labels(),
        &|i, j| distance_color((values[(i, j)] - min) / span),
        ColorBar::Continuous {
            min,
            max: min + span,
            caption: "Angstroms (Å)".to_string(),
        },
    )
    .map_err(|source| CliError::Render {
        path: path.to_path_buf(),
        source,
    })
}

pub fn render_contact_map(path: &Path, label: &str, contacts: &ContactMatrix) -> Result<()> {
    let values = contacts.values();
    draw_heatmap(
        path,
        &format!("{}: Thresholded Contact Map", label),
        contacts.labels(),
        &|i, j| contact_color(values[(i, j)]),
        ColorBar::Binary {
            caption: format!("Contact Binary (Threshold = {}Å)", contacts.threshold()),
        },
    )
    .map_err(|source| CliError::Render {
        path: path.to_path_buf(),
        source,
    })
}

fn draw_heatmap(
    path: &Path,
    title: &str,
    labels: &[isize],
    cell_color: &dyn Fn(usize, usize) -> RGBColor,
    color_bar: ColorBar,
) -> anyhow::Result<()> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let n = labels.len();
    if n == 0 {
        root.draw(&Text::new(
            format!("{}: no residues to plot", title),
            (40, (FIGURE_SIZE.1 / 2) as i32),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let (map_area, bar_area) = root.split_horizontally((FIGURE_SIZE.0 - COLOR_BAR_WIDTH) as i32);

    let mut chart = ChartBuilder::on(&map_area)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..n, 0..n)?;

    // Row 0 is drawn at the top, as in a printed matrix.
    let label_at_x = |x: &usize| labels.get(*x).map(|l| l.to_string()).unwrap_or_default();
    let label_at_y = |y: &usize| {
        n.checked_sub(1 + *y)
            .and_then(|row| labels.get(row))
            .map(|l| l.to_string())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n.min(MAX_AXIS_LABELS))
        .y_labels(n.min(MAX_AXIS_LABELS))
        .x_label_formatter(&label_at_x)
        .y_label_formatter(&label_at_y)
        .x_desc("Residue")
        .y_desc("Residue")
        .draw()?;

    chart.draw_series((0..n).flat_map(|i| (0..n).map(move |j| (i, j))).map(|(i, j)| {
        let top = n - i;
        Rectangle::new([(j, top - 1), (j + 1, top)], cell_color(i, j).filled())
    }))?;

    draw_color_bar(&bar_area, color_bar)?;

    root.present()?;
    debug!(cells = n * n, "Rendered heatmap to {:?}", path);
    Ok(())
}

fn draw_color_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    bar: ColorBar,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    match bar {
        ColorBar::Continuous { min, max, caption } => {
            let mut chart = ChartBuilder::on(area)
                .margin_top(60)
                .margin_bottom(65)
                .margin_right(15)
                .y_label_area_size(70)
                .build_cartesian_2d(0.0..1.0, min..max)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .disable_x_axis()
                .y_labels(8)
                .y_label_formatter(&|v| format!("{:.1}", v))
                .y_desc(caption)
                .draw()?;

            let step = (max - min) / COLOR_BAR_STEPS as f64;
            chart.draw_series((0..COLOR_BAR_STEPS).map(|k| {
                let lo = min + step * k as f64;
                let t = k as f64 / (COLOR_BAR_STEPS - 1) as f64;
                Rectangle::new([(0.0, lo), (1.0, lo + step)], distance_color(t).filled())
            }))?;
        }
        ColorBar::Binary { caption } => {
            let mut chart = ChartBuilder::on(area)
                .margin_top(60)
                .margin_bottom(65)
                .margin_right(15)
                .y_label_area_size(70)
                .build_cartesian_2d(0.0..1.0, -0.5..1.5)?;
            chart
                .configure_mesh()
                .disable_mesh()
                .disable_x_axis()
                .y_labels(5)
                .y_label_formatter(&binary_tick_label)
                .y_desc(caption)
                .draw()?;

            chart.draw_series([(0u8, -0.5), (1u8, 0.5)].into_iter().map(|(value, lo)| {
                Rectangle::new([(0.0, lo), (1.0, lo + 1.0)], contact_color(value).filled())
            }))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(0.0, -0.5), (1.0, 1.5)],
                BLACK.stroke_width(1),
            )))?;
        }
    }
    Ok(())
}

// Only the two contact states get a tick label.
fn binary_tick_label(v: &f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < 1e-9 && (0.0..=1.0).contains(&rounded) {
        format!("{}", rounded as u8)
    } else {
        String::new()
    }
}
