//! Multi-panel violin figure comparing metric distributions per category.

pub mod kde;

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use tracing::info;

use crate::model::Dataset;
use crate::schema::{Category, Metric};
use crate::stats;

const FIGURE_SIZE: (u32, u32) = (1800, 1200);
const GRID: (usize, usize) = (2, 3);
const VIOLIN_HALF_WIDTH: f64 = 0.4;

/// Renders the comparison figure to a raster (PNG) and a vector (SVG) file.
/// Both files show the same figure.
pub fn render_chart(dataset: &Dataset, png: &Path, svg: &Path) -> Result<()> {
    {
        let root = BitMapBackend::new(png, FIGURE_SIZE).into_drawing_area();
        draw_figure(&root, dataset)?;
        root.present()
            .with_context(|| format!("failed to write {}", png.display()))?;
    }
    {
        let root = SVGBackend::new(svg, FIGURE_SIZE).into_drawing_area();
        draw_figure(&root, dataset)?;
        root.present()
            .with_context(|| format!("failed to write {}", svg.display()))?;
    }
    info!(png = %png.display(), svg = %svg.display(), "chart_rendered");
    Ok(())
}

fn draw_figure<DB>(root: &DrawingArea<DB, Shift>, dataset: &Dataset) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let categories: Vec<Category> = Category::RECOGNIZED
        .iter()
        .copied()
        .filter(|c| dataset.category_count(*c) > 0)
        .collect();

    let panels = root.split_evenly(GRID);
    for (area, metric) in panels.iter().zip(Metric::ALL) {
        draw_panel(area, dataset, &categories, metric)?;
    }
    Ok(())
}

fn draw_panel<DB>(
    area: &DrawingArea<DB, Shift>,
    dataset: &Dataset,
    categories: &[Category],
    metric: Metric,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (y_lo, y_hi) = metric_range(dataset, categories, metric);
    let x_hi = categories.len().max(1) as f64 - 0.5;

    let mut chart = ChartBuilder::on(area)
        .caption(metric.column(), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(56)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.5f64..x_hi, y_lo..y_hi)?;

    let names: Vec<&'static str> = categories.iter().map(|c| c.as_str()).collect();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|x: &f64| {
            let i = x.round();
            if (x - i).abs() < 0.01 && i >= 0.0 && (i as usize) < names.len() {
                names[i as usize].to_string()
            } else {
                String::new()
            }
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc(metric.axis_label())
        .y_label_style(("sans-serif", 13))
        .draw()?;

    for (slot, category) in categories.iter().enumerate() {
        let values = dataset.metric_values(*category, metric);
        draw_violin(&mut chart, slot as f64, *category, &values)?;
    }
    Ok(())
}

fn draw_violin<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    center: f64,
    category: Category,
    values: &[f64],
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let curve = match kde::density(values) {
        Some(curve) if curve.max_density > 0.0 => curve,
        _ => return Ok(()),
    };

    let half_width = |d: f64| VIOLIN_HALF_WIDTH * d / curve.max_density;

    let mut outline: Vec<(f64, f64)> = Vec::with_capacity(curve.ys.len() * 2);
    for (y, d) in curve.ys.iter().zip(&curve.densities) {
        outline.push((center - half_width(*d), *y));
    }
    for (y, d) in curve.ys.iter().zip(&curve.densities).rev() {
        outline.push((center + half_width(*d), *y));
    }

    let (r, g, b) = category.color();
    let color = RGBColor(r, g, b);
    chart.draw_series(std::iter::once(Polygon::new(outline.clone(), color.mix(0.55))))?;
    chart.draw_series(std::iter::once(PathElement::new(
        outline,
        color.stroke_width(1),
    )))?;

    // Inner quartile marks across the violin body.
    let mut sorted = values.to_vec();
    let (q1, q2, q3) = stats::quartiles(&mut sorted);
    for q in [q1, q2, q3] {
        if !q.is_finite() {
            continue;
        }
        let w = half_width(density_at(&curve, q));
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(center - w, q), (center + w, q)],
            BLACK.mix(0.7).stroke_width(1),
        )))?;
    }
    Ok(())
}

fn density_at(curve: &kde::DensityCurve, y: f64) -> f64 {
    let mut best = curve.max_density;
    let mut best_dist = f64::INFINITY;
    for (gy, d) in curve.ys.iter().zip(&curve.densities) {
        let dist = (gy - y).abs();
        if dist < best_dist {
            best_dist = dist;
            best = *d;
        }
    }
    best
}

fn metric_range(dataset: &Dataset, categories: &[Category], metric: Metric) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for category in categories {
        for v in dataset.metric_values(*category, metric) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let span = hi - lo;
    // Generous padding so KDE tails past the data extremes stay inside the
    // panel.
    let pad = if span > 0.0 {
        span * 0.25
    } else {
        lo.abs().max(1.0) * 0.1
    };
    (lo - pad, hi + pad)
}
