use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Image, Workbook, Worksheet};
use tracing::info;

use crate::aggregate::AggregateTable;
use crate::error::AnalysisError;
use crate::model::Dataset;
use crate::schema::{Metric, IDENTIFIER_COLUMN};

pub const DATA_SHEET: &str = "Raw Data";
pub const STATS_SHEET: &str = "Statistics";
pub const CHART_SHEET: &str = "Visualization";

const CATEGORY_COLUMN: &str = "model_type";
const WIDTH_PADDING: f64 = 2.0;
const CHART_COLUMN_WIDTH: f64 = 50.0;

/// Writes the three-sheet report: filtered data, aggregate statistics and
/// the embedded chart image. The chart PNG must already exist on disk.
pub fn write_report(
    path: &Path,
    dataset: &Dataset,
    table: &AggregateTable,
    chart_png: &Path,
) -> Result<()> {
    if !chart_png.exists() {
        return Err(AnalysisError::ChartMissing(chart_png.to_path_buf()).into());
    }

    let mut workbook = Workbook::new();

    write_data_sheet(workbook.add_worksheet(), dataset)?;
    write_stats_sheet(workbook.add_worksheet(), table)?;
    write_chart_sheet(workbook.add_worksheet(), chart_png)?;

    workbook
        .save(path)
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    info!(report = %path.display(), "report_written");
    Ok(())
}

fn write_data_sheet(sheet: &mut Worksheet, dataset: &Dataset) -> Result<()> {
    sheet.set_name(DATA_SHEET)?;

    let mut widths: Vec<usize> = Vec::new();
    let mut header: Vec<String> = vec![IDENTIFIER_COLUMN.to_string()];
    header.extend(Metric::ALL.iter().map(|m| m.column().to_string()));
    header.push(CATEGORY_COLUMN.to_string());

    for (col, name) in header.iter().enumerate() {
        sheet.write_string(0, col as u16, name)?;
        track_width(&mut widths, col, name.len());
    }

    for (i, record) in dataset.records.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &record.identifier)?;
        track_width(&mut widths, 0, record.identifier.len());
        for metric in Metric::ALL {
            let col = (metric.index() + 1) as u16;
            if let Some(value) = record.metric(metric) {
                sheet.write_number(row, col, value)?;
                track_width(&mut widths, col as usize, number_width(value));
            }
        }
        let cat_col = (Metric::ALL.len() + 1) as u16;
        sheet.write_string(row, cat_col, record.category.as_str())?;
        track_width(&mut widths, cat_col as usize, record.category.as_str().len());
    }

    apply_widths(sheet, &widths)?;
    Ok(())
}

fn write_stats_sheet(sheet: &mut Worksheet, table: &AggregateTable) -> Result<()> {
    sheet.set_name(STATS_SHEET)?;

    let mut widths: Vec<usize> = Vec::new();
    sheet.write_string(0, 0, CATEGORY_COLUMN)?;
    track_width(&mut widths, 0, CATEGORY_COLUMN.len());

    let mut col = 1u16;
    for metric in Metric::ALL {
        for suffix in ["mean", "median"] {
            let name = format!("{}_{}", metric.column(), suffix);
            sheet.write_string(0, col, &name)?;
            track_width(&mut widths, col as usize, name.len());
            col += 1;
        }
    }

    for (i, agg_row) in table.rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let label = agg_row.category.as_str();
        sheet.write_string(row, 0, label)?;
        track_width(&mut widths, 0, label.len());

        let mut col = 1u16;
        for metric in Metric::ALL {
            let stats = agg_row.metric_stats(metric);
            for value in [stats.mean, stats.median] {
                if let Some(v) = value {
                    sheet.write_number(row, col, v)?;
                    track_width(&mut widths, col as usize, number_width(v));
                }
                col += 1;
            }
        }
    }

    apply_widths(sheet, &widths)?;
    Ok(())
}

fn write_chart_sheet(sheet: &mut Worksheet, chart_png: &Path) -> Result<()> {
    sheet.set_name(CHART_SHEET)?;
    let image = Image::new(chart_png)
        .with_context(|| format!("failed to load chart image {}", chart_png.display()))?;
    sheet.insert_image(0, 0, &image)?;
    sheet.set_column_width(0, CHART_COLUMN_WIDTH)?;
    Ok(())
}

fn track_width(widths: &mut Vec<usize>, col: usize, len: usize) {
    if widths.len() <= col {
        widths.resize(col + 1, 0);
    }
    if widths[col] < len {
        widths[col] = len;
    }
}

/// Character-count heuristic: widest cell content plus fixed padding.
fn apply_widths(sheet: &mut Worksheet, widths: &[usize]) -> Result<()> {
    for (col, max_len) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *max_len as f64 + WIDTH_PADDING)?;
    }
    Ok(())
}

fn number_width(value: f64) -> usize {
    format!("{value}").len()
}
