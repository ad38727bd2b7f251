use std::path::Path;

use anyhow::Result;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use tracing::info;

use crate::error::AnalysisError;
use crate::model::{Dataset, Record};
use crate::schema::{Metric, IDENTIFIER_COLUMN};

/// Column indices of the canonical schema within one sheet.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub identifier: usize,
    pub metrics: [usize; Metric::ALL.len()],
}

/// Reads the named sheet into a `Dataset`, dropping rows where every
/// resolved cell is empty. Rows with partial missing data survive with
/// `None` metrics.
pub fn load_sheet(path: &Path, sheet_name: &str) -> Result<Dataset> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|err: calamine::XlsxError| AnalysisError::FileAccess {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
        return Err(AnalysisError::SheetMissing(sheet_name.to_string()).into());
    }
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|err| AnalysisError::FileAccess {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let schema = resolve_schema(&range)?;
    let mut records = Vec::new();
    let mut dropped_empty = 0usize;

    for row in range.rows().skip(1) {
        let identifier = cell_to_string(row.get(schema.identifier));
        let mut metrics = [None; Metric::ALL.len()];
        for (slot, col) in metrics.iter_mut().zip(schema.metrics) {
            *slot = cell_to_f64(row.get(col));
        }
        if identifier.is_empty() && metrics.iter().all(Option::is_none) {
            dropped_empty += 1;
            continue;
        }
        records.push(Record::new(identifier, metrics));
    }

    info!(
        rows = records.len(),
        dropped_empty,
        sheet = sheet_name,
        "sheet_loaded"
    );
    Ok(Dataset { records })
}

/// Resolves the identifier and metric columns against the header row,
/// failing fast if any canonical column is absent.
fn resolve_schema(range: &Range<Data>) -> Result<ResolvedSchema> {
    let header = range
        .rows()
        .next()
        .ok_or_else(|| AnalysisError::ColumnMissing(IDENTIFIER_COLUMN.to_string()))?;

    let find = |name: &str| -> Result<usize> {
        header
            .iter()
            .position(|cell| cell_to_string(Some(cell)) == name)
            .ok_or_else(|| AnalysisError::ColumnMissing(name.to_string()).into())
    };

    let identifier = find(IDENTIFIER_COLUMN)?;
    let mut metrics = [0usize; Metric::ALL.len()];
    for (slot, metric) in metrics.iter_mut().zip(Metric::ALL) {
        *slot = find(metric.column())?;
    }
    Ok(ResolvedSchema {
        identifier,
        metrics,
    })
}

/// String form of a cell. Missing cells coerce to the empty string so they
/// fail every classification rule instead of erroring.
fn cell_to_string(cell: Option<&Data>) -> String {
    match cell {
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                format!("{f}")
            }
        }
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn cell_to_f64(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
