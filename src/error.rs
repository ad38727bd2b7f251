use std::path::PathBuf;

use thiserror::Error;

/// Failure taxonomy for the analysis pipeline.
///
/// Nothing below the top level handles these; every stage propagates them
/// unmodified through `anyhow::Result` and `main` maps any failure to a
/// user-facing message plus a troubleshooting checklist.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("cannot read input workbook {path}: {reason}")]
    FileAccess { path: PathBuf, reason: String },

    #[error("sheet '{0}' not found in input workbook")]
    SheetMissing(String),

    #[error("required column '{0}' not found in sheet header")]
    ColumnMissing(String),

    #[error("chart image not found at {0} (render step must run before the report)")]
    ChartMissing(PathBuf),
}
