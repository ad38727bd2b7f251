use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::AggregateTable;

/// Writes the aggregate table as pretty-printed JSON.
pub fn write_json(path: &Path, table: &AggregateTable) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, table)?;
    Ok(())
}
