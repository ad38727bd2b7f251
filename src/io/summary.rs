use anyhow::{anyhow, Result};

use crate::ctx::Ctx;
use crate::io::report::{CHART_SHEET, DATA_SHEET, STATS_SHEET};
use crate::schema::Category;

/// Human-readable success summary printed after a full run.
pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let table = ctx
        .aggregate
        .as_ref()
        .ok_or_else(|| anyhow!("aggregate table missing"))?;

    let mut out = String::new();
    out.push_str(&format!("gem-compare v{}\n", version));
    out.push_str(&format!(
        "Analysis complete. Results saved to: {}\n",
        ctx.config.output_path.display()
    ));
    out.push_str(&format!(
        "Models: {} kept, {} discarded as Other\n",
        ctx.dataset.len(),
        ctx.discarded
    ));
    for category in Category::RECOGNIZED {
        let count = ctx.dataset.category_count(category);
        if count > 0 {
            out.push_str(&format!("  {}: {}\n", category, count));
        }
    }
    out.push_str(&format!(
        "Summary rows: {} categories\n",
        table.rows.len()
    ));
    out.push_str("Sheets:\n");
    out.push_str(&format!("  1. {} - filtered model data\n", DATA_SHEET));
    out.push_str(&format!("  2. {} - per-category mean/median\n", STATS_SHEET));
    out.push_str(&format!("  3. {} - comparison chart\n", CHART_SHEET));

    Ok(out)
}
