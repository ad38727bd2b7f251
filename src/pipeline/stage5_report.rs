use anyhow::{anyhow, Result};
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, report};
use crate::pipeline::Stage;

pub struct Stage5Report;

impl Stage5Report {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5Report {
    fn name(&self) -> &'static str {
        "stage5_report"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = ctx
            .aggregate
            .as_ref()
            .ok_or_else(|| anyhow!("aggregate table missing before report"))?;

        report::write_report(
            &ctx.config.output_path,
            &ctx.dataset,
            table,
            &ctx.config.chart_png,
        )?;
        ctx.report_written = true;

        if ctx.config.write_json {
            let json_path = ctx.config.json_path();
            json_writer::write_json(&json_path, table)?;
            info!(json = %json_path.display(), "json_summary_written");
        }
        Ok(())
    }
}
