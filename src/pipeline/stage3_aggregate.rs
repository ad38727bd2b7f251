use anyhow::Result;
use tracing::info;

use crate::aggregate;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage3Aggregate;

impl Stage3Aggregate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Aggregate {
    fn name(&self) -> &'static str {
        "stage3_aggregate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = aggregate::aggregate(&ctx.dataset);
        info!(categories = table.rows.len(), "aggregate_ready");
        ctx.aggregate = Some(table);
        Ok(())
    }
}
