use anyhow::Result;
use tracing::info;

use crate::classify::classify;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Classify;

impl Stage2Classify {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Classify {
    fn name(&self) -> &'static str {
        "stage2_classify"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let before = ctx.dataset.len();
        for record in &mut ctx.dataset.records {
            record.category = classify(&record.identifier);
        }
        ctx.dataset
            .records
            .retain(|r| r.category.is_recognized());
        ctx.discarded = before - ctx.dataset.len();

        info!(
            kept = ctx.dataset.len(),
            discarded = ctx.discarded,
            "models_classified"
        );
        Ok(())
    }
}
