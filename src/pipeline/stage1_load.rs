use anyhow::Result;

use crate::ctx::Ctx;
use crate::io::loader;
use crate::pipeline::Stage;

pub struct Stage1Load;

impl Stage1Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Load {
    fn name(&self) -> &'static str {
        "stage1_load"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let dataset = loader::load_sheet(&ctx.config.input_path, &ctx.config.sheet_name)?;
        ctx.dataset = dataset;
        Ok(())
    }
}
