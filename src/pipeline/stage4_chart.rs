use anyhow::Result;
use tracing::warn;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::plot;
use crate::present::{NoopPresenter, Presenter, SystemViewer};

pub struct Stage4Chart;

impl Stage4Chart {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Chart {
    fn name(&self) -> &'static str {
        "stage4_chart"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        plot::render_chart(&ctx.dataset, &ctx.config.chart_png, &ctx.config.chart_svg)?;
        ctx.chart_written = true;

        let presenter: Box<dyn Presenter> = if ctx.config.display {
            Box::new(SystemViewer)
        } else {
            Box::new(NoopPresenter)
        };
        if let Err(err) = presenter.present(&ctx.config.chart_png) {
            warn!(error = %err, "chart display unavailable");
            ctx.warnings.push(format!("chart display unavailable: {err}"));
        }
        Ok(())
    }
}
