use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AnalysisConfig;

#[derive(Debug, Parser)]
#[command(name = "gem-compare", version, about = "Metabolic model comparison CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full analysis and write the report workbook.
    Run(RunArgs),
    /// Load and classify only; print per-category counts without writing
    /// any artifact.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Input workbook (.xlsx)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Sheet name inside the input workbook")]
    pub sheet: Option<String>,

    #[arg(long, help = "Output report workbook (.xlsx)")]
    pub out: Option<PathBuf>,

    #[arg(long, help = "Chart raster output (.png)")]
    pub chart: Option<PathBuf>,

    #[arg(long, help = "Chart vector output (.svg)")]
    pub chart_svg: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Also write the aggregate table as JSON")]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Open the chart in the system viewer")]
    pub display: bool,
}

impl RunArgs {
    pub fn into_config(self) -> AnalysisConfig {
        let mut config = AnalysisConfig::default();
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(sheet) = self.sheet {
            config.sheet_name = sheet;
        }
        if let Some(out) = self.out {
            config.output_path = out;
        }
        if let Some(chart) = self.chart {
            config.chart_png = chart;
        }
        if let Some(chart_svg) = self.chart_svg {
            config.chart_svg = chart_svg;
        }
        config.write_json = self.json;
        config.display = self.display;
        config
    }
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Input workbook (.xlsx)")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Sheet name inside the input workbook")]
    pub sheet: Option<String>,
}
