use std::path::PathBuf;

/// All run parameters in one place, passed into the pipeline entry point.
///
/// Defaults mirror the fixed paths the analysis has always used; the CLI can
/// override any of them.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub sheet_name: String,
    pub output_path: PathBuf,
    pub chart_png: PathBuf,
    pub chart_svg: PathBuf,
    pub write_json: bool,
    pub display: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("batch_analysis.xlsx"),
            sheet_name: "BIGG_model".to_string(),
            output_path: PathBuf::from("model_comparison_results.xlsx"),
            chart_png: PathBuf::from("model_comparison_0.2.png"),
            chart_svg: PathBuf::from("model_comparison_0.2.svg"),
            write_json: false,
            display: false,
        }
    }
}

impl AnalysisConfig {
    /// Path for the optional JSON export of the aggregate table.
    pub fn json_path(&self) -> PathBuf {
        self.output_path.with_extension("json")
    }
}
