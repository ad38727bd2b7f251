use crate::aggregate::AggregateTable;
use crate::config::AnalysisConfig;
use crate::model::Dataset;

/// Mutable state threaded through the pipeline stages.
#[derive(Debug)]
pub struct Ctx {
    pub config: AnalysisConfig,
    pub dataset: Dataset,
    /// Rows classified `Other` and dropped by the filter.
    pub discarded: usize,
    pub aggregate: Option<AggregateTable>,
    pub chart_written: bool,
    pub report_written: bool,
    pub warnings: Vec<String>,
}

impl Ctx {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            dataset: Dataset::default(),
            discarded: 0,
            aggregate: None,
            chart_written: false,
            report_written: false,
            warnings: Vec::new(),
        }
    }
}
