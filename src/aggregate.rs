use serde::Serialize;

use crate::model::Dataset;
use crate::schema::{Category, Metric};
use crate::stats;

/// Mean/median pair for one metric within one category.
///
/// `None` when the group has no present values for the metric.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateRow {
    pub category: Category,
    pub count: usize,
    pub stats: [MetricStats; Metric::ALL.len()],
}

impl AggregateRow {
    pub fn metric_stats(&self, metric: Metric) -> MetricStats {
        self.stats[metric.index()]
    }
}

/// Per-category summary over all metrics. Categories with zero surviving
/// records are absent rather than synthesized as empty rows.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateTable {
    pub rows: Vec<AggregateRow>,
}

pub fn aggregate(dataset: &Dataset) -> AggregateTable {
    let mut rows = Vec::new();
    for category in Category::RECOGNIZED {
        let count = dataset.category_count(category);
        if count == 0 {
            continue;
        }
        let mut row_stats = [MetricStats {
            mean: None,
            median: None,
        }; Metric::ALL.len()];
        for metric in Metric::ALL {
            let mut values = dataset.metric_values(category, metric);
            if values.is_empty() {
                continue;
            }
            let mean = stats::mean(&values);
            let median = stats::median(&mut values);
            row_stats[metric.index()] = MetricStats {
                mean: Some(mean),
                median: Some(median),
            };
        }
        rows.push(AggregateRow {
            category,
            count,
            stats: row_stats,
        });
    }
    AggregateTable { rows }
}
