use crate::schema::{Category, Metric};

/// One row of the input sheet plus its derived category.
#[derive(Debug, Clone)]
pub struct Record {
    pub identifier: String,
    /// Indexed by `Metric::index()`; `None` where the cell was empty or
    /// non-numeric.
    pub metrics: [Option<f64>; Metric::ALL.len()],
    pub category: Category,
}

impl Record {
    pub fn new(identifier: String, metrics: [Option<f64>; Metric::ALL.len()]) -> Self {
        Self {
            identifier,
            metrics,
            category: Category::Other,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.metrics[metric.index()]
    }
}

/// The filtered collection of records all downstream stages work from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present (non-missing) values of `metric` for records in `category`.
    pub fn metric_values(&self, category: Category, metric: Metric) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .filter_map(|r| r.metric(metric))
            .filter(|v| v.is_finite())
            .collect()
    }

    pub fn category_count(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .count()
    }
}
