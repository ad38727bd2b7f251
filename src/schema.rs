//! Canonical input schema.
//!
//! Every stage resolves column names through this module so a missing or
//! renamed column fails at load time, not deep inside aggregation.

use serde::{Deserialize, Serialize};

/// Column holding the model identifier used for classification.
pub const IDENTIFIER_COLUMN: &str = "fasta_name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Nadh,
    Atp,
    Biomass,
    Reactions,
    Metabolites,
    Genes,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Nadh,
        Metric::Atp,
        Metric::Biomass,
        Metric::Reactions,
        Metric::Metabolites,
        Metric::Genes,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            Metric::Nadh => "nadh",
            Metric::Atp => "atp",
            Metric::Biomass => "biomass",
            Metric::Reactions => "reactions",
            Metric::Metabolites => "metabolites",
            Metric::Genes => "genes",
        }
    }

    /// Y-axis label for the chart panel of this metric.
    pub fn axis_label(&self) -> &'static str {
        match self {
            Metric::Reactions => "Number of reactions",
            Metric::Metabolites => "Number of metabolites",
            Metric::Genes => "Number of genes",
            _ => "product rate",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "PEAR")]
    Pear,
    CarveMe,
    #[serde(rename = "ModelSEED")]
    ModelSeed,
    Published,
    Other,
}

impl Category {
    /// The four categories that survive filtering, in display order.
    pub const RECOGNIZED: [Category; 4] = [
        Category::Pear,
        Category::CarveMe,
        Category::ModelSeed,
        Category::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pear => "PEAR",
            Category::CarveMe => "CarveMe",
            Category::ModelSeed => "ModelSEED",
            Category::Published => "Published",
            Category::Other => "Other",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Other)
    }

    /// Fixed chart palette, one color per recognized category.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Category::Pear => (31, 119, 180),
            Category::CarveMe => (255, 127, 14),
            Category::ModelSeed => (44, 160, 44),
            Category::Published => (214, 39, 40),
            Category::Other => (127, 127, 127),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
