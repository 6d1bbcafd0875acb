//! Configuration for metric computation.

use serde::{Deserialize, Serialize};

/// Which formula set to evaluate.
///
/// Only the cone and the pyramid differ between the two sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormulaSet {
    /// Textbook geometry.
    #[default]
    Standard,
    /// Compatibility formulas: the cone's area and volume are
    /// swapped, and the pyramid base is built from equilateral triangles.
    Legacy,
}

/// Settings that change what `compute_metrics_with` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub formulas: FormulaSet,
}

impl ModelConfig {
    pub fn standard() -> Self {
        Self {
            formulas: FormulaSet::Standard,
        }
    }

    pub fn legacy() -> Self {
        Self {
            formulas: FormulaSet::Legacy,
        }
    }
}
