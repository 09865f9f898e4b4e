//! FILENAME: sales-engine/src/filter.rs
//! Filter Evaluator - Selects the subset of rows matching the active query.
//!
//! A selection is conjunctive across its two dimensions: a row must match
//! on year AND on region. An empty set on either dimension matches nothing
//! by design (it mirrors a multiselect widget with everything deselected),
//! and values absent from the dataset simply match nothing.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::model::{Dataset, TransactionRow, Year};

/// The active year/region query narrowing the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub years: FxHashSet<Year>,
    pub regions: FxHashSet<String>,
}

impl FilterSelection {
    pub fn new(
        years: impl IntoIterator<Item = Year>,
        regions: impl IntoIterator<Item = String>,
    ) -> Self {
        FilterSelection {
            years: years.into_iter().collect(),
            regions: regions.into_iter().collect(),
        }
    }

    /// A selection covering the full observed vocabulary of `dataset`.
    /// This is the default state of a fresh dashboard: everything selected.
    pub fn all_of(dataset: &Dataset) -> Self {
        FilterSelection {
            years: dataset.rows().iter().map(|r| r.year).collect(),
            regions: dataset.rows().iter().map(|r| r.region.clone()).collect(),
        }
    }

    pub fn matches(&self, row: &TransactionRow) -> bool {
        self.years.contains(&row.year) && self.regions.contains(row.region.as_str())
    }
}

/// Returns the stable sub-sequence of `dataset` matching `selection`.
///
/// Output preserves the relative order of the dataset; no row is duplicated
/// or omitted beyond the predicate. An empty result is valid output, not a
/// failure.
pub fn apply_filter(dataset: &Dataset, selection: &FilterSelection) -> Vec<TransactionRow> {
    dataset
        .rows()
        .iter()
        .filter(|row| selection.matches(row))
        .cloned()
        .collect()
}
