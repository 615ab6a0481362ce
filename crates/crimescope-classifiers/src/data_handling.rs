//! Data structures and helpers for the loaded crime statistics table.
//!
//! This module defines `CrimeTable` and `CategorySplit` and contains the
//! per-category label derivation and the seeded train/test partition used
//! by the session when a spreadsheet is loaded.
use ndarray::{Array2, ArrayView1, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::categories::CrimeCategory;
use crate::config::SplitConfig;
use crate::error::PipelineError;

/// The in-memory projection of a loaded spreadsheet.
///
/// `counts` holds the raw per-category counts, one column per entry of
/// `CrimeCategory::ALL` in that order. Missing cells are `NaN`. The table
/// is replaced wholesale on each load and never mutated downstream.
#[derive(Debug, Clone)]
pub struct CrimeTable {
    counts: Array2<f32>,
    regions: Option<Vec<String>>,
}

impl CrimeTable {
    pub fn new(counts: Array2<f32>, regions: Option<Vec<String>>) -> Self {
        assert_eq!(
            counts.ncols(),
            CrimeCategory::ALL.len(),
            "table must have one column per crime category"
        );
        if let Some(regions) = &regions {
            assert_eq!(
                regions.len(),
                counts.nrows(),
                "region column must align with table rows"
            );
        }
        CrimeTable { counts, regions }
    }

    pub fn nrows(&self) -> usize {
        self.counts.nrows()
    }

    /// The raw (unscaled) feature matrix shared by all categories.
    pub fn features(&self) -> &Array2<f32> {
        &self.counts
    }

    /// Raw counts for one category, in row order.
    pub fn column(&self, category: CrimeCategory) -> ArrayView1<f32> {
        self.counts.column(category.index())
    }

    /// Binary labels for one category: 1 where the raw count is strictly
    /// positive, 0 otherwise. A `NaN` count compares false and labels 0.
    pub fn labels(&self, category: CrimeCategory) -> Vec<i32> {
        self.column(category)
            .iter()
            .map(|&v| if v > 0.0 { 1 } else { 0 })
            .collect()
    }

    /// The last row of the table, used as the sole inference input.
    pub fn latest_row(&self) -> ArrayView1<f32> {
        self.counts.row(self.nrows() - 1)
    }

    /// Whether the latest row carries at least one usable category value.
    pub fn latest_row_usable(&self) -> bool {
        self.nrows() > 0 && self.latest_row().iter().any(|v| v.is_finite())
    }

    /// Region identifier per row, when the spreadsheet carried one.
    pub fn regions(&self) -> Option<&[String]> {
        self.regions.as_deref()
    }

    pub fn log_summary(&self) {
        log::info!(
            "Loaded {} rows across {} crime categories (region column {})",
            self.nrows(),
            CrimeCategory::ALL.len(),
            if self.regions.is_some() {
                "present"
            } else {
                "absent"
            }
        );
    }
}

/// Train/test partition of the shared feature matrix against one
/// category's label column.
#[derive(Debug, Clone)]
pub struct CategorySplit {
    pub x_train: Array2<f32>,
    pub x_test: Array2<f32>,
    pub y_train: Vec<i32>,
    pub y_test: Vec<i32>,
}

impl CategorySplit {
    /// True when every training label is the same class.
    ///
    /// Such a split still trains, but the fitted classifier is
    /// output-degenerate: it will always predict that class.
    pub fn is_single_class(&self) -> bool {
        match self.y_train.first() {
            Some(first) => self.y_train.iter().all(|y| y == first),
            None => true,
        }
    }
}

/// Partition the table's features and one category's labels into a
/// train/test split.
///
/// The shuffle is driven by `config.seed`, so the same table always yields
/// the same partition. The test side takes `ceil(n * test_fraction)` rows
/// and both sides keep at least one row.
pub fn build_split(
    table: &CrimeTable,
    category: CrimeCategory,
    config: &SplitConfig,
) -> Result<CategorySplit, PipelineError> {
    let n_samples = table.nrows();
    if n_samples < 2 {
        return Err(PipelineError::InsufficientData { rows: n_samples });
    }

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    indices.shuffle(&mut rng);

    let n_test = ((n_samples as f32) * config.test_fraction).ceil() as usize;
    let n_test = n_test.clamp(1, n_samples - 1);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let labels = table.labels(category);
    let x = table.features();

    Ok(CategorySplit {
        x_train: x.select(Axis(0), train_idx),
        x_test: x.select(Axis(0), test_idx),
        y_train: train_idx.iter().map(|&i| labels[i]).collect(),
        y_test: test_idx.iter().map(|&i| labels[i]).collect(),
    })
}
