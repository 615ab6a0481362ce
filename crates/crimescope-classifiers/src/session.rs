//! The process-wide prediction session.
//!
//! A `Session` owns the loaded table, the per-category split/scaler
//! artifacts, and the per-category models, and enforces the
//! `Empty -> Loaded -> Trained` lifecycle: loading discards prior models,
//! training requires loaded data, predicting requires trained models.
//! Every operation either commits its full result or leaves the session
//! untouched.
use std::collections::BTreeMap;
use std::path::Path;

use ndarray::Axis;

use crate::categories::CrimeCategory;
use crate::config::{ModelConfig, SplitConfig};
use crate::data_handling::{build_split, CategorySplit, CrimeTable};
use crate::error::PipelineError;
use crate::io::read_crime_csv;
use crate::models::classifier_trait::BinaryClassifier;
use crate::models::factory::build_model;
use crate::preprocessing::StandardScaler;
use crate::summary::{region_summary, RegionSummary};

/// Lifecycle position of the session, derived from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loaded,
    Trained,
}

/// Split and scaler for one category, rebuilt on every load.
///
/// The scaler is fitted on this category's training partition only and is
/// never shared with another category.
pub struct CategoryArtifacts {
    pub split: CategorySplit,
    pub scaler: StandardScaler,
}

/// Outcome of predicting one category from the latest row.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub category: CrimeCategory,
    pub probability: f32,
    pub decision: i32,
}

impl PredictionResult {
    /// Short human-readable status line for the UI surface.
    pub fn status_line(&self) -> String {
        format!(
            "{} prediction: {} (probability {:.2})",
            self.category.label(),
            if self.decision == 1 { "Yes" } else { "No" },
            self.probability
        )
    }
}

pub struct Session {
    split_config: SplitConfig,
    table: Option<CrimeTable>,
    artifacts: BTreeMap<CrimeCategory, CategoryArtifacts>,
    models: BTreeMap<CrimeCategory, Box<dyn BinaryClassifier>>,
    last_predictions: Option<Vec<PredictionResult>>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_split_config(SplitConfig::default())
    }

    pub fn with_split_config(split_config: SplitConfig) -> Self {
        Session {
            split_config,
            table: None,
            artifacts: BTreeMap::new(),
            models: BTreeMap::new(),
            last_predictions: None,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.table.is_none() {
            SessionState::Empty
        } else if self.models.is_empty() {
            SessionState::Loaded
        } else {
            SessionState::Trained
        }
    }

    pub fn table(&self) -> Option<&CrimeTable> {
        self.table.as_ref()
    }

    /// Load a spreadsheet, replacing any previous table and discarding
    /// all prior splits, scalers, and models.
    ///
    /// Splits and scalers for every category are built here, so a
    /// successful load leaves the session one `train` call away from
    /// predicting. On failure nothing is replaced.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PipelineError> {
        let table = read_crime_csv(path)?;

        let mut artifacts = BTreeMap::new();
        for category in CrimeCategory::ALL {
            let split = build_split(&table, category, &self.split_config)?;
            if split.is_single_class() {
                log::warn!(
                    "label column for '{}' is single-class; its model will always predict that class",
                    category.column_name()
                );
            }
            let scaler = StandardScaler::fit(&split.x_train);
            artifacts.insert(category, CategoryArtifacts { split, scaler });
        }

        table.log_summary();

        self.table = Some(table);
        self.artifacts = artifacts;
        self.models.clear();
        self.last_predictions = None;
        Ok(())
    }

    /// Train one fresh model per category on its own scaled training
    /// split. Prior models are replaced wholesale; on failure the old
    /// model set is kept.
    pub fn train(&mut self, config: &ModelConfig) -> Result<(), PipelineError> {
        if self.table.is_none() {
            return Err(PipelineError::NotLoaded);
        }

        let mut models: BTreeMap<CrimeCategory, Box<dyn BinaryClassifier>> = BTreeMap::new();
        for (&category, artifacts) in &self.artifacts {
            let mut model = build_model(config.clone());

            let x_train = artifacts.scaler.transform(&artifacts.split.x_train);
            model.fit(&x_train, &artifacts.split.y_train);

            let x_test = artifacts.scaler.transform(&artifacts.split.x_test);
            let correct = model
                .predict(&x_test)
                .iter()
                .zip(artifacts.split.y_test.iter())
                .filter(|(predicted, actual)| predicted == actual)
                .count();
            log::info!(
                "Trained {} model for '{}': held-out accuracy {}/{}",
                model.name(),
                category.column_name(),
                correct,
                artifacts.split.y_test.len()
            );

            models.insert(category, model);
        }

        self.models = models;
        Ok(())
    }

    /// Predict one category's risk from the latest row of the table.
    pub fn predict(&self, category: CrimeCategory) -> Result<PredictionResult, PipelineError> {
        let table = self.table.as_ref().ok_or(PipelineError::NotLoaded)?;
        if self.models.is_empty() {
            return Err(PipelineError::NotTrained);
        }
        if !table.latest_row_usable() {
            return Err(PipelineError::NoData);
        }

        let artifacts = self.artifacts.get(&category).ok_or(PipelineError::NotLoaded)?;
        let model = self.models.get(&category).ok_or(PipelineError::NotTrained)?;

        let scaled = artifacts
            .scaler
            .transform_row(table.latest_row())
            .insert_axis(Axis(0));
        let probability = model.predict_proba(&scaled)[0];
        let decision = if probability >= 0.5 { 1 } else { 0 };

        Ok(PredictionResult {
            category,
            probability,
            decision,
        })
    }

    /// Predict every category from the same latest row, in the fixed
    /// category order, and cache the outputs for report rendering.
    pub fn predict_all(&mut self) -> Result<Vec<PredictionResult>, PipelineError> {
        let results = CrimeCategory::ALL
            .iter()
            .map(|&category| self.predict(category))
            .collect::<Result<Vec<_>, _>>()?;
        self.last_predictions = Some(results.clone());
        Ok(results)
    }

    /// Aggregate average-risk score per region from the raw counts, or
    /// `Unavailable` when the table has no region column.
    pub fn region_summary(&self) -> Result<RegionSummary, PipelineError> {
        let table = self.table.as_ref().ok_or(PipelineError::NotLoaded)?;
        Ok(region_summary(table))
    }

    /// Reset cached visualization outputs. The state machine is not
    /// affected: loaded data and trained models stay valid.
    pub fn clear(&mut self) -> &'static str {
        self.last_predictions = None;
        "Cleared all visualizations and result."
    }

    /// The outputs of the most recent `predict_all`, if any.
    pub fn last_predictions(&self) -> Option<&[PredictionResult]> {
        self.last_predictions.as_deref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
