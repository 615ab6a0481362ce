//! The CLI run pipeline: load a spreadsheet, train the per-category
//! models, predict from the latest row, and write the HTML report.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crimescope_classifiers::categories::CrimeCategory;
use crimescope_classifiers::config::{ModelConfig, SplitConfig};
use crimescope_classifiers::report::write_report;
use crimescope_classifiers::session::{PredictionResult, Session};
use crimescope_classifiers::summary::RegionSummary;

/// Parameters for a prediction run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub model: ModelConfig,
    pub split: SplitConfig,
    pub report: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            split: SplitConfig::default(),
            report: true,
        }
    }
}

/// Load a run configuration from a JSON file.
pub fn load_run_config<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Reject paths that are not existing `.csv` files before the pipeline
/// touches them.
pub fn validate_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => {}
        _ => anyhow::bail!("File must have a .csv extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }

    Ok(())
}

/// Outputs of one prediction run.
#[derive(Debug)]
pub struct RunOutcome {
    pub predictions: Vec<PredictionResult>,
    pub summary: RegionSummary,
    /// The single category the user asked about, when one was given.
    pub focus: Option<PredictionResult>,
}

impl RunOutcome {
    /// Status line for the run: the focused category's result, or a
    /// one-line roll-up over all categories.
    pub fn status_line(&self) -> String {
        match &self.focus {
            Some(prediction) => prediction.status_line(),
            None => format!(
                "Predicted {} categories from the latest row",
                self.predictions.len()
            ),
        }
    }
}

/// Drive the session through load, train, and predict for one input file.
pub fn run_prediction(
    data: &Path,
    config: &RunConfig,
    category: Option<CrimeCategory>,
) -> Result<RunOutcome> {
    let mut session = Session::with_split_config(config.split);

    session
        .load(data)
        .with_context(|| format!("Loading {}", data.display()))?;
    println!("Data loaded successfully!");

    session.train(&config.model).context("Training failed")?;
    println!("Models trained successfully!");

    let predictions = session.predict_all().context("Prediction failed")?;
    let focus = category.and_then(|wanted| {
        predictions
            .iter()
            .find(|p| p.category == wanted)
            .cloned()
    });
    let summary = session.region_summary()?;

    Ok(RunOutcome {
        predictions,
        summary,
        focus,
    })
}

/// Write the HTML report for a finished run.
pub fn write_run_report(outcome: &RunOutcome, path: &Path) -> Result<()> {
    write_report(
        path,
        &outcome.predictions,
        &outcome.summary,
        &outcome.status_line(),
    )
}
