use std::error::Error;
use std::fmt;

/// Typed failures surfaced by the prediction pipeline.
///
/// Every variant is recoverable at the user-action boundary: a failing
/// load, train, or predict reports its message and leaves the session in
/// its last valid state.
#[derive(Debug)]
pub enum PipelineError {
    /// The input file could not be read or parsed.
    Load(String),
    /// A required column is absent from the spreadsheet header.
    MissingColumn(String),
    /// Too few rows to build a train/test partition.
    InsufficientData { rows: usize },
    /// Train or predict was requested before any data was loaded.
    NotLoaded,
    /// Predict was requested before models were trained for the current data.
    NotTrained,
    /// The latest row carries no usable values for inference.
    NoData,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineError::Load(msg) => write!(f, "Failed to load spreadsheet: {}", msg),
            PipelineError::MissingColumn(name) => {
                write!(f, "Required column '{}' not found in input", name)
            }
            PipelineError::InsufficientData { rows } => write!(
                f,
                "Need at least 2 rows to build a train/test split, got {}",
                rows
            ),
            PipelineError::NotLoaded => write!(f, "No data loaded; upload a spreadsheet first"),
            PipelineError::NotTrained => {
                write!(f, "Models have not been trained since the last load")
            }
            PipelineError::NoData => write!(f, "No valid data in the latest row for prediction"),
        }
    }
}

impl Error for PipelineError {}
