//! CSV spreadsheet reader.
use std::path::Path;

use csv::StringRecord;
use ndarray::Array2;

use crate::categories::CrimeCategory;
use crate::data_handling::CrimeTable;
use crate::error::PipelineError;

/// Optional column holding the region identifier used by the region
/// summary. Its absence degrades the summary, not the whole pipeline.
pub const REGION_COLUMN: &str = "state/ut";

/// Read a crime statistics CSV into a `CrimeTable`.
///
/// The header must contain every `CrimeCategory` column (matched
/// case-insensitively); the region column is picked up when present.
/// Empty or `na`/`nan` cells parse to `NaN`; any other non-numeric cell
/// is a load failure.
pub fn read_crime_csv<P: AsRef<Path>>(path: P) -> Result<CrimeTable, PipelineError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| PipelineError::Load(format!("{}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| PipelineError::Load(format!("{}: {}", path.display(), e)))?
        .clone();

    let mut category_indices = Vec::with_capacity(CrimeCategory::ALL.len());
    for category in CrimeCategory::ALL {
        let idx = find_column(&headers, category.column_name())
            .ok_or_else(|| PipelineError::MissingColumn(category.column_name().to_string()))?;
        category_indices.push(idx);
    }
    let region_idx = find_column(&headers, REGION_COLUMN);

    let mut counts = Vec::new();
    let mut regions = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| PipelineError::Load(format!("row {}: {}", row_idx + 1, e)))?;

        for &idx in &category_indices {
            let raw = record.get(idx).unwrap_or_default();
            counts.push(parse_count(raw, headers.get(idx).unwrap_or(""), row_idx)?);
        }

        if let Some(idx) = region_idx {
            regions.push(record.get(idx).unwrap_or_default().to_string());
        }
    }

    let n_samples = counts.len() / CrimeCategory::ALL.len();
    let counts = Array2::from_shape_vec((n_samples, CrimeCategory::ALL.len()), counts)
        .map_err(|e| PipelineError::Load(format!("failed to build feature matrix: {}", e)))?;

    log::debug!(
        "Parsed {} rows from {} (region column {})",
        n_samples,
        path.display(),
        if region_idx.is_some() { "present" } else { "absent" }
    );

    Ok(CrimeTable::new(
        counts,
        region_idx.map(|_| regions),
    ))
}

fn parse_count(value: &str, column: &str, row_idx: usize) -> Result<f32, PipelineError> {
    if value.is_empty() || value.eq_ignore_ascii_case("na") || value.eq_ignore_ascii_case("nan") {
        return Ok(f32::NAN);
    }
    value.parse::<f32>().map_err(|_| {
        PipelineError::Load(format!(
            "invalid value '{}' for column '{}' at row {}",
            value,
            column,
            row_idx + 1
        ))
    })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
}
