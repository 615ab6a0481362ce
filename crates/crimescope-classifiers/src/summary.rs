//! Aggregate risk-by-region summary, independent of the trained models.
use std::collections::BTreeMap;

use statrs::statistics::Statistics;

use crate::categories::CrimeCategory;
use crate::data_handling::CrimeTable;

/// Average risk score for one region: the mean, across all categories,
/// of that region's per-category mean raw counts.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRisk {
    pub region: String,
    pub average_risk: f64,
}

/// Region summary result; `Unavailable` when the loaded table has no
/// region column, so callers can degrade gracefully instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSummary {
    Available(Vec<RegionRisk>),
    Unavailable,
}

/// Compute the per-region average risk from raw (unscaled) counts.
///
/// `NaN` cells are skipped, matching how the averages behaved for sparse
/// spreadsheets in the source data. Regions are reported in name order.
pub fn region_summary(table: &CrimeTable) -> RegionSummary {
    let Some(regions) = table.regions() else {
        return RegionSummary::Unavailable;
    };

    let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row, region) in regions.iter().enumerate() {
        groups.entry(region.as_str()).or_default().push(row);
    }

    let risks = groups
        .into_iter()
        .map(|(region, rows)| {
            let category_means: Vec<f64> = CrimeCategory::ALL
                .iter()
                .map(|&category| {
                    let column = table.column(category);
                    rows.iter()
                        .map(|&row| column[row] as f64)
                        .filter(|v| v.is_finite())
                        .mean()
                })
                .collect();
            RegionRisk {
                region: region.to_string(),
                average_risk: category_means.mean(),
            }
        })
        .collect();

    RegionSummary::Available(risks)
}
