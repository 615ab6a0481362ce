use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::session::PredictionResult;
use crate::summary::RegionSummary;

use super::plots::{plot_probability_bars, plot_region_risk};

const REPORT_CSS: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 64em; color: #2c3e50; }\n\
h1 { color: #c0392b; }\n\
p.meta { color: #7f8c8d; font-size: 0.9em; }\n\
p.placeholder { color: #c0392b; border: 1px solid #c0392b; padding: 1em; }\n\
table { border-collapse: collapse; }\n\
th, td { border: 1px solid #bdc3c7; padding: 0.3em 0.8em; text-align: left; }\n";

/// Render the prediction report as a standalone HTML page.
///
/// The page carries the two chart payloads: the per-category probability
/// comparison and the risk-by-region chart, the latter replaced by an
/// informational placeholder when the region column was absent.
pub fn render_report(
    predictions: &[PredictionResult],
    summary: &RegionSummary,
    status: &str,
) -> String {
    let probability_chart = plot_probability_bars(predictions).to_inline_html(Some("probability-chart"));

    let region_block: Markup = match summary {
        RegionSummary::Available(risks) => {
            let chart = plot_region_risk(risks).to_inline_html(Some("region-chart"));
            html! { div { (PreEscaped(chart)) } }
        }
        RegionSummary::Unavailable => html! {
            p class="placeholder" {
                "No 'state/ut' column found. Please check your input file."
            }
        },
    };

    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Crimescope prediction report" }
                script src="https://cdn.plot.ly/plotly-2.12.1.min.js" {}
                style { (PreEscaped(REPORT_CSS)) }
            }
            body {
                h1 { "Crimescope prediction report" }
                p class="meta" {
                    "Generated " (Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
                }
                p { (status) }
                h2 { "Prediction probabilities" }
                table {
                    tr { th { "Category" } th { "Probability" } th { "Predicted" } }
                    @for prediction in predictions {
                        tr {
                            td { (prediction.category.label()) }
                            td { (format!("{:.2}", prediction.probability)) }
                            td { (if prediction.decision == 1 { "Yes" } else { "No" }) }
                        }
                    }
                }
                div { (PreEscaped(probability_chart)) }
                h2 { "Average risk by region" }
                (region_block)
            }
        }
    };

    page.into_string()
}

/// Render the report and write it to `path`.
pub fn write_report<P: AsRef<Path>>(
    path: P,
    predictions: &[PredictionResult],
    summary: &RegionSummary,
    status: &str,
) -> Result<()> {
    let html = render_report(predictions, summary, status);
    std::fs::write(&path, html)
        .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
    log::info!("Report written to {}", path.as_ref().display());
    Ok(())
}
