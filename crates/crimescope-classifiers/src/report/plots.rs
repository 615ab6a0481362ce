use plotly::color::Rgb;
use plotly::common::Marker;
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot};

use crate::session::PredictionResult;
use crate::summary::RegionRisk;

/// Shade from light to dark red proportional to a risk value in [0, 1].
fn risk_shade(value: f64) -> Rgb {
    let t = value.clamp(0.0, 1.0);
    let blend = |low: f64, high: f64| (low + (high - low) * t).round() as u8;
    Rgb::new(blend(254.0, 165.0), blend(224.0, 15.0), blend(210.0, 21.0))
}

/// Bar chart of per-category probabilities for the latest row, one bar
/// per category in the fixed order, value labels above the bars.
pub fn plot_probability_bars(predictions: &[PredictionResult]) -> Plot {
    let labels: Vec<String> = predictions
        .iter()
        .map(|p| p.category.label().to_string())
        .collect();
    let values: Vec<f64> = predictions.iter().map(|p| p.probability as f64).collect();
    let text: Vec<String> = values.iter().map(|v| format!("{:.2}", v)).collect();
    let colors: Vec<Rgb> = values.iter().map(|&v| risk_shade(v)).collect();

    let trace = Bar::new(labels, values)
        .marker(Marker::new().color_array(colors))
        .text_array(text);

    let layout = Layout::new()
        .title("Crime Prediction Probabilities")
        .y_axis(Axis::new().title("Probability"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}

/// Bar chart of average risk per region, shaded relative to the highest
/// region in the table.
pub fn plot_region_risk(risks: &[RegionRisk]) -> Plot {
    let regions: Vec<String> = risks.iter().map(|r| r.region.clone()).collect();
    let values: Vec<f64> = risks.iter().map(|r| r.average_risk).collect();

    let max = values.iter().cloned().fold(f64::NAN, f64::max);
    let colors: Vec<Rgb> = values
        .iter()
        .map(|&v| {
            let scaled = if max > 0.0 { v / max } else { 0.0 };
            risk_shade(scaled)
        })
        .collect();

    let trace = Bar::new(regions, values).marker(Marker::new().color_array(colors));

    let layout = Layout::new()
        .title("Average Crime Risk by State")
        .y_axis(Axis::new().title("Average crime risk"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot
}
