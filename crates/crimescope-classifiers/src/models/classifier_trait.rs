use ndarray::Array2;

/// Contract for the per-category binary classifiers.
///
/// Implementations live next to the model code in this module; the
/// session only ever sees boxed trait objects built by the factory.
pub trait BinaryClassifier {
    /// Fit the model on scaled features. `y` uses 0/1 labels.
    fn fit(&mut self, x: &Array2<f32>, y: &[i32]);

    /// Probability of the positive class for each row, in [0, 1].
    fn predict_proba(&self, x: &Array2<f32>) -> Vec<f32>;

    /// Hard 0/1 decisions, 1 iff the probability reaches 0.5.
    fn predict(&self, x: &Array2<f32>) -> Vec<i32> {
        self.predict_proba(x)
            .iter()
            .map(|&p| if p >= 0.5 { 1 } else { 0 })
            .collect()
    }

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
