use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, ModelType};
use crate::models::classifier_trait::BinaryClassifier;

/// Logistic regression classifier fitted by batch gradient descent.
///
/// Weights are zero-initialized and the optimizer has no random state, so
/// refitting on the same data reproduces the same model exactly.
pub struct LogisticClassifier {
    weights: Option<Array1<f32>>,
    intercept: f32,
    params: ModelConfig,
}

impl LogisticClassifier {
    pub fn new(params: ModelConfig) -> Self {
        LogisticClassifier {
            weights: None,
            intercept: 0.0,
            params,
        }
    }

    fn sigmoid(z: f32) -> f32 {
        1.0 / (1.0 + (-z).exp())
    }
}

impl BinaryClassifier for LogisticClassifier {
    fn fit(&mut self, x: &Array2<f32>, y: &[i32]) {
        let (n_samples, n_features) = x.dim();
        assert!(n_samples > 0, "fit requires at least one sample");
        assert_eq!(n_samples, y.len(), "features and labels must align");

        let ModelType::Logistic {
            max_iter,
            tolerance,
        } = self.params.model_type;
        let learning_rate = self.params.learning_rate;

        let mut weights = Array1::<f32>::zeros(n_features);
        let mut intercept = 0.0f32;
        let n = n_samples as f32;

        let mut iterations = 0;
        for iter in 0..max_iter {
            let mut grad_w = Array1::<f32>::zeros(n_features);
            let mut grad_b = 0.0f32;

            for i in 0..n_samples {
                let row = x.row(i);
                let z = intercept + weights.dot(&row);
                let error = Self::sigmoid(z) - y[i] as f32;
                grad_b += error;
                grad_w.scaled_add(error, &row);
            }

            grad_b /= n;
            grad_w.mapv_inplace(|g| g / n);

            intercept -= learning_rate * grad_b;
            weights.scaled_add(-learning_rate, &grad_w);

            iterations = iter + 1;
            if grad_b.abs() < tolerance && grad_w.iter().all(|g| g.abs() < tolerance) {
                break;
            }
        }

        log::debug!(
            "logistic fit converged after {} of {} iterations ({} samples, {} features)",
            iterations,
            max_iter,
            n_samples,
            n_features
        );

        self.weights = Some(weights);
        self.intercept = intercept;
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Vec<f32> {
        let weights = self.weights.as_ref().expect("model used before fit");
        (0..x.nrows())
            .map(|i| Self::sigmoid(self.intercept + weights.dot(&x.row(i))))
            .collect()
    }

    fn name(&self) -> &str {
        "logistic"
    }
}
