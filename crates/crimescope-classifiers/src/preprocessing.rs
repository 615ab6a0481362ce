//! Feature standardization fitted on training data only.
//!
//! A `StandardScaler` is fitted once per category on that category's
//! training partition and then applied to the train set, the test set,
//! and any future single-row inference input. The test and inference
//! transforms always reuse the stored training statistics.
use ndarray::{Array1, Array2, ArrayView1};

/// Per-column mean/std standardization transform.
#[derive(Clone, Debug)]
pub struct StandardScaler {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl StandardScaler {
    /// Columns whose population stddev falls at or below this threshold
    /// are treated as constant and contribute 0.0 after scaling.
    pub const MIN_STD: f32 = 1e-6;

    /// Fit per-column statistics from a training matrix where rows are
    /// samples and columns are features.
    pub fn fit(x: &Array2<f32>) -> Self {
        let (nrows, ncols) = x.dim();
        assert!(nrows > 0 && ncols > 0, "fit requires a non-empty matrix");

        let mut mean = vec![0.0f32; ncols];
        for r in 0..nrows {
            for c in 0..ncols {
                mean[c] += x[(r, c)];
            }
        }
        let nrows_f = nrows as f32;
        for v in mean.iter_mut() {
            *v /= nrows_f;
        }

        let mut std = vec![0.0f32; ncols];
        for r in 0..nrows {
            for c in 0..ncols {
                let d = x[(r, c)] - mean[c];
                std[c] += d * d;
            }
        }
        for v in std.iter_mut() {
            *v = (*v / nrows_f).sqrt();
        }

        StandardScaler { mean, std }
    }

    #[inline]
    fn scale(&self, col: usize, value: f32) -> f32 {
        // Constant training columns carry no information; map them to 0.0
        // for any input instead of dividing by a vanishing stddev.
        if self.std[col] <= Self::MIN_STD {
            0.0
        } else {
            (value - self.mean[col]) / self.std[col]
        }
    }

    /// Transform all rows using the stored statistics.
    pub fn transform(&self, x: &Array2<f32>) -> Array2<f32> {
        let (nrows, ncols) = x.dim();
        assert_eq!(ncols, self.mean.len(), "column count mismatch");

        let mut out = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                out.push(self.scale(c, x[(r, c)]));
            }
        }
        Array2::from_shape_vec((nrows, ncols), out).expect("transform: shape mismatch")
    }

    /// Transform a single inference row using the stored statistics.
    pub fn transform_row(&self, row: ArrayView1<f32>) -> Array1<f32> {
        assert_eq!(row.len(), self.mean.len(), "column count mismatch");
        row.iter()
            .enumerate()
            .map(|(c, &v)| self.scale(c, v))
            .collect::<Array1<f32>>()
    }
}
