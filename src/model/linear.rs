use serde::{Deserialize, Serialize};

use crate::cost::squared_error::SquaredErrorCost;
use crate::data::sample_set::SampleSet;

/// A univariate linear predictor `f(x) = w·x + b`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinearModel {
    /// Slope.
    pub w: f64,
    /// Intercept.
    pub b: f64,
}

impl LinearModel {
    pub fn new(w: f64, b: f64) -> LinearModel {
        LinearModel { w, b }
    }

    /// Model output for one input.
    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }

    /// Model output for every input, in order.
    pub fn predict_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Squared-error cost of this model over `samples`.
    pub fn cost(&self, samples: &SampleSet) -> f64 {
        SquaredErrorCost::cost(samples, self)
    }
}
