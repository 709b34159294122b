use log::trace;

use crate::data::sample_set::{validate, SampleSet};
use crate::error::Result;
use crate::model::linear::LinearModel;

/// Halved mean squared error of a linear model:
///   J(w, b) = Σ (w·x[i] + b − y[i])² / (2m)
pub struct SquaredErrorCost;

impl SquaredErrorCost {
    /// Cost of `model` over `samples`. Infallible since a `SampleSet` is
    /// never empty and never ragged.
    pub fn cost(samples: &SampleSet, model: &LinearModel) -> f64 {
        let cost = half_mse(samples.x(), samples.y(), model);
        trace!("J(w={}, b={}) = {cost} over {} samples", model.w, model.b, samples.len());
        cost
    }

    /// Per-sample residuals `f(x[i]) − y[i]`, in sample order.
    pub fn residuals(samples: &SampleSet, model: &LinearModel) -> Vec<f64> {
        samples.iter()
            .map(|(x, y)| model.predict(x) - y)
            .collect()
    }
}

/// Cost of the model `(w, b)` over raw input and target slices.
///
/// Fails with `InvalidInput` when the slices differ in length or are empty.
pub fn compute_cost(x: &[f64], y: &[f64], w: f64, b: f64) -> Result<f64> {
    validate(x.len(), y.len())?;
    let model = LinearModel::new(w, b);
    let cost = half_mse(x, y, &model);
    trace!("J(w={w}, b={b}) = {cost} over {} samples", x.len());
    Ok(cost)
}

// Callers guarantee equal, non-zero lengths.
fn half_mse(x: &[f64], y: &[f64], model: &LinearModel) -> f64 {
    let m = x.len() as f64;
    x.iter().zip(y.iter())
        .map(|(&xi, &yi)| (model.predict(xi) - yi).powi(2))
        .sum::<f64>() / (2.0 * m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CostError, InvalidInput};

    #[test]
    fn perfect_fit_costs_nothing() {
        assert_eq!(compute_cost(&[1.0, 2.0], &[2.0, 4.0], 2.0, 0.0), Ok(0.0));
    }

    #[test]
    fn single_sample() {
        assert_eq!(compute_cost(&[1.0], &[5.0], 0.0, 0.0), Ok(12.5));
    }

    #[test]
    fn rejects_ragged_slices() {
        assert_eq!(
            compute_cost(&[1.0, 2.0, 3.0], &[1.0], 1.0, 0.0),
            Err(CostError::InvalidInput(InvalidInput::LengthMismatch { x_len: 3, y_len: 1 }))
        );
    }

    #[test]
    fn rejects_empty_slices() {
        assert_eq!(
            compute_cost(&[], &[], 1.0, 0.0),
            Err(CostError::InvalidInput(InvalidInput::Empty))
        );
    }

    #[test]
    fn sample_set_path_matches_slice_path() {
        let x = vec![1.0, 1.7, 2.0, 2.5, 3.0, 3.2];
        let y = vec![250.0, 300.0, 480.0, 430.0, 630.0, 730.0];
        let samples = SampleSet::new(x.clone(), y.clone()).unwrap();
        let model = LinearModel::new(209.0, 2.4);

        let a = SquaredErrorCost::cost(&samples, &model);
        let b = compute_cost(&x, &y, 209.0, 2.4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn residuals_are_prediction_minus_target() {
        let samples = SampleSet::from_pairs([(1.0, 3.0), (2.0, 4.0)]).unwrap();
        let r = SquaredErrorCost::residuals(&samples, &LinearModel::new(1.0, 1.0));
        assert_eq!(r, vec![-1.0, -1.0]);
    }
}
