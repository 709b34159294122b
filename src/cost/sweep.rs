use serde::{Deserialize, Serialize};

use crate::cost::squared_error::SquaredErrorCost;
use crate::data::sample_set::SampleSet;
use crate::model::linear::LinearModel;

/// One evaluation of the cost at parameters `(w, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub w: f64,
    pub b: f64,
    pub cost: f64,
}

/// Cost along the slope axis with the intercept held at `b`.
/// One point per entry of `ws`, in the same order.
pub fn cost_curve(samples: &SampleSet, ws: &[f64], b: f64) -> Vec<CostPoint> {
    ws.iter()
        .map(|&w| CostPoint {
            w,
            b,
            cost: SquaredErrorCost::cost(samples, &LinearModel::new(w, b)),
        })
        .collect()
}

/// Cost over the `ws × bs` grid: one row per intercept, one column per slope.
pub fn cost_surface(samples: &SampleSet, ws: &[f64], bs: &[f64]) -> Vec<Vec<CostPoint>> {
    bs.iter()
        .map(|&b| cost_curve(samples, ws, b))
        .collect()
}

/// The lowest-cost point. Ties keep the earliest; a NaN cost only wins when
/// nothing else is available.
pub fn best_point<'a, I>(points: I) -> Option<CostPoint>
where
    I: IntoIterator<Item = &'a CostPoint>,
{
    points.into_iter().fold(None, |best: Option<CostPoint>, &p| match best {
        None => Some(p),
        Some(cur) if p.cost < cur.cost || (cur.cost.is_nan() && !p.cost.is_nan()) => Some(p),
        keep => keep,
    })
}
