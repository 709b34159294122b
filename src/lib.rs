pub mod error;
pub mod math;
pub mod data;
pub mod model;
pub mod cost;

// Convenience re-exports
pub use error::{CostError, InvalidInput, Result};
pub use math::range::linspace;
pub use data::sample_set::SampleSet;
pub use model::linear::LinearModel;
pub use cost::squared_error::{compute_cost, SquaredErrorCost};
pub use cost::sweep::{best_point, cost_curve, cost_surface, CostPoint};
