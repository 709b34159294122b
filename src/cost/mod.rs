pub mod squared_error;
pub mod sweep;

pub use squared_error::{compute_cost, SquaredErrorCost};
pub use sweep::{best_point, cost_curve, cost_surface, CostPoint};
