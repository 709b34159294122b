pub mod linear;

pub use linear::LinearModel;
