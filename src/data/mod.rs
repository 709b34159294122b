pub mod sample_set;

pub use sample_set::SampleSet;
