use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// Wire shape of a `SampleSet`; deserialization is routed through
/// `SampleSet::new` so a malformed payload never produces a value.
#[derive(Deserialize)]
struct RawSampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// An immutable dataset of paired `(x, y)` samples.
///
/// The two sequences always have the same length `m` and `m >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSampleSet")]
pub struct SampleSet {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSet {
    /// Builds a sample set from separate input and target sequences.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<SampleSet> {
        validate(x.len(), y.len())?;
        Ok(SampleSet { x, y })
    }

    /// Builds a sample set from `(x, y)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<SampleSet>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        SampleSet::new(x, y)
    }

    /// Number of samples, `m`. Never zero.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The `i`-th sample, if in range.
    pub fn get(&self, i: usize) -> Option<(f64, f64)> {
        Some((*self.x.get(i)?, *self.y.get(i)?))
    }

    /// Iterates samples in order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl TryFrom<RawSampleSet> for SampleSet {
    type Error = crate::error::CostError;

    fn try_from(raw: RawSampleSet) -> Result<SampleSet> {
        SampleSet::new(raw.x, raw.y)
    }
}

/// Checks the sample-set invariant on a pair of sequence lengths.
pub(crate) fn validate(x_len: usize, y_len: usize) -> Result<()> {
    if x_len != y_len {
        debug!("rejecting samples: x has {x_len} values, y has {y_len}");
        return Err(InvalidInput::LengthMismatch { x_len, y_len }.into());
    }
    if x_len == 0 {
        debug!("rejecting samples: empty dataset");
        return Err(InvalidInput::Empty.into());
    }
    Ok(())
}
