//! Validated feature counts for caller-supplied input.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A non-negative, whole number of features to generate.
///
/// Generator methods take a plain `usize`; this type converts untrusted signed,
/// floating point or textual input and rejects anything that is not a whole
/// number `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FeatureCount(usize);

impl FeatureCount {
    pub const fn new(count: usize) -> Self {
        Self(count)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for FeatureCount {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<FeatureCount> for usize {
    fn from(value: FeatureCount) -> Self {
        value.0
    }
}

impl TryFrom<i64> for FeatureCount {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidCount(format!("{value} is negative")))
    }
}

impl TryFrom<f64> for FeatureCount {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidCount(format!("{value} is not finite")));
        }
        if value < 0.0 {
            return Err(Error::InvalidCount(format!("{value} is negative")));
        }
        if value.fract() != 0.0 {
            return Err(Error::InvalidCount(format!("{value} is not a whole number")));
        }
        if value > usize::MAX as f64 {
            return Err(Error::InvalidCount(format!("{value} is too large")));
        }
        Ok(Self(value as usize))
    }
}

impl FromStr for FeatureCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(count) = s.parse::<i64>() {
            return count.try_into();
        }
        s.parse::<f64>()
            .map_err(|_| Error::InvalidCount(format!("'{s}' is not a number")))?
            .try_into()
    }
}

impl fmt::Display for FeatureCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
