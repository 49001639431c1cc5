use crate::error::QuakemapScaleError;
use std::fmt::Debug;

/// A threshold scale maps continuous values to discrete values based on explicit
/// threshold boundaries.
///
/// Bins are upper-inclusive: a value lands past a threshold only when it is
/// strictly greater than it, so a value equal to a threshold stays in the lower bin.
/// NaN maps to the default value.
#[derive(Debug, Clone)]
pub struct ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    thresholds: Vec<f64>,
    range: Vec<R>,
    default: R,
}

/// One bin of a threshold scale. `None` bounds are open-ended.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdBin<'a, R> {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub value: &'a R,
}

impl<R> ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(
        range: Vec<R>,
        thresholds: Vec<f64>,
        default: R,
    ) -> Result<Self, QuakemapScaleError> {
        // NaN thresholds fail this check as well
        if !thresholds.windows(2).all(|w| w[0] <= w[1]) || thresholds.iter().any(|t| t.is_nan())
        {
            return Err(QuakemapScaleError::ThresholdsNotAscending(thresholds));
        }

        if range.len() != thresholds.len() + 1 {
            return Err(QuakemapScaleError::ThresholdDomainMismatch {
                domain_len: thresholds.len(),
                range_len: range.len(),
            });
        }
        Ok(Self {
            thresholds,
            range,
            default,
        })
    }

    /// Returns a reference to the threshold values
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Returns a reference to the output range
    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// Returns the value used for NaN input
    pub fn default(&self) -> &R {
        &self.default
    }

    /// Index of the bin holding `x`, or `None` for NaN
    pub fn bin_index(&self, x: f64) -> Option<usize> {
        if x.is_nan() {
            None
        } else {
            Some(self.thresholds.partition_point(|t| *t < x))
        }
    }

    pub fn scale(&self, x: f64) -> &R {
        match self.bin_index(x) {
            Some(idx) => &self.range[idx],
            None => &self.default,
        }
    }

    pub fn scale_all(&self, values: &[f64]) -> Vec<R> {
        values.iter().map(|x| self.scale(*x).clone()).collect()
    }

    /// Bins in ascending order, paired with their range value
    pub fn bins(&self) -> impl Iterator<Item = ThresholdBin<'_, R>> + '_ {
        self.range.iter().enumerate().map(move |(i, value)| ThresholdBin {
            lower: i.checked_sub(1).map(|prev| self.thresholds[prev]),
            upper: self.thresholds.get(i).copied(),
            value,
        })
    }
}
