//! Time support of a sampled signal.

use fnft_ffi::{Error, Result};

/// Where the samples of a signal live on the time axis.
///
/// The native calls only need the two boundary times `[T1, T2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support<'a> {
    /// Explicit sample positions; `T1`/`T2` are their minimum and maximum.
    Positions(&'a [f64]),
    /// Boundary times of uniformly spaced samples.
    Bounds(f64, f64),
}

impl Support<'_> {
    pub fn bounds(first: f64, last: f64) -> Self {
        Support::Bounds(first, last)
    }

    /// The `[T1, T2]` array passed to the native call.
    pub fn to_native(&self) -> Result<[f64; 2]> {
        match *self {
            Support::Bounds(t1, t2) => Ok([t1, t2]),
            Support::Positions(positions) => {
                if positions.is_empty() {
                    return Err(Error::InvalidArgument(
                        "time vector must not be empty".to_string(),
                    ));
                }
                let t1 = positions.iter().copied().fold(f64::INFINITY, f64::min);
                let t2 = positions.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                Ok([t1, t2])
            }
        }
    }
}

impl<'a> From<&'a [f64]> for Support<'a> {
    fn from(positions: &'a [f64]) -> Self {
        Support::Positions(positions)
    }
}

impl<'a> From<&'a Vec<f64>> for Support<'a> {
    fn from(positions: &'a Vec<f64>) -> Self {
        Support::Positions(positions)
    }
}

impl From<(f64, f64)> for Support<'_> {
    fn from((first, last): (f64, f64)) -> Self {
        Support::Bounds(first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_use_min_and_max() {
        let t = vec![0.5, -1.0, 2.0, 1.0];
        assert_eq!(Support::from(&t).to_native().unwrap(), [-1.0, 2.0]);
    }

    #[test]
    fn test_bounds_pass_through() {
        assert_eq!(Support::bounds(-3.0, 4.0).to_native().unwrap(), [-3.0, 4.0]);
        assert_eq!(Support::from((1.0, 0.0)).to_native().unwrap(), [1.0, 0.0]);
    }

    #[test]
    fn test_empty_positions_rejected() {
        let err = Support::Positions(&[]).to_native().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
