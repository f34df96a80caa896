//! Output buffer sizing and slicing.
//!
//! The native calls write into caller-owned memory, so every output buffer is
//! allocated at its worst-case size before the call. After the call, a
//! [`SlicePlan`] names the populated regions. Both steps are keyed on the raw
//! selector values: an id unknown to these bindings still gets a buffer (the
//! widest one for the continuous spectrum) but no result regions.

use std::ops::Range;

use fnft_ffi::sys::*;
use fnft_ffi::{Error, Result};

use crate::result::keys;

fn scaled(what: &str, n: usize, factor: usize) -> Result<usize> {
    n.checked_mul(factor).ok_or_else(|| {
        Error::InvalidArgument(format!("{what} buffer of {factor} x {n} entries overflows usize"))
    })
}

/// Length of the nsev discrete-spectrum buffer for `k` bound states.
pub fn discrete_spectrum_len(discspec_type: FNFT_INT, k: usize) -> Result<usize> {
    if discspec_type == FNFT_NSEV_DSTYPE_BOTH {
        scaled("discrete spectrum", k, 2)
    } else {
        Ok(k)
    }
}

/// Length of the nsev continuous-spectrum buffer for `m` evaluation points.
pub fn continuous_spectrum_len(contspec_type: FNFT_INT, m: usize) -> Result<usize> {
    match contspec_type {
        FNFT_NSEV_CSTYPE_REFLECTION_COEFFICIENT => Ok(m),
        FNFT_NSEV_CSTYPE_AB => scaled("continuous spectrum", m, 2),
        _ => scaled("continuous spectrum", m, 3),
    }
}

/// Buffer sizes for one `fnft_nsev` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NsevBufferSizes {
    pub bound_states: usize,
    pub discrete_spectrum: usize,
    pub continuous_spectrum: usize,
}

impl NsevBufferSizes {
    pub fn new(opts: &fnft_nsev_opts_t, m: usize, k: usize) -> Result<Self> {
        Ok(Self {
            bound_states: k,
            discrete_spectrum: discrete_spectrum_len(opts.discspec_type, k)?,
            continuous_spectrum: continuous_spectrum_len(opts.contspec_type, m)?,
        })
    }
}

/// Buffer capacities for one `fnft_nsep` call on `d` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NsepBufferSizes {
    pub main_spectrum: usize,
    pub aux_spectrum: usize,
}

impl NsepBufferSizes {
    pub fn new(d: usize) -> Result<Self> {
        let capacity = scaled("periodic spectrum", d, 2)?;
        Ok(Self {
            main_spectrum: capacity,
            aux_spectrum: capacity,
        })
    }
}

/// Count reported through an in/out pointer, limited to the buffer capacity.
pub fn clamp_count(reported: usize, capacity: usize) -> usize {
    reported.min(capacity)
}

/// Named, non-overlapping regions of one output buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlicePlan {
    regions: Vec<(&'static str, Range<usize>)>,
}

impl SlicePlan {
    /// Plan for the nsev discrete spectrum holding `found` bound states.
    pub fn discrete_spectrum(discspec_type: FNFT_INT, found: usize) -> Self {
        let regions = match discspec_type {
            FNFT_NSEV_DSTYPE_NORMING_CONSTANTS => vec![(keys::D_NORM, 0..found)],
            FNFT_NSEV_DSTYPE_RESIDUES => vec![(keys::D_RES, 0..found)],
            FNFT_NSEV_DSTYPE_BOTH => {
                vec![(keys::D_NORM, 0..found), (keys::D_RES, found..found.saturating_mul(2))]
            }
            _ => Vec::new(),
        };
        Self { regions }
    }

    /// Plan for the nsev continuous spectrum of `m` points.
    pub fn continuous_spectrum(contspec_type: FNFT_INT, m: usize) -> Self {
        let regions = match contspec_type {
            FNFT_NSEV_CSTYPE_REFLECTION_COEFFICIENT => vec![(keys::C_REF, 0..m)],
            FNFT_NSEV_CSTYPE_AB => vec![(keys::C_A, 0..m), (keys::C_B, m..m.saturating_mul(2))],
            FNFT_NSEV_CSTYPE_BOTH => vec![
                (keys::C_REF, 0..m),
                (keys::C_A, m..m.saturating_mul(2)),
                (keys::C_B, m.saturating_mul(2)..m.saturating_mul(3)),
            ],
            _ => Vec::new(),
        };
        Self { regions }
    }

    pub fn regions(&self) -> &[(&'static str, Range<usize>)] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Copy each region out of `buf`. Regions that do not fit are skipped.
    pub fn apply<T: Clone>(&self, buf: &[T]) -> Vec<(&'static str, Vec<T>)> {
        self.regions
            .iter()
            .filter_map(|(key, range)| buf.get(range.clone()).map(|s| (*key, s.to_vec())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(discspec_type: FNFT_INT, contspec_type: FNFT_INT) -> fnft_nsev_opts_t {
        fnft_nsev_opts_t {
            bound_state_filtering: 2,
            bound_state_localization: 2,
            niter: 10,
            discspec_type,
            contspec_type,
            normalization_flag: 1,
            discretization: 3,
        }
    }

    #[test]
    fn test_nsev_sizes_table() {
        let cases = [
            // (dst, cst, disc, cont)
            (0, 0, 7, 11),
            (1, 0, 7, 11),
            (2, 0, 14, 11),
            (0, 1, 7, 22),
            (0, 2, 7, 33),
            (2, 2, 14, 33),
        ];
        for (dst, cst, disc, cont) in cases {
            let sizes = NsevBufferSizes::new(&opts(dst, cst), 11, 7).unwrap();
            assert_eq!(sizes.bound_states, 7);
            assert_eq!(sizes.discrete_spectrum, disc, "dst={dst}");
            assert_eq!(sizes.continuous_spectrum, cont, "cst={cst}");
        }
    }

    #[test]
    fn test_sizes_are_deterministic() {
        let o = opts(2, 1);
        assert_eq!(
            NsevBufferSizes::new(&o, 50, 3).unwrap(),
            NsevBufferSizes::new(&o, 50, 3).unwrap()
        );
    }

    #[test]
    fn test_unknown_selectors_fall_back() {
        assert_eq!(discrete_spectrum_len(9, 4), Ok(4));
        assert_eq!(continuous_spectrum_len(9, 4), Ok(12));
        assert!(SlicePlan::discrete_spectrum(9, 4).is_empty());
        assert!(SlicePlan::continuous_spectrum(-1, 4).is_empty());
    }

    #[test]
    fn test_discrete_plan_both_splits_at_found() {
        let plan = SlicePlan::discrete_spectrum(FNFT_NSEV_DSTYPE_BOTH, 3);
        assert_eq!(plan.regions(), &[(keys::D_NORM, 0..3), (keys::D_RES, 3..6)]);

        // capacity for 5 bound states, 3 found
        let buf: Vec<i32> = (0..10).collect();
        let parts = plan.apply(&buf);
        assert_eq!(parts[0], (keys::D_NORM, vec![0, 1, 2]));
        assert_eq!(parts[1], (keys::D_RES, vec![3, 4, 5]));
        let joined: Vec<i32> = parts.iter().flat_map(|(_, v)| v.clone()).collect();
        assert_eq!(joined, &buf[..6]);
    }

    #[test]
    fn test_continuous_plan_ab() {
        let plan = SlicePlan::continuous_spectrum(FNFT_NSEV_CSTYPE_AB, 50);
        assert_eq!(plan.regions(), &[(keys::C_A, 0..50), (keys::C_B, 50..100)]);
    }

    #[test]
    fn test_apply_skips_regions_past_buffer() {
        let plan = SlicePlan::continuous_spectrum(FNFT_NSEV_CSTYPE_BOTH, 2);
        let parts = plan.apply(&[1, 2, 3, 4]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], (keys::C_A, vec![3, 4]));
    }

    #[test]
    fn test_nsep_capacity_and_clamp() {
        let sizes = NsepBufferSizes::new(8).unwrap();
        assert_eq!(sizes.main_spectrum, 16);
        assert_eq!(sizes.aux_spectrum, 16);
        assert_eq!(clamp_count(3, 16), 3);
        assert_eq!(clamp_count(40, 16), 16);
    }

    #[test]
    fn test_oversized_requests_are_rejected() {
        let huge = usize::MAX / 2 + 1;
        assert!(matches!(
            discrete_spectrum_len(FNFT_NSEV_DSTYPE_BOTH, huge),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(discrete_spectrum_len(FNFT_NSEV_DSTYPE_RESIDUES, huge), Ok(huge));
        assert!(continuous_spectrum_len(FNFT_NSEV_CSTYPE_AB, huge).is_err());
        assert!(continuous_spectrum_len(FNFT_NSEV_CSTYPE_BOTH, usize::MAX / 3 + 1).is_err());
        assert!(NsevBufferSizes::new(&opts(0, 2), usize::MAX, 1).is_err());
        assert!(NsepBufferSizes::new(huge).is_err());
    }

    #[test]
    fn test_plans_for_huge_counts_do_not_panic() {
        let plan = SlicePlan::continuous_spectrum(FNFT_NSEV_CSTYPE_BOTH, usize::MAX);
        assert_eq!(plan.regions().len(), 3);
        assert!(plan.apply(&[1, 2, 3]).is_empty());
    }
}
