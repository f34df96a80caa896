#![allow(non_camel_case_types)]
//! Options records and enumerated selectors of the FNFT C API.
//!
//! Field order and widths follow `fnft_kdvv.h`, `fnft_nsep.h` and
//! `fnft_nsev.h`. C enums are `int` sized, so every selector is stored as
//! [`FNFT_INT`]. Values are never validated here; the library rejects invalid
//! ones through its return code.

use super::types::*;

// NSE discretizations (fnft_nse_discretization_t)
pub const FNFT_NSE_DISCRETIZATION_2SPLIT2_MODAL: FNFT_INT = 0;
pub const FNFT_NSE_DISCRETIZATION_2SPLIT2A: FNFT_INT = 1;
pub const FNFT_NSE_DISCRETIZATION_2SPLIT4A: FNFT_INT = 2;
pub const FNFT_NSE_DISCRETIZATION_2SPLIT4B: FNFT_INT = 3;
pub const FNFT_NSE_DISCRETIZATION_BO: FNFT_INT = 4;

// nsev bound state filtering (fnft_nsev_bsfilt_t)
pub const FNFT_NSEV_BSFILT_NONE: FNFT_INT = 0;
pub const FNFT_NSEV_BSFILT_BASIC: FNFT_INT = 1;
pub const FNFT_NSEV_BSFILT_FULL: FNFT_INT = 2;

// nsev bound state localization (fnft_nsev_bsloc_t)
pub const FNFT_NSEV_BSLOC_FAST_EIGENVALUE: FNFT_INT = 0;
pub const FNFT_NSEV_BSLOC_NEWTON: FNFT_INT = 1;
pub const FNFT_NSEV_BSLOC_SUBSAMPLE_AND_REFINE: FNFT_INT = 2;

// nsev discrete spectrum type (fnft_nsev_dstype_t)
pub const FNFT_NSEV_DSTYPE_NORMING_CONSTANTS: FNFT_INT = 0;
pub const FNFT_NSEV_DSTYPE_RESIDUES: FNFT_INT = 1;
pub const FNFT_NSEV_DSTYPE_BOTH: FNFT_INT = 2;

// nsev continuous spectrum type (fnft_nsev_cstype_t)
pub const FNFT_NSEV_CSTYPE_REFLECTION_COEFFICIENT: FNFT_INT = 0;
pub const FNFT_NSEV_CSTYPE_AB: FNFT_INT = 1;
pub const FNFT_NSEV_CSTYPE_BOTH: FNFT_INT = 2;

// nsep localization (fnft_nsep_loc_t)
pub const FNFT_NSEP_LOC_SUBSAMPLE_AND_REFINE: FNFT_INT = 0;
pub const FNFT_NSEP_LOC_GRIDSEARCH: FNFT_INT = 1;
pub const FNFT_NSEP_LOC_MIXED: FNFT_INT = 2;

// nsep filtering (fnft_nsep_filt_t)
pub const FNFT_NSEP_FILT_NONE: FNFT_INT = 0;
pub const FNFT_NSEP_FILT_MANUAL: FNFT_INT = 1;
pub const FNFT_NSEP_FILT_AUTO: FNFT_INT = 2;

/// Options for `fnft_kdvv`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct fnft_kdvv_opts_t {
    pub discretization: FNFT_INT,
}

/// Options for `fnft_nsep`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct fnft_nsep_opts_t {
    pub localization: FNFT_INT,
    pub filtering: FNFT_INT,
    /// `[re_min, re_max, im_min, im_max]`, used by manual filtering.
    pub bounding_box: [FNFT_REAL; 4],
    pub max_evals: FNFT_UINT,
    pub normalization_flag: FNFT_INT,
    pub discretization: FNFT_INT,
}

/// Options for `fnft_nsev`.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct fnft_nsev_opts_t {
    pub bound_state_filtering: FNFT_INT,
    pub bound_state_localization: FNFT_INT,
    pub niter: FNFT_UINT,
    pub discspec_type: FNFT_INT,
    pub contspec_type: FNFT_INT,
    pub normalization_flag: FNFT_INT,
    pub discretization: FNFT_INT,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_nsev_opts_layout() {
        assert_eq!(offset_of!(fnft_nsev_opts_t, bound_state_filtering), 0);
        assert_eq!(offset_of!(fnft_nsev_opts_t, bound_state_localization), 4);
        // size_t is aligned to its own width
        assert_eq!(offset_of!(fnft_nsev_opts_t, niter), size_of::<FNFT_UINT>());
        assert_eq!(
            offset_of!(fnft_nsev_opts_t, discspec_type),
            2 * size_of::<FNFT_UINT>()
        );
        assert_eq!(align_of::<fnft_nsev_opts_t>(), align_of::<FNFT_UINT>());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_nsep_opts_layout() {
        assert_eq!(offset_of!(fnft_nsep_opts_t, localization), 0);
        assert_eq!(offset_of!(fnft_nsep_opts_t, filtering), 4);
        assert_eq!(offset_of!(fnft_nsep_opts_t, bounding_box), 8);
        assert_eq!(offset_of!(fnft_nsep_opts_t, max_evals), 40);
    }

    #[test]
    fn test_kdvv_opts_is_single_int() {
        assert_eq!(size_of::<fnft_kdvv_opts_t>(), size_of::<FNFT_INT>());
    }
}
