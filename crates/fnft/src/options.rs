//! Options builders for the three transform families.
//!
//! Each builder is a plain value type whose `Default` carries the documented
//! defaults of its mode. Converting to the native record is a pure field
//! copy; combinations are not validated because libFNFT reports illegal ones
//! through its return code.

use fnft_ffi::sys::*;

/// Bounding box `[re_min, re_max, im_min, im_max]` used when none is given.
pub const DEFAULT_BOUNDING_BOX: [f64; 4] = [-200.0, 200.0, -200.0, 200.0];

/// Sign of the nonlinearity (`kappa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nonlinearity {
    #[default]
    Focusing,
    Defocusing,
}

impl Nonlinearity {
    /// `None` for anything but `+1` and `-1`.
    pub const fn from_raw(kappa: FNFT_INT) -> Option<Self> {
        match kappa {
            1 => Some(Self::Focusing),
            -1 => Some(Self::Defocusing),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::Focusing => 1,
            Self::Defocusing => -1,
        }
    }
}

/// Discretization of the NSE scattering problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NseDiscretization {
    TwoSplit2Modal,
    TwoSplit2A,
    TwoSplit4A,
    TwoSplit4B,
    BO,
}

impl NseDiscretization {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::TwoSplit2Modal => FNFT_NSE_DISCRETIZATION_2SPLIT2_MODAL,
            Self::TwoSplit2A => FNFT_NSE_DISCRETIZATION_2SPLIT2A,
            Self::TwoSplit4A => FNFT_NSE_DISCRETIZATION_2SPLIT4A,
            Self::TwoSplit4B => FNFT_NSE_DISCRETIZATION_2SPLIT4B,
            Self::BO => FNFT_NSE_DISCRETIZATION_BO,
        }
    }
}

/// Discretization of the KdV scattering problem.
///
/// The KdV discretizations are passed through as native ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KdvDiscretization(FNFT_INT);

impl KdvDiscretization {
    pub const DEFAULT: Self = Self(15);

    pub const fn from_raw(id: FNFT_INT) -> Self {
        Self(id)
    }

    pub const fn as_raw(self) -> FNFT_INT {
        self.0
    }
}

impl Default for KdvDiscretization {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundStateFiltering {
    None,
    Basic,
    Full,
}

impl BoundStateFiltering {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::None => FNFT_NSEV_BSFILT_NONE,
            Self::Basic => FNFT_NSEV_BSFILT_BASIC,
            Self::Full => FNFT_NSEV_BSFILT_FULL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundStateLocalization {
    FastEigenvalue,
    /// Uses [`NsevOptions::niter`] iterations.
    Newton,
    SubsampleAndRefine,
}

impl BoundStateLocalization {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::FastEigenvalue => FNFT_NSEV_BSLOC_FAST_EIGENVALUE,
            Self::Newton => FNFT_NSEV_BSLOC_NEWTON,
            Self::SubsampleAndRefine => FNFT_NSEV_BSLOC_SUBSAMPLE_AND_REFINE,
        }
    }
}

/// Which discrete-spectrum quantities `fnft_nsev` computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscreteSpectrumType {
    NormingConstants,
    Residues,
    Both,
}

impl DiscreteSpectrumType {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::NormingConstants => FNFT_NSEV_DSTYPE_NORMING_CONSTANTS,
            Self::Residues => FNFT_NSEV_DSTYPE_RESIDUES,
            Self::Both => FNFT_NSEV_DSTYPE_BOTH,
        }
    }
}

/// Which continuous-spectrum quantities `fnft_nsev` computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuousSpectrumType {
    ReflectionCoefficient,
    /// Scattering coefficients a and b.
    AB,
    /// Reflection coefficient, a and b.
    All,
}

impl ContinuousSpectrumType {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::ReflectionCoefficient => FNFT_NSEV_CSTYPE_REFLECTION_COEFFICIENT,
            Self::AB => FNFT_NSEV_CSTYPE_AB,
            Self::All => FNFT_NSEV_CSTYPE_BOTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodicLocalization {
    SubsampleAndRefine,
    Gridsearch,
    Mixed,
}

impl PeriodicLocalization {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::SubsampleAndRefine => FNFT_NSEP_LOC_SUBSAMPLE_AND_REFINE,
            Self::Gridsearch => FNFT_NSEP_LOC_GRIDSEARCH,
            Self::Mixed => FNFT_NSEP_LOC_MIXED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodicFiltering {
    None,
    /// Keeps points inside [`NsepOptions::bounding_box`].
    Manual,
    Auto,
}

impl PeriodicFiltering {
    pub const fn as_raw(self) -> FNFT_INT {
        match self {
            Self::None => FNFT_NSEP_FILT_NONE,
            Self::Manual => FNFT_NSEP_FILT_MANUAL,
            Self::Auto => FNFT_NSEP_FILT_AUTO,
        }
    }
}

const fn flag(on: bool) -> FNFT_INT {
    if on {
        1
    } else {
        0
    }
}

/// Options for the KdV transform with vanishing boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KdvvOptions {
    pub discretization: KdvDiscretization,
}

impl KdvvOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discretization(mut self, discretization: KdvDiscretization) -> Self {
        self.discretization = discretization;
        self
    }

    pub fn to_raw(&self) -> fnft_kdvv_opts_t {
        fnft_kdvv_opts_t {
            discretization: self.discretization.as_raw(),
        }
    }
}

impl From<KdvvOptions> for fnft_kdvv_opts_t {
    fn from(opts: KdvvOptions) -> Self {
        opts.to_raw()
    }
}

/// Options for the periodic NSE transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NsepOptions {
    pub localization: PeriodicLocalization,
    pub filtering: PeriodicFiltering,
    pub bounding_box: [f64; 4],
    /// Maximum number of evaluations for root refinement.
    pub max_evals: usize,
    pub normalization: bool,
    pub discretization: NseDiscretization,
}

impl Default for NsepOptions {
    fn default() -> Self {
        Self {
            localization: PeriodicLocalization::Mixed,
            filtering: PeriodicFiltering::Auto,
            bounding_box: DEFAULT_BOUNDING_BOX,
            max_evals: 20,
            normalization: true,
            discretization: NseDiscretization::TwoSplit2A,
        }
    }
}

impl NsepOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_localization(mut self, localization: PeriodicLocalization) -> Self {
        self.localization = localization;
        self
    }

    pub fn with_filtering(mut self, filtering: PeriodicFiltering) -> Self {
        self.filtering = filtering;
        self
    }

    /// `None` restores [`DEFAULT_BOUNDING_BOX`].
    pub fn with_bounding_box(mut self, bounding_box: impl Into<Option<[f64; 4]>>) -> Self {
        self.bounding_box = bounding_box.into().unwrap_or(DEFAULT_BOUNDING_BOX);
        self
    }

    pub fn with_max_evals(mut self, max_evals: usize) -> Self {
        self.max_evals = max_evals;
        self
    }

    pub fn with_normalization(mut self, normalization: bool) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_discretization(mut self, discretization: NseDiscretization) -> Self {
        self.discretization = discretization;
        self
    }

    pub fn to_raw(&self) -> fnft_nsep_opts_t {
        fnft_nsep_opts_t {
            localization: self.localization.as_raw(),
            filtering: self.filtering.as_raw(),
            bounding_box: self.bounding_box,
            max_evals: self.max_evals,
            normalization_flag: flag(self.normalization),
            discretization: self.discretization.as_raw(),
        }
    }
}

impl From<NsepOptions> for fnft_nsep_opts_t {
    fn from(opts: NsepOptions) -> Self {
        opts.to_raw()
    }
}

/// Options for the NSE transform with vanishing boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NsevOptions {
    pub bound_state_filtering: BoundStateFiltering,
    pub bound_state_localization: BoundStateLocalization,
    /// Iterations for Newton localization.
    pub niter: usize,
    pub discspec_type: DiscreteSpectrumType,
    pub contspec_type: ContinuousSpectrumType,
    pub normalization: bool,
    pub discretization: NseDiscretization,
}

impl Default for NsevOptions {
    fn default() -> Self {
        Self {
            bound_state_filtering: BoundStateFiltering::Full,
            bound_state_localization: BoundStateLocalization::SubsampleAndRefine,
            niter: 10,
            discspec_type: DiscreteSpectrumType::NormingConstants,
            contspec_type: ContinuousSpectrumType::ReflectionCoefficient,
            normalization: true,
            discretization: NseDiscretization::TwoSplit4B,
        }
    }
}

impl NsevOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bound_state_filtering(mut self, filtering: BoundStateFiltering) -> Self {
        self.bound_state_filtering = filtering;
        self
    }

    pub fn with_bound_state_localization(mut self, localization: BoundStateLocalization) -> Self {
        self.bound_state_localization = localization;
        self
    }

    pub fn with_niter(mut self, niter: usize) -> Self {
        self.niter = niter;
        self
    }

    pub fn with_discspec_type(mut self, discspec_type: DiscreteSpectrumType) -> Self {
        self.discspec_type = discspec_type;
        self
    }

    pub fn with_contspec_type(mut self, contspec_type: ContinuousSpectrumType) -> Self {
        self.contspec_type = contspec_type;
        self
    }

    pub fn with_normalization(mut self, normalization: bool) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_discretization(mut self, discretization: NseDiscretization) -> Self {
        self.discretization = discretization;
        self
    }

    pub fn to_raw(&self) -> fnft_nsev_opts_t {
        fnft_nsev_opts_t {
            bound_state_filtering: self.bound_state_filtering.as_raw(),
            bound_state_localization: self.bound_state_localization.as_raw(),
            niter: self.niter,
            discspec_type: self.discspec_type.as_raw(),
            contspec_type: self.contspec_type.as_raw(),
            normalization_flag: flag(self.normalization),
            discretization: self.discretization.as_raw(),
        }
    }
}

impl From<NsevOptions> for fnft_nsev_opts_t {
    fn from(opts: NsevOptions) -> Self {
        opts.to_raw()
    }
}
