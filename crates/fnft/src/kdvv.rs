//! Nonlinear Fourier transform for the KdV equation with vanishing boundaries.
//!
//! Only the continuous spectrum is computed: the call passes `K = 0` and no
//! bound-state buffers.

use fnft_ffi::sys::*;
use fnft_ffi::Result;

use crate::marshal::{complex_samples, output_buffer};
use crate::options::KdvvOptions;
use crate::result::{keys, Field, ResultSet};
use crate::support::Support;

/// Call parameters of [`kdvv`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KdvvParams {
    /// Frequency range `[xi1, xi2]` of the continuous spectrum.
    pub xi: [f64; 2],
    /// Number of continuous-spectrum points.
    pub m: usize,
    pub options: fnft_kdvv_opts_t,
}

impl Default for KdvvParams {
    fn default() -> Self {
        Self {
            xi: [-2.0, 2.0],
            m: 100,
            options: KdvvOptions::default().to_raw(),
        }
    }
}

impl KdvvParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_xi(mut self, xi1: f64, xi2: f64) -> Self {
        self.xi = [xi1, xi2];
        self
    }

    pub fn with_m(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    pub fn with_options(mut self, options: KdvvOptions) -> Self {
        self.options = options.to_raw();
        self
    }

    pub fn with_raw_options(mut self, options: fnft_kdvv_opts_t) -> Self {
        self.options = options;
        self
    }
}

/// Compute the continuous spectrum of `u` with the loaded library's `fnft_kdvv`.
pub fn kdvv<T>(u: &[T], support: Support<'_>, params: &KdvvParams) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let func = fnft_ffi::sys::functions()?.fnft_kdvv;
    kdvv_with(func, u, support, params)
}

/// Like [`kdvv`], calling `func` instead of the loaded entry point.
pub fn kdvv_with<T>(
    func: FnftKdvvFn,
    u: &[T],
    support: Support<'_>,
    params: &KdvvParams,
) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let t = support.to_native()?;
    let xi = params.xi;
    // fnft_kdvv takes a non-const sample pointer
    let mut samples = complex_samples(u);
    let mut opts = params.options;
    let mut contspec = output_buffer(params.m);
    let mut k_inout: FNFT_UINT = 0;

    tracing::debug!(
        d = samples.len(),
        m = params.m,
        discretization = opts.discretization,
        "calling fnft_kdvv"
    );

    let rv = unsafe {
        func(
            samples.len(),
            samples.as_mut_ptr(),
            t.as_ptr(),
            params.m,
            contspec.as_mut_ptr(),
            xi.as_ptr(),
            &mut k_inout,
            std::ptr::null_mut(),
            std::ptr::null_mut(),
            &mut opts,
        )
    };

    tracing::debug!(rv, "fnft_kdvv returned");
    if rv != 0 {
        tracing::warn!(rv, "fnft_kdvv reported an error");
    }

    let mut res = ResultSet::new(rv);
    res.insert(keys::BOUND_STATES_NUM, Field::Count(0));
    res.insert_complex(keys::CONTSPEC, contspec);
    Ok(res)
}
