//! Nonlinear Fourier transform for the periodic NSE.

use fnft_ffi::sys::*;
use fnft_ffi::Result;

use crate::layout::NsepBufferSizes;
use crate::marshal::{complex_samples, output_buffer, reported_count};
use crate::options::{Nonlinearity, NsepOptions};
use crate::result::{keys, Field, ResultSet};

/// Call parameters of [`nsep`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NsepParams {
    pub kappa: Nonlinearity,
    pub options: fnft_nsep_opts_t,
}

impl Default for NsepParams {
    fn default() -> Self {
        Self {
            kappa: Nonlinearity::Focusing,
            options: NsepOptions::default().to_raw(),
        }
    }
}

impl NsepParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kappa(mut self, kappa: Nonlinearity) -> Self {
        self.kappa = kappa;
        self
    }

    pub fn with_options(mut self, options: NsepOptions) -> Self {
        self.options = options.to_raw();
        self
    }

    pub fn with_raw_options(mut self, options: fnft_nsep_opts_t) -> Self {
        self.options = options;
        self
    }
}

/// Compute the main and auxiliary spectrum of one period `q`.
///
/// `t1` is the time of the first sample and `t2` the time of the (D+1)-th
/// sample, i.e. the start of the next period.
pub fn nsep<T>(q: &[T], t1: f64, t2: f64, params: &NsepParams) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let func = fnft_ffi::sys::functions()?.fnft_nsep;
    nsep_with(func, q, t1, t2, params)
}

/// Like [`nsep`], calling `func` instead of the loaded entry point.
pub fn nsep_with<T>(
    func: FnftNsepFn,
    q: &[T],
    t1: f64,
    t2: f64,
    params: &NsepParams,
) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let t = [t1, t2];
    let samples = complex_samples(q);
    let mut opts = params.options;

    let sizes = NsepBufferSizes::new(samples.len())?;
    let mut main_spec = output_buffer(sizes.main_spectrum);
    let mut aux_spec = output_buffer(sizes.aux_spectrum);
    let mut k_inout: FNFT_UINT = sizes.main_spectrum;
    let mut m_inout: FNFT_UINT = sizes.aux_spectrum;

    tracing::debug!(
        d = samples.len(),
        localization = opts.localization,
        filtering = opts.filtering,
        "calling fnft_nsep"
    );

    let rv = unsafe {
        func(
            samples.len(),
            samples.as_ptr(),
            t.as_ptr(),
            &mut k_inout,
            main_spec.as_mut_ptr(),
            &mut m_inout,
            aux_spec.as_mut_ptr(),
            std::ptr::null_mut(),
            params.kappa.as_raw(),
            &mut opts,
        )
    };

    tracing::debug!(rv, k = k_inout, m = m_inout, "fnft_nsep returned");
    if rv != 0 {
        tracing::warn!(rv, "fnft_nsep reported an error");
    }

    let k = reported_count("main spectrum", k_inout, sizes.main_spectrum);
    let m = reported_count("auxiliary spectrum", m_inout, sizes.aux_spectrum);

    let mut res = ResultSet::new(rv);
    res.insert(keys::K, Field::Count(k));
    res.insert_complex(keys::MAIN, main_spec[..k].to_vec());
    res.insert(keys::M, Field::Count(m));
    res.insert_complex(keys::AUX, aux_spec[..m].to_vec());
    Ok(res)
}
