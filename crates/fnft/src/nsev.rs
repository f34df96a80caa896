//! Nonlinear Fourier transform for the NSE with vanishing boundaries.

use fnft_ffi::sys::*;
use fnft_ffi::Result;

use crate::layout::{NsevBufferSizes, SlicePlan};
use crate::marshal::{complex_samples, output_buffer, reported_count};
use crate::options::{Nonlinearity, NsevOptions};
use crate::result::{keys, Field, ResultSet};
use crate::support::Support;

/// Call parameters of [`nsev`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NsevParams {
    /// Frequency range `[xi1, xi2]` of the continuous spectrum.
    pub xi: [f64; 2],
    /// Number of continuous-spectrum points.
    pub m: usize,
    /// Maximum number of bound states.
    pub k: usize,
    pub kappa: Nonlinearity,
    pub options: fnft_nsev_opts_t,
}

impl Default for NsevParams {
    fn default() -> Self {
        Self {
            xi: [-2.0, 2.0],
            m: 100,
            k: 100,
            kappa: Nonlinearity::Focusing,
            options: NsevOptions::default().to_raw(),
        }
    }
}

impl NsevParams {
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

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_kappa(mut self, kappa: Nonlinearity) -> Self {
        self.kappa = kappa;
        self
    }

    pub fn with_options(mut self, options: NsevOptions) -> Self {
        self.options = options.to_raw();
        self
    }

    /// Pass a native options record as is, including values these bindings
    /// have no name for.
    pub fn with_raw_options(mut self, options: fnft_nsev_opts_t) -> Self {
        self.options = options;
        self
    }
}

/// Compute the NFT of `q` with the loaded library's `fnft_nsev`.
///
/// # Example
///
/// ```ignore
/// use fnft::{nsev, NsevParams, Support};
///
/// fnft::fnft_init("/usr/local/lib/libfnft.so")?;
/// let q = vec![0.0; 8];
/// let res = nsev(&q, Support::bounds(-1.0, 1.0), &NsevParams::default())?;
/// assert_eq!(res.count(fnft::keys::BOUND_STATES_NUM), Some(0));
/// ```
pub fn nsev<T>(q: &[T], support: Support<'_>, params: &NsevParams) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let func = fnft_ffi::sys::functions()?.fnft_nsev;
    nsev_with(func, q, support, params)
}

/// Like [`nsev`], calling `func` instead of the loaded entry point.
pub fn nsev_with<T>(
    func: FnftNsevFn,
    q: &[T],
    support: Support<'_>,
    params: &NsevParams,
) -> Result<ResultSet>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    let t = support.to_native()?;
    let xi = params.xi;
    let samples = complex_samples(q);
    let mut opts = params.options;

    let sizes = NsevBufferSizes::new(&opts, params.m, params.k)?;
    let mut contspec = output_buffer(sizes.continuous_spectrum);
    let mut bound_states = output_buffer(sizes.bound_states);
    let mut discspec = output_buffer(sizes.discrete_spectrum);
    let mut k_inout: FNFT_UINT = params.k;

    tracing::debug!(
        d = samples.len(),
        m = params.m,
        k = params.k,
        discspec_type = opts.discspec_type,
        contspec_type = opts.contspec_type,
        "calling fnft_nsev"
    );

    let rv = unsafe {
        func(
            samples.len(),
            samples.as_ptr(),
            t.as_ptr(),
            params.m,
            contspec.as_mut_ptr(),
            xi.as_ptr(),
            &mut k_inout,
            bound_states.as_mut_ptr(),
            discspec.as_mut_ptr(),
            params.kappa.as_raw(),
            &mut opts,
        )
    };

    tracing::debug!(rv, k_found = k_inout, "fnft_nsev returned");
    if rv != 0 {
        tracing::warn!(rv, "fnft_nsev reported an error");
    }

    let found = reported_count("bound states", k_inout, params.k);
    Ok(decompose(
        rv,
        found,
        &opts,
        params.m,
        &bound_states,
        &discspec,
        &contspec,
    ))
}

/// Slice the nsev output buffers into a [`ResultSet`].
pub(crate) fn decompose(
    rv: FNFT_INT,
    found: usize,
    opts: &fnft_nsev_opts_t,
    m: usize,
    bound_states: &[FNFT_COMPLEX],
    discspec: &[FNFT_COMPLEX],
    contspec: &[FNFT_COMPLEX],
) -> ResultSet {
    let mut res = ResultSet::new(rv);
    res.insert(keys::BOUND_STATES_NUM, Field::Count(found));
    res.insert_complex(
        keys::BOUND_STATES,
        bound_states[..found.min(bound_states.len())].to_vec(),
    );

    let disc = SlicePlan::discrete_spectrum(opts.discspec_type, found);
    let cont = SlicePlan::continuous_spectrum(opts.contspec_type, m);
    for (key, values) in disc.apply(discspec).into_iter().chain(cont.apply(contspec)) {
        res.insert_complex(key, values);
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ContinuousSpectrumType, DiscreteSpectrumType};

    fn ramp(n: usize) -> Vec<FNFT_COMPLEX> {
        (0..n).map(|i| FNFT_COMPLEX::new(i as f64, 0.0)).collect()
    }

    #[test]
    fn test_params_defaults() {
        let p = NsevParams::default();
        assert_eq!(p.xi, [-2.0, 2.0]);
        assert_eq!(p.m, 100);
        assert_eq!(p.k, 100);
        assert_eq!(p.kappa, Nonlinearity::Focusing);
        assert_eq!(p.options, NsevOptions::default().to_raw());
    }

    #[test]
    fn test_decompose_both_discrete_types() {
        let opts = NsevOptions::new()
            .with_discspec_type(DiscreteSpectrumType::Both)
            .to_raw();
        // capacity K = 5, found 3
        let res = decompose(0, 3, &opts, 4, &ramp(5), &ramp(10), &ramp(4));

        assert_eq!(res.count(keys::BOUND_STATES_NUM), Some(3));
        assert_eq!(res.complex(keys::BOUND_STATES).unwrap().len(), 3);
        assert_eq!(res.complex(keys::D_NORM).unwrap(), &ramp(3)[..]);
        assert_eq!(res.complex(keys::D_RES).unwrap(), &ramp(6)[3..]);
        assert_eq!(res.complex(keys::C_REF).unwrap().len(), 4);
    }

    #[test]
    fn test_decompose_single_discrete_types() {
        let norm = NsevOptions::new()
            .with_discspec_type(DiscreteSpectrumType::NormingConstants)
            .to_raw();
        let res = decompose(0, 2, &norm, 1, &ramp(4), &ramp(4), &ramp(1));
        assert_eq!(res.complex(keys::D_NORM).unwrap().len(), 2);
        assert!(!res.contains_key(keys::D_RES));

        let resid = NsevOptions::new()
            .with_discspec_type(DiscreteSpectrumType::Residues)
            .to_raw();
        let res = decompose(0, 2, &resid, 1, &ramp(4), &ramp(4), &ramp(1));
        assert_eq!(res.complex(keys::D_RES).unwrap(), &ramp(2)[..]);
        assert!(!res.contains_key(keys::D_NORM));
    }

    #[test]
    fn test_decompose_all_continuous_types() {
        let opts = NsevOptions::new()
            .with_contspec_type(ContinuousSpectrumType::All)
            .to_raw();
        let res = decompose(0, 0, &opts, 3, &[], &[], &ramp(9));
        assert_eq!(res.complex(keys::C_REF).unwrap(), &ramp(3)[..]);
        assert_eq!(res.complex(keys::C_A).unwrap(), &ramp(6)[3..]);
        assert_eq!(res.complex(keys::C_B).unwrap(), &ramp(9)[6..]);
    }

    #[test]
    fn test_decompose_unknown_selectors_yield_no_spectra() {
        let mut opts = NsevOptions::default().to_raw();
        opts.discspec_type = 7;
        opts.contspec_type = 7;
        let res = decompose(0, 1, &opts, 2, &ramp(1), &ramp(1), &ramp(6));
        let names: Vec<_> = res.keys().collect();
        assert_eq!(
            names,
            vec![keys::BOUND_STATES, keys::BOUND_STATES_NUM, keys::RETURN_VALUE]
        );
    }
}
