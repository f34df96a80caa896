//! fnft_nsep and fnft_kdvv marshalling tests against Rust stand-ins.

use std::cell::Cell;

use approx::assert_abs_diff_eq;
use fnft::{
    kdvv, kdvv_with, keys, nsep, nsep_with, Error, KdvDiscretization, KdvvOptions, KdvvParams,
    Nonlinearity, NsepOptions, NsepParams, PeriodicFiltering, Support,
};
use fnft_ffi::sys::*;
use num_complex::Complex64;

thread_local! {
    static NSEP_OK: Cell<bool> = const { Cell::new(false) };
    static KDVV_OK: Cell<bool> = const { Cell::new(false) };
}

/// Checks the call contract, then reports 3 main and 2 auxiliary points.
unsafe extern "C" fn periodic(
    d: FNFT_UINT,
    q: *const FNFT_COMPLEX,
    t: *const FNFT_REAL,
    k_ptr: *mut FNFT_UINT,
    main_spec: *mut FNFT_COMPLEX,
    m_ptr: *mut FNFT_UINT,
    aux_spec: *mut FNFT_COMPLEX,
    sheet_indices: *mut FNFT_REAL,
    kappa: FNFT_INT,
    opts: *mut fnft_nsep_opts_t,
) -> FNFT_INT {
    let o = *opts;
    let ok = d == 4
        && *q.add(3) == Complex64::new(0.0, 1.0)
        && *t == 0.0
        && *t.add(1) == 2.0
        && *k_ptr == 2 * d
        && *m_ptr == 2 * d
        && sheet_indices.is_null()
        && kappa == -1
        && o.filtering == 1
        && o.bounding_box == [-1.0, 1.0, -1.0, 1.0];
    NSEP_OK.with(|c| c.set(ok));

    for i in 0..*k_ptr {
        *main_spec.add(i) = Complex64::new(i as f64, 1.0);
    }
    for i in 0..*m_ptr {
        *aux_spec.add(i) = Complex64::new(-(i as f64), 0.0);
    }
    *k_ptr = 3;
    *m_ptr = 2;
    0
}

/// Checks that no bound states are requested, then writes the continuous spectrum.
unsafe extern "C" fn vanishing_kdv(
    d: FNFT_UINT,
    u: *mut FNFT_COMPLEX,
    t: *const FNFT_REAL,
    m: FNFT_UINT,
    contspec: *mut FNFT_COMPLEX,
    xi: *const FNFT_REAL,
    k_ptr: *mut FNFT_UINT,
    bound_states: *mut FNFT_COMPLEX,
    normconsts_or_residues: *mut FNFT_COMPLEX,
    opts: *mut fnft_kdvv_opts_t,
) -> FNFT_INT {
    let ok = d == 3
        && *u == Complex64::new(1.0, 0.0)
        && *t == -2.0
        && *t.add(1) == 2.0
        && *xi == -1.0
        && *xi.add(1) == 1.0
        && *k_ptr == 0
        && bound_states.is_null()
        && normconsts_or_residues.is_null()
        && (*opts).discretization == KdvDiscretization::DEFAULT.as_raw();
    KDVV_OK.with(|c| c.set(ok));

    for i in 0..m {
        *contspec.add(i) = Complex64::new(0.5 * i as f64, 0.0);
    }
    0
}

unsafe extern "C" fn failing_kdv(
    _d: FNFT_UINT,
    _u: *mut FNFT_COMPLEX,
    _t: *const FNFT_REAL,
    _m: FNFT_UINT,
    _contspec: *mut FNFT_COMPLEX,
    _xi: *const FNFT_REAL,
    _k_ptr: *mut FNFT_UINT,
    _bound_states: *mut FNFT_COMPLEX,
    _normconsts_or_residues: *mut FNFT_COMPLEX,
    _opts: *mut fnft_kdvv_opts_t,
) -> FNFT_INT {
    1
}

#[test]
fn test_nsep_truncates_to_reported_counts() {
    let q = [
        Complex64::new(1.0, 0.0),
        Complex64::new(0.0, 0.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, 1.0),
    ];
    let params = NsepParams::new()
        .with_kappa(Nonlinearity::Defocusing)
        .with_options(
            NsepOptions::new()
                .with_filtering(PeriodicFiltering::Manual)
                .with_bounding_box([-1.0, 1.0, -1.0, 1.0]),
        );

    let res = nsep_with(periodic, &q, 0.0, 2.0, &params).unwrap();

    assert!(NSEP_OK.with(Cell::get));
    assert_eq!(res.return_value(), 0);
    assert_eq!(res.count(keys::K), Some(3));
    assert_eq!(res.count(keys::M), Some(2));
    let main = res.complex(keys::MAIN).unwrap();
    assert_eq!(main.len(), 3);
    assert_abs_diff_eq!(main[2].re, 2.0);
    let aux = res.complex(keys::AUX).unwrap();
    assert_eq!(aux.len(), 2);
    assert_abs_diff_eq!(aux[1].re, -1.0);
}

#[test]
fn test_kdvv_returns_continuous_spectrum_only() {
    let u = [1.0_f64, 2.0, 1.0];
    let t = [-2.0, 0.0, 2.0];
    let params = KdvvParams::new().with_xi(-1.0, 1.0).with_m(8);

    let res = kdvv_with(vanishing_kdv, &u, Support::from(&t[..]), &params).unwrap();

    assert!(KDVV_OK.with(Cell::get));
    assert_eq!(res.return_value(), 0);
    let names: Vec<_> = res.keys().collect();
    assert_eq!(
        names,
        vec![keys::BOUND_STATES_NUM, keys::CONTSPEC, keys::RETURN_VALUE]
    );
    assert_eq!(res.count(keys::BOUND_STATES_NUM), Some(0));
    let contspec = res.complex(keys::CONTSPEC).unwrap();
    assert_eq!(contspec.len(), 8);
    assert_abs_diff_eq!(contspec[7].re, 3.5);
}

#[test]
fn test_kdvv_error_code_is_kept() {
    let params = KdvvParams::new()
        .with_options(KdvvOptions::new().with_discretization(KdvDiscretization::from_raw(1)));
    let res = kdvv_with(failing_kdv, &[0.0_f64; 3], Support::bounds(0.0, 1.0), &params).unwrap();
    assert_eq!(res.return_value(), 1);
    assert_eq!(res.check().unwrap_err(), Error::Native { code: 1 });
}

#[test]
fn test_transforms_require_loaded_library() {
    let err = nsep(&[0.0_f64; 4], 0.0, 1.0, &NsepParams::default()).unwrap_err();
    assert_eq!(err, Error::NotInitialized);

    let err = kdvv(&[0.0_f64; 4], Support::bounds(0.0, 1.0), &KdvvParams::default()).unwrap_err();
    assert_eq!(err, Error::NotInitialized);
}
