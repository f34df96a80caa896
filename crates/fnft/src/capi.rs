//! C API for hosts that load these bindings as a shared library.
//!
//! Transform entry points mirror the argument order of the libFNFT calls,
//! with every output described by a caller-owned [`fnft_capi_buffer_t`].
//! Each buffer must hold the worst case reported by the matching
//! `*_buffer_sizes` query; on success its `len` is set to the number of
//! entries written, with combined spectra packed back to back in selector
//! order. A status other than `FNFT_CAPI_SUCCESS` means libFNFT was not
//! called, and [`fnft_capi_last_error_message`] describes why. The native
//! return code is written to `return_value` as is.
//!
//! # Example (C)
//!
//! ```c
//! fnft_capi_init("/usr/local/lib/libfnft.so");
//!
//! size_t cont_len, bs_len, disc_len;
//! fnft_capi_nsev_buffer_sizes(100, 100, NULL, &cont_len, &bs_len, &disc_len);
//! /* allocate, wrap in fnft_capi_buffer_t, then: */
//! int32_t rv;
//! int status = fnft_capi_nsev(d, q, -1.0, 1.0, 100, &cont, -2.0, 2.0,
//!                             100, &bs, &disc, 1, NULL, &rv);
//! ```

#![allow(clippy::not_unsafe_ptr_arg_deref)]
#![allow(clippy::too_many_arguments)]
#![allow(non_camel_case_types)]

use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr};
use std::panic::{catch_unwind, AssertUnwindSafe};

use fnft_ffi::sys::*;
use fnft_ffi::{Error, Result};

use crate::kdvv::{kdvv_with, KdvvParams};
use crate::layout::{NsepBufferSizes, NsevBufferSizes};
use crate::nsep::{nsep_with, NsepParams};
use crate::nsev::{nsev_with, NsevParams};
use crate::options::{KdvvOptions, Nonlinearity, NsepOptions, NsevOptions};
use crate::result::{keys, ResultSet};
use crate::support::Support;

/// Status code type for C API functions.
pub type StatusCode = c_int;

/// Operation completed successfully.
pub const FNFT_CAPI_SUCCESS: StatusCode = 0;
/// A null pointer was passed where a valid pointer was required.
pub const FNFT_CAPI_NULL_POINTER: StatusCode = -1;
/// An argument cannot be passed on to libFNFT.
pub const FNFT_CAPI_INVALID_ARGUMENT: StatusCode = -2;
/// The library is already loaded from a different path.
pub const FNFT_CAPI_ALREADY_INITIALIZED: StatusCode = -3;
/// The library or one of its entry points could not be loaded.
pub const FNFT_CAPI_LIBRARY_LOAD_ERROR: StatusCode = -4;
/// No library has been loaded yet.
pub const FNFT_CAPI_NOT_INITIALIZED: StatusCode = -5;
/// An output buffer is smaller than the worst case of the call.
pub const FNFT_CAPI_BUFFER_TOO_SMALL: StatusCode = -6;
/// A panic was caught.
pub const FNFT_CAPI_INTERNAL_ERROR: StatusCode = -7;

type CallResult = std::result::Result<FNFT_INT, StatusCode>;

thread_local! {
    static LAST_ERROR: RefCell<String> = const { RefCell::new(String::new()) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|cell| *cell.borrow_mut() = msg.to_string());
}

fn status_of(err: &Error) -> StatusCode {
    match err {
        Error::LibraryLoad { .. } | Error::SymbolLoad { .. } | Error::MissingLibraryPath(_) => {
            FNFT_CAPI_LIBRARY_LOAD_ERROR
        }
        Error::AlreadyInitialized(_) => FNFT_CAPI_ALREADY_INITIALIZED,
        Error::NotInitialized => FNFT_CAPI_NOT_INITIALIZED,
        Error::InvalidArgument(_) => FNFT_CAPI_INVALID_ARGUMENT,
        Error::Native { .. } => FNFT_CAPI_INTERNAL_ERROR,
    }
}

/// Store the error message and return its status code.
fn err_status(err: Error) -> StatusCode {
    set_last_error(&err.to_string());
    status_of(&err)
}

fn unwrap_catch(result: std::thread::Result<StatusCode>) -> StatusCode {
    result.unwrap_or_else(|panic| {
        let msg = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());
        set_last_error(&msg);
        FNFT_CAPI_INTERNAL_ERROR
    })
}

fn nonlinearity(kappa: c_int) -> std::result::Result<Nonlinearity, StatusCode> {
    Nonlinearity::from_raw(kappa).ok_or_else(|| {
        err_status(Error::InvalidArgument(format!(
            "kappa must be +1 or -1, got {kappa}"
        )))
    })
}

fn finish(result: CallResult, return_value: *mut FNFT_INT) -> StatusCode {
    match result {
        Ok(rv) => {
            unsafe { *return_value = rv };
            FNFT_CAPI_SUCCESS
        }
        Err(status) => status,
    }
}

/// Caller-owned output buffer of complex values.
#[repr(C)]
#[derive(Debug)]
pub struct fnft_capi_buffer_t {
    /// Start of `capacity` writable entries.
    pub data: *mut FNFT_COMPLEX,
    pub capacity: usize,
    /// Entries written by the last successful call.
    pub len: usize,
}

impl fnft_capi_buffer_t {
    fn require(&self, what: &str, needed: usize) -> std::result::Result<(), StatusCode> {
        if self.data.is_null() {
            set_last_error(&format!("{what} buffer has no data pointer"));
            return Err(FNFT_CAPI_NULL_POINTER);
        }
        if self.capacity < needed {
            set_last_error(&format!(
                "{what} buffer holds {} entries, {needed} needed",
                self.capacity
            ));
            return Err(FNFT_CAPI_BUFFER_TOO_SMALL);
        }
        Ok(())
    }

    /// Copy the fields of `res` named in `order` back to back into the buffer.
    ///
    /// # Safety
    ///
    /// `data` must point to `capacity` writable entries.
    unsafe fn fill(
        &mut self,
        res: &ResultSet,
        order: &[&str],
    ) -> std::result::Result<(), StatusCode> {
        let out = std::slice::from_raw_parts_mut(self.data, self.capacity);
        let mut len = 0;
        for values in order.iter().filter_map(|key| res.complex(key)) {
            let end = len + values.len();
            let Some(dst) = out.get_mut(len..end) else {
                return Err(FNFT_CAPI_BUFFER_TOO_SMALL);
            };
            dst.copy_from_slice(values);
            len = end;
        }
        self.len = len;
        Ok(())
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Load libFNFT from `library_path`.
///
/// # Returns
///
/// * `FNFT_CAPI_SUCCESS` if loaded, or already loaded from the same path
/// * `FNFT_CAPI_NULL_POINTER` if `library_path` is NULL
/// * `FNFT_CAPI_INVALID_ARGUMENT` if the path is not valid UTF-8
/// * `FNFT_CAPI_ALREADY_INITIALIZED` if loaded from a different path
/// * `FNFT_CAPI_LIBRARY_LOAD_ERROR` if the library or an entry point is missing
#[no_mangle]
pub extern "C" fn fnft_capi_init(library_path: *const c_char) -> StatusCode {
    if library_path.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| {
        let path = unsafe { CStr::from_ptr(library_path) };
        match path.to_str() {
            Ok(path) => {
                fnft_ffi::fnft_init(path).map_or_else(err_status, |()| FNFT_CAPI_SUCCESS)
            }
            Err(e) => err_status(Error::InvalidArgument(format!("library path: {e}"))),
        }
    }));
    unwrap_catch(result)
}

/// Load libFNFT from the path in `FNFT_LIBRARY_PATH`.
#[no_mangle]
pub extern "C" fn fnft_capi_init_from_env() -> StatusCode {
    let result = catch_unwind(|| {
        fnft_ffi::fnft_init_from_env().map_or_else(err_status, |()| FNFT_CAPI_SUCCESS)
    });
    unwrap_catch(result)
}

/// Returns 1 if libFNFT has been loaded, 0 otherwise.
#[no_mangle]
pub extern "C" fn fnft_capi_is_initialized() -> c_int {
    c_int::from(fnft_ffi::fnft_is_initialized())
}

/// Retrieve the message of the last failed call on this thread.
///
/// Call with `buf = NULL` to get the required size (including the null
/// terminator) in `out_len`.
#[no_mangle]
pub extern "C" fn fnft_capi_last_error_message(
    buf: *mut c_char,
    buf_len: usize,
    out_len: *mut usize,
) -> StatusCode {
    if out_len.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    LAST_ERROR.with(|cell| {
        let msg = cell.borrow();
        let required = msg.len() + 1;
        unsafe { *out_len = required };

        if buf.is_null() {
            return FNFT_CAPI_SUCCESS;
        }
        if buf_len < required {
            return FNFT_CAPI_BUFFER_TOO_SMALL;
        }
        unsafe {
            std::ptr::copy_nonoverlapping(msg.as_ptr(), buf as *mut u8, msg.len());
            *buf.add(msg.len()) = 0;
        }
        FNFT_CAPI_SUCCESS
    })
}

// ============================================================================
// Buffer sizes
// ============================================================================

/// Worst-case buffer sizes of [`fnft_capi_nsev`]. `opts = NULL` uses the defaults.
#[no_mangle]
pub extern "C" fn fnft_capi_nsev_buffer_sizes(
    m: usize,
    k: usize,
    opts: *const fnft_nsev_opts_t,
    contspec_len: *mut usize,
    bound_states_len: *mut usize,
    discspec_len: *mut usize,
) -> StatusCode {
    if contspec_len.is_null() || bound_states_len.is_null() || discspec_len.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    let options = if opts.is_null() {
        NsevOptions::default().to_raw()
    } else {
        unsafe { *opts }
    };
    match NsevBufferSizes::new(&options, m, k) {
        Ok(sizes) => {
            unsafe {
                *contspec_len = sizes.continuous_spectrum;
                *bound_states_len = sizes.bound_states;
                *discspec_len = sizes.discrete_spectrum;
            }
            FNFT_CAPI_SUCCESS
        }
        Err(e) => err_status(e),
    }
}

/// Worst-case buffer sizes of [`fnft_capi_nsep`] for `d` samples.
#[no_mangle]
pub extern "C" fn fnft_capi_nsep_buffer_sizes(
    d: usize,
    main_len: *mut usize,
    aux_len: *mut usize,
) -> StatusCode {
    if main_len.is_null() || aux_len.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    match NsepBufferSizes::new(d) {
        Ok(sizes) => {
            unsafe {
                *main_len = sizes.main_spectrum;
                *aux_len = sizes.aux_spectrum;
            }
            FNFT_CAPI_SUCCESS
        }
        Err(e) => err_status(e),
    }
}

// ============================================================================
// Transforms
// ============================================================================

/// Check capacities, call `fnft_nsev` and unpack the result into the buffers.
///
/// # Safety
///
/// Every buffer's `data` must point to `capacity` writable entries.
unsafe fn nsev_via(
    resolve: impl FnOnce() -> Result<FnftNsevFn>,
    q: &[FNFT_COMPLEX],
    t: [f64; 2],
    params: &NsevParams,
    contspec: &mut fnft_capi_buffer_t,
    bound_states: &mut fnft_capi_buffer_t,
    discspec: &mut fnft_capi_buffer_t,
) -> CallResult {
    let sizes = NsevBufferSizes::new(&params.options, params.m, params.k).map_err(err_status)?;
    contspec.require("continuous spectrum", sizes.continuous_spectrum)?;
    bound_states.require("bound state", sizes.bound_states)?;
    discspec.require("discrete spectrum", sizes.discrete_spectrum)?;

    let func = resolve().map_err(err_status)?;
    let res = nsev_with(func, q, Support::bounds(t[0], t[1]), params).map_err(err_status)?;

    bound_states.fill(&res, &[keys::BOUND_STATES])?;
    discspec.fill(&res, &[keys::D_NORM, keys::D_RES])?;
    contspec.fill(&res, &[keys::C_REF, keys::C_A, keys::C_B])?;
    Ok(res.return_value())
}

/// NFT of `q` with vanishing boundaries.
///
/// `bound_states->len` receives the number of bound states found. With both
/// discrete spectrum types selected, `discspec` holds the norming constants
/// followed by the residues. `opts = NULL` uses the defaults.
#[no_mangle]
pub extern "C" fn fnft_capi_nsev(
    d: usize,
    q: *const FNFT_COMPLEX,
    t1: f64,
    t2: f64,
    m: usize,
    contspec: *mut fnft_capi_buffer_t,
    xi1: f64,
    xi2: f64,
    k: usize,
    bound_states: *mut fnft_capi_buffer_t,
    discspec: *mut fnft_capi_buffer_t,
    kappa: c_int,
    opts: *const fnft_nsev_opts_t,
    return_value: *mut FNFT_INT,
) -> StatusCode {
    if q.is_null()
        || contspec.is_null()
        || bound_states.is_null()
        || discspec.is_null()
        || return_value.is_null()
    {
        return FNFT_CAPI_NULL_POINTER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let kappa = match nonlinearity(kappa) {
            Ok(kappa) => kappa,
            Err(status) => return status,
        };
        let options = if opts.is_null() {
            NsevOptions::default().to_raw()
        } else {
            *opts
        };
        let params = NsevParams {
            xi: [xi1, xi2],
            m,
            k,
            kappa,
            options,
        };
        let call = nsev_via(
            || Ok(fnft_ffi::sys::functions()?.fnft_nsev),
            std::slice::from_raw_parts(q, d),
            [t1, t2],
            &params,
            &mut *contspec,
            &mut *bound_states,
            &mut *discspec,
        );
        finish(call, return_value)
    }));
    unwrap_catch(result)
}

/// # Safety
///
/// Every buffer's `data` must point to `capacity` writable entries.
unsafe fn nsep_via(
    resolve: impl FnOnce() -> Result<FnftNsepFn>,
    q: &[FNFT_COMPLEX],
    t: [f64; 2],
    params: &NsepParams,
    main_spec: &mut fnft_capi_buffer_t,
    aux_spec: &mut fnft_capi_buffer_t,
) -> CallResult {
    let sizes = NsepBufferSizes::new(q.len()).map_err(err_status)?;
    main_spec.require("main spectrum", sizes.main_spectrum)?;
    aux_spec.require("auxiliary spectrum", sizes.aux_spectrum)?;

    let func = resolve().map_err(err_status)?;
    let res = nsep_with(func, q, t[0], t[1], params).map_err(err_status)?;

    main_spec.fill(&res, &[keys::MAIN])?;
    aux_spec.fill(&res, &[keys::AUX])?;
    Ok(res.return_value())
}

/// Main and auxiliary spectrum of one period `q`.
///
/// `main_spec->len` and `aux_spec->len` receive the number of points found.
#[no_mangle]
pub extern "C" fn fnft_capi_nsep(
    d: usize,
    q: *const FNFT_COMPLEX,
    t1: f64,
    t2: f64,
    main_spec: *mut fnft_capi_buffer_t,
    aux_spec: *mut fnft_capi_buffer_t,
    kappa: c_int,
    opts: *const fnft_nsep_opts_t,
    return_value: *mut FNFT_INT,
) -> StatusCode {
    if q.is_null() || main_spec.is_null() || aux_spec.is_null() || return_value.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let kappa = match nonlinearity(kappa) {
            Ok(kappa) => kappa,
            Err(status) => return status,
        };
        let options = if opts.is_null() {
            NsepOptions::default().to_raw()
        } else {
            *opts
        };
        let call = nsep_via(
            || Ok(fnft_ffi::sys::functions()?.fnft_nsep),
            std::slice::from_raw_parts(q, d),
            [t1, t2],
            &NsepParams { kappa, options },
            &mut *main_spec,
            &mut *aux_spec,
        );
        finish(call, return_value)
    }));
    unwrap_catch(result)
}

/// # Safety
///
/// `contspec.data` must point to `contspec.capacity` writable entries.
unsafe fn kdvv_via(
    resolve: impl FnOnce() -> Result<FnftKdvvFn>,
    u: &[FNFT_COMPLEX],
    t: [f64; 2],
    params: &KdvvParams,
    contspec: &mut fnft_capi_buffer_t,
) -> CallResult {
    contspec.require("continuous spectrum", params.m)?;

    let func = resolve().map_err(err_status)?;
    let res = kdvv_with(func, u, Support::bounds(t[0], t[1]), params).map_err(err_status)?;

    contspec.fill(&res, &[keys::CONTSPEC])?;
    Ok(res.return_value())
}

/// Continuous spectrum of `u` for the KdV equation with vanishing boundaries.
#[no_mangle]
pub extern "C" fn fnft_capi_kdvv(
    d: usize,
    u: *const FNFT_COMPLEX,
    t1: f64,
    t2: f64,
    m: usize,
    contspec: *mut fnft_capi_buffer_t,
    xi1: f64,
    xi2: f64,
    opts: *const fnft_kdvv_opts_t,
    return_value: *mut FNFT_INT,
) -> StatusCode {
    if u.is_null() || contspec.is_null() || return_value.is_null() {
        return FNFT_CAPI_NULL_POINTER;
    }

    let result = catch_unwind(AssertUnwindSafe(|| unsafe {
        let options = if opts.is_null() {
            KdvvOptions::default().to_raw()
        } else {
            *opts
        };
        let params = KdvvParams {
            xi: [xi1, xi2],
            m,
            options,
        };
        let call = kdvv_via(
            || Ok(fnft_ffi::sys::functions()?.fnft_kdvv),
            std::slice::from_raw_parts(u, d),
            [t1, t2],
            &params,
            &mut *contspec,
        );
        finish(call, return_value)
    }));
    unwrap_catch(result)
}
