//! FNFT function loading via dlopen.
//!
//! The library handle and its function table live in a process-wide
//! `OnceLock`. They are set once by [`load_library`] and never released.

#![allow(non_snake_case)]

use super::opts::*;
use super::types::*;
use libloading::{Library, Symbol};
use std::sync::{Mutex, OnceLock};

/// `fnft_kdvv(D, u, T, M, contspec, XI, K_ptr, bound_states, normconsts_or_residues, opts)`
pub type FnftKdvvFn = unsafe extern "C" fn(
    D: FNFT_UINT,
    u: *mut FNFT_COMPLEX,
    T: *const FNFT_REAL,
    M: FNFT_UINT,
    contspec: *mut FNFT_COMPLEX,
    XI: *const FNFT_REAL,
    K_ptr: *mut FNFT_UINT,
    bound_states: *mut FNFT_COMPLEX,
    normconsts_or_residues: *mut FNFT_COMPLEX,
    opts: *mut fnft_kdvv_opts_t,
) -> FNFT_INT;

/// `fnft_nsep(D, q, T, K_ptr, main_spec, M_ptr, aux_spec, sheet_indices, kappa, opts)`
pub type FnftNsepFn = unsafe extern "C" fn(
    D: FNFT_UINT,
    q: *const FNFT_COMPLEX,
    T: *const FNFT_REAL,
    K_ptr: *mut FNFT_UINT,
    main_spec: *mut FNFT_COMPLEX,
    M_ptr: *mut FNFT_UINT,
    aux_spec: *mut FNFT_COMPLEX,
    sheet_indices: *mut FNFT_REAL,
    kappa: FNFT_INT,
    opts: *mut fnft_nsep_opts_t,
) -> FNFT_INT;

/// `fnft_nsev(D, q, T, M, contspec, XI, K_ptr, bound_states, normconsts_or_residues, kappa, opts)`
pub type FnftNsevFn = unsafe extern "C" fn(
    D: FNFT_UINT,
    q: *const FNFT_COMPLEX,
    T: *const FNFT_REAL,
    M: FNFT_UINT,
    contspec: *mut FNFT_COMPLEX,
    XI: *const FNFT_REAL,
    K_ptr: *mut FNFT_UINT,
    bound_states: *mut FNFT_COMPLEX,
    normconsts_or_residues: *mut FNFT_COMPLEX,
    kappa: FNFT_INT,
    opts: *mut fnft_nsev_opts_t,
) -> FNFT_INT;

/// Library state holder
struct LibState {
    lib: Library,
    path: String,
    funcs: Functions,
}

// SAFETY: Functions contain only function pointers which are Send + Sync
unsafe impl Send for LibState {}
unsafe impl Sync for LibState {}

static LIB: OnceLock<LibState> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Load the FNFT library from the given path.
pub fn load_library(path: &str) -> crate::Result<()> {
    // Fast path: already initialized
    if let Some(state) = LIB.get() {
        return same_path_or_err(state, path);
    }

    // Slow path: need to initialize. The guarded value is `()`, so a
    // poisoned lock carries no broken state.
    let _guard = INIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    // Double-check after acquiring lock
    if let Some(state) = LIB.get() {
        return same_path_or_err(state, path);
    }

    let lib = unsafe { Library::new(path) }.map_err(|e| crate::Error::LibraryLoad {
        path: path.to_string(),
        reason: e.to_string(),
    })?;

    let funcs = unsafe { Functions::load(&lib)? };

    tracing::info!(path, "loaded FNFT library");

    let state = LibState {
        lib,
        path: path.to_string(),
        funcs,
    };

    // This should succeed since we hold the lock and checked above
    let _ = LIB.set(state);

    Ok(())
}

fn same_path_or_err(state: &LibState, path: &str) -> crate::Result<()> {
    if state.path == path {
        Ok(())
    } else {
        Err(crate::Error::AlreadyInitialized(state.path.clone()))
    }
}

/// Check if the library is initialized.
pub fn is_initialized() -> bool {
    LIB.get().is_some()
}

/// Get the library path.
pub fn library_path() -> Option<String> {
    LIB.get().map(|s| s.path.clone())
}

/// Get a reference to the loaded library.
pub fn get_library() -> Option<&'static Library> {
    LIB.get().map(|s| &s.lib)
}

/// Get the function table of the loaded library.
pub fn functions() -> crate::Result<&'static Functions> {
    LIB.get()
        .map(|s| &s.funcs)
        .ok_or(crate::Error::NotInitialized)
}

/// FNFT function pointers
#[derive(Debug, Clone, Copy)]
pub struct Functions {
    pub fnft_kdvv: FnftKdvvFn,
    pub fnft_nsep: FnftNsepFn,
    pub fnft_nsev: FnftNsevFn,
}

impl Functions {
    unsafe fn load(lib: &Library) -> crate::Result<Self> {
        macro_rules! load_func {
            ($lib:expr, $name:ident, $ty:ty) => {{
                let sym: Symbol<$ty> =
                    unsafe { $lib.get(stringify!($name).as_bytes()) }.map_err(|e| {
                        crate::Error::SymbolLoad {
                            symbol: stringify!($name).to_string(),
                            reason: e.to_string(),
                        }
                    })?;
                *sym
            }};
        }

        Ok(Self {
            fnft_kdvv: load_func!(lib, fnft_kdvv, FnftKdvvFn),
            fnft_nsep: load_func!(lib, fnft_nsep, FnftNsepFn),
            fnft_nsev: load_func!(lib, fnft_nsev, FnftNsevFn),
        })
    }
}
