//! Nonlinear Fourier transforms via the FNFT library.
//!
//! This crate marshals Rust slices into the memory layout of libFNFT, calls
//! the native transform and returns the outputs as a labeled [`ResultSet`].
//! No transform mathematics happens here.
//!
//! # Supported transforms
//!
//! - [`kdvv`]: Korteweg-de Vries equation, vanishing boundaries
//! - [`nsep`]: Nonlinear Schrödinger equation, periodic boundaries
//! - [`nsev`]: Nonlinear Schrödinger equation, vanishing boundaries
//!
//! # Example
//!
//! ```ignore
//! use fnft::{fnft_init, keys, nsev, NsevOptions, NsevParams, Support};
//!
//! fnft_init("/usr/local/lib/libfnft.so")?;
//!
//! let t: Vec<f64> = (0..64).map(|i| -2.0 + 4.0 * i as f64 / 63.0).collect();
//! let q: Vec<f64> = t.iter().map(|t| 1.0 / t.cosh()).collect();
//! let res = nsev(&q, Support::from(&t), &NsevParams::default())?;
//! println!("{:?}", res.complex(keys::BOUND_STATES));
//! ```

pub mod capi;
mod kdvv;
mod layout;
mod marshal;
mod nsep;
mod nsev;
pub mod options;
mod result;
mod support;

pub use kdvv::{kdvv, kdvv_with, KdvvParams};
pub use layout::{
    continuous_spectrum_len, discrete_spectrum_len, NsepBufferSizes, NsevBufferSizes, SlicePlan,
};
pub use nsep::{nsep, nsep_with, NsepParams};
pub use nsev::{nsev, nsev_with, NsevParams};
pub use options::{
    BoundStateFiltering, BoundStateLocalization, ContinuousSpectrumType, DiscreteSpectrumType,
    KdvDiscretization, KdvvOptions, Nonlinearity, NseDiscretization, NsepOptions, NsevOptions,
    PeriodicFiltering, PeriodicLocalization,
};
pub use result::{keys, Field, ResultSet};
pub use support::Support;

// Re-export the initialization API and error type
pub use fnft_ffi::{
    fnft_init, fnft_init_from_env, fnft_is_initialized, fnft_library_path, Error, Result,
};
pub use fnft_ffi::sys::{FNFT_COMPLEX, FNFT_INT};
