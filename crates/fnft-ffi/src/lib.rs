//! FNFT bindings with runtime library loading (dlopen).
//!
//! This crate declares the C ABI of the FNFT library (options records,
//! primitive types, entry-point signatures) and loads the library at runtime
//! using `libloading` instead of linking at build time.
//!
//! # Initialization
//!
//! Before calling any transform, the library must be loaded once per process:
//!
//! ```ignore
//! use fnft_ffi::fnft_init;
//!
//! // Initialize with explicit library path
//! fnft_init("/usr/local/lib/libfnft.so")?;
//! ```

// Low-level FFI layer
pub mod sys;

// Error handling
mod error;
pub use error::{Error, Result};

// Initialization API
mod init;
pub use init::{
    fnft_init, fnft_init_from_env, fnft_is_initialized, fnft_library_path, LIBRARY_PATH_ENV,
};
