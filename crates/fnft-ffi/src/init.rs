//! FNFT library initialization.
//!
//! The library must be loaded with [`fnft_init`] (or [`fnft_init_from_env`])
//! before any transform is called. Loading failures are reported here, not
//! deferred to the first call.

use crate::error::{Error, Result};

/// Environment variable read by [`fnft_init_from_env`].
pub const LIBRARY_PATH_ENV: &str = "FNFT_LIBRARY_PATH";

/// Initialize FNFT by loading the library from the given path.
///
/// # Arguments
///
/// * `library_path` - Path to the FNFT shared library (e.g., `/usr/local/lib/libfnft.so`)
///
/// # Returns
///
/// * `Ok(())` if initialization succeeds or already initialized with the same path
/// * `Err(Error::AlreadyInitialized)` if already initialized with a different path
/// * `Err(Error::LibraryLoad)` if the library cannot be loaded
/// * `Err(Error::SymbolLoad)` if an entry point is missing
///
/// # Example
///
/// ```ignore
/// use fnft_ffi::fnft_init;
///
/// fnft_init("/usr/local/lib/libfnft.so")?;
/// ```
pub fn fnft_init(library_path: &str) -> Result<()> {
    crate::sys::load_library(library_path)
}

/// Initialize FNFT from the path stored in `FNFT_LIBRARY_PATH`.
pub fn fnft_init_from_env() -> Result<()> {
    match std::env::var(LIBRARY_PATH_ENV) {
        Ok(path) if !path.is_empty() => fnft_init(&path),
        _ => Err(Error::MissingLibraryPath(LIBRARY_PATH_ENV.to_string())),
    }
}

/// Check if FNFT has been initialized.
///
/// Returns `true` if [`fnft_init`] has been successfully called, `false` otherwise.
pub fn fnft_is_initialized() -> bool {
    crate::sys::is_initialized()
}

/// Get the path used for FNFT initialization.
///
/// Returns `Some(path)` if initialized, `None` otherwise.
pub fn fnft_library_path() -> Option<String> {
    crate::sys::library_path()
}
