//! Error types for FNFT library loading and transform calls

use thiserror::Error;

use crate::sys::FNFT_INT;

/// Result type for FNFT binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading FNFT or marshalling a call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The shared library could not be opened
    #[error("Failed to load FNFT library from '{path}': {reason}")]
    LibraryLoad { path: String, reason: String },

    /// A required entry point is missing from the loaded library
    #[error("Failed to load symbol '{symbol}': {reason}")]
    SymbolLoad { symbol: String, reason: String },

    /// The library is already loaded from a different path
    #[error("FNFT library already initialized from '{0}'")]
    AlreadyInitialized(String),

    /// No library has been loaded yet
    #[error("FNFT library not initialized. Call fnft_init() first.")]
    NotInitialized,

    /// The environment variable naming the library path is unset or empty
    #[error("Environment variable {0} is not set")]
    MissingLibraryPath(String),

    /// An argument cannot be converted into the native layout
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The native entry point returned a nonzero status
    #[error("FNFT returned error code {code}")]
    Native { code: FNFT_INT },
}
