//! Low-level FNFT FFI bindings.
//!
//! The library is always loaded at runtime via libloading; there is no
//! build-time linking mode.

// Local type definitions
pub mod opts;
pub mod types;

// Function table and loading
pub mod funcs;

pub use opts::*;
pub use types::*;

pub use funcs::{
    functions, get_library, is_initialized, library_path, load_library, Functions, FnftKdvvFn,
    FnftNsepFn, FnftNsevFn,
};
