//! FNFT basic type definitions
//!
//! Mirrors the primitive typedefs of `fnft_numtypes.h`.

#![allow(non_camel_case_types)]

pub use std::os::raw::{c_char, c_int, c_void};

/// `FNFT_INT` is an `int32_t`.
pub type FNFT_INT = i32;

/// `FNFT_UINT` is a `size_t`.
pub type FNFT_UINT = usize;

/// `FNFT_REAL` is a `double`.
pub type FNFT_REAL = f64;

/// `FNFT_COMPLEX` is a C99 `double complex`.
///
/// `Complex64` is `#[repr(C)]` with the real part first, which matches the
/// C99 layout of two consecutive doubles.
pub type FNFT_COMPLEX = num_complex::Complex64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_layout_matches_two_doubles() {
        assert_eq!(std::mem::size_of::<FNFT_COMPLEX>(), 2 * std::mem::size_of::<FNFT_REAL>());
        assert_eq!(std::mem::align_of::<FNFT_COMPLEX>(), std::mem::align_of::<FNFT_REAL>());

        let z = [FNFT_COMPLEX::new(1.5, -2.5)];
        let raw: &[FNFT_REAL] =
            unsafe { std::slice::from_raw_parts(z.as_ptr() as *const FNFT_REAL, 2) };
        assert_eq!(raw, &[1.5, -2.5]);
    }
}
