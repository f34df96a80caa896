//! Conversions from caller data into native buffers.

use fnft_ffi::sys::FNFT_COMPLEX;

/// Copy samples into a fresh contiguous complex buffer.
///
/// Real samples get a zero imaginary part.
pub(crate) fn complex_samples<T>(samples: &[T]) -> Vec<FNFT_COMPLEX>
where
    T: Copy + Into<FNFT_COMPLEX>,
{
    samples.iter().map(|&s| s.into()).collect()
}

/// Zero-filled output buffer of length `len`.
pub(crate) fn output_buffer(len: usize) -> Vec<FNFT_COMPLEX> {
    vec![FNFT_COMPLEX::default(); len]
}

/// Limit a count written back by the native call to the buffer capacity,
/// logging when the library reported more than it had room for.
pub(crate) fn reported_count(what: &'static str, reported: usize, capacity: usize) -> usize {
    if reported > capacity {
        tracing::warn!(
            what,
            reported,
            capacity,
            "native call reported more entries than allocated"
        );
    }
    crate::layout::clamp_count(reported, capacity)
}
