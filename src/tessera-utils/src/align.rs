//! Utilities for converting between bit and byte granularity.

/// Aligns `value` down to the next multiple of `align`.
///
/// # Panics
///
/// Panics in debug mode when `align` is not a power of two.
#[inline(always)]
pub const fn align_down(value: usize, align: usize) -> usize {
    debug_assert!(align.is_power_of_two());
    value & !(align - 1)
}

/// Aligns `value` up to the next multiple of `align`.
///
/// # Panics
///
/// Panics in debug mode when `align` is not a power of two.
#[inline(always)]
pub const fn align_up(value: usize, align: usize) -> usize {
    align_down(value + align - 1, align)
}

/// Gets the number of bytes needed to store `bits` bits, counting a
/// trailing partial byte as a whole one.
#[inline(always)]
pub const fn bits_to_bytes(bits: usize) -> usize {
    align_up(bits, u8::BITS as usize) >> 3
}

/// Gets the number of whole bytes spanned by `bits` bits.
#[inline(always)]
pub const fn whole_bytes(bits: usize) -> usize {
    bits >> 3
}
