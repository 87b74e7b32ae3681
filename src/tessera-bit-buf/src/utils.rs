//! Miscellaneous utilities for working with bits.

/// Sign-extends an `nbits` wide value to [`i64`].
///
/// `nbits` must be in `1..=64`.
#[inline]
pub fn sign_extend(value: u64, nbits: u32) -> i64 {
    debug_assert!((1..=u64::BITS).contains(&nbits));

    let shift = u64::BITS - nbits;
    (value << shift) as i64 >> shift
}

/// Checks whether `value` is representable as a two's complement
/// integer of `nbits` bits.
#[inline]
pub fn fits_signed(value: i64, nbits: u32) -> bool {
    debug_assert!((1..=u64::BITS).contains(&nbits));

    sign_extend(value as u64, nbits) == value
}

/// Gets the minimal number of bits needed to represent `value`.
///
/// Zero is considered to need one bit.
#[inline]
pub fn significant_bits(value: u64) -> u32 {
    (u64::BITS - value.leading_zeros()).max(1)
}
