//! Framing constants and helpers for variable-length integers.
//!
//! Every byte carries 7 payload bits in its low bits and a continuation
//! flag in the MSB. Chunks are emitted least significant first, and
//! encoding stops at the first byte with the flag cleared.

use tessera_bit_buf::utils::significant_bits;

/// Mask of the payload bits in a varint byte.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// The continuation flag of a varint byte.
pub const CONTINUE: u8 = 0x80;

/// Number of payload bits per byte.
pub const PAYLOAD_BITS: u32 = 7;

/// The longest encoding of a [`u64`] in bytes.
pub const MAX_LEN: usize = (u64::BITS as usize).div_ceil(PAYLOAD_BITS as usize);

/// Gets the number of bytes the minimal encoding of `value` occupies.
#[inline]
pub fn encoded_len(value: u64) -> usize {
    significant_bits(value).div_ceil(PAYLOAD_BITS) as usize
}
