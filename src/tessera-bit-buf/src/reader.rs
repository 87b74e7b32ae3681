use tessera_utils::{align::whole_bytes, hints::cold_path};

use crate::{check_width, mask, Error};

// The maximum number of bits that can be stored in lookahead.
//
// We target to have an amount between 56 and 63 bits in the
// buffer. Since we only refill by whole bytes, it means the
// low 3 bits never change.
const BUFFER_SIZE: u32 = u64::BITS - 1;

// The maximum number of bits to be consumed after a refill.
//
// Since we refill by whole bytes only, this is the smallest
// value where a whole byte doesn't fit in anymore.
const CONSUMABLE_BITS: u32 = BUFFER_SIZE & !7;

/// A buffer which enables bit-based deserialization of data.
///
/// Individual bit reading starts at the LSB of the byte, working
/// towards the MSB.
///
/// [`Self::read_bits`] manages the lookahead buffer on its own.
/// Users of the lower-level [`Self::peek`] and [`Self::consume`]
/// must call [`Self::refill_bits`] first and do appropriate checks
/// based on how many bits are left.
#[derive(Debug)]
pub struct BitReader<'a> {
    // The spanned byte view.
    data: &'a [u8],

    // Index of the next byte where the bit lookahead
    // buffer will be fetched from.
    pos: usize,

    // The pre-fetched lookahead buffer to extract bits at.
    lookahead: u64,

    // The number of bits available for consumption from
    // the `lookahead` buffer.
    remaining: u32,
}

impl<'a> BitReader<'a> {
    /// Creates a new [`BitReader`] over a given byte slice.
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            lookahead: 0,
            remaining: 0,
        }
    }

    #[inline(always)]
    fn can_read_in_fast_path(&self) -> bool {
        self.untouched_bytes() >= 8
    }

    /// Gets the remaining untouched bytes in the reader.
    #[inline]
    pub fn untouched_bytes(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Gets the total number of remaining bits in the reader.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        (self.untouched_bytes() << 3) + self.remaining as usize
    }

    /// Gets the number of whole bytes left in the reader, ignoring
    /// a partially consumed byte at the current position.
    #[inline]
    pub fn remaining_bytes(&self) -> usize {
        whole_bytes(self.remaining_bits())
    }

    /// Gets the bits currently buffered in the reader.
    #[inline]
    pub fn buffered_bits(&self) -> u32 {
        self.remaining
    }

    /// Whether the next bit to read starts a new byte.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.remaining & 7 == 0
    }

    /// Invalidates the current bit lookahead and resets the position
    /// back to the first untouched byte.
    ///
    /// Untouched in this case means no partial bit reads overlapping
    /// with the memory region of a byte have happened yet.
    #[inline(always)]
    pub fn realign_to_byte(&mut self) {
        // Moving back is fine since we move within a fraction of the
        // increment done by a refill operation.
        self.pos -= self.remaining as usize >> 3;

        self.lookahead = 0;
        self.remaining = 0;
    }

    #[inline]
    fn refill_branchless(&mut self) {
        debug_assert!(self.can_read_in_fast_path());

        // Read from current position and prefill the entire lookahead.
        let mut chunk = [0; 8];
        chunk.copy_from_slice(&self.data[self.pos..self.pos + 8]);
        self.lookahead |= u64::from_le_bytes(chunk) << self.remaining;

        // Advance the read cursor for the next refill. Bits shifted in
        // past `remaining` are the bytes at the new position, so they
        // are overwritten by the same values on the next refill.
        self.pos += (CONSUMABLE_BITS as usize >> 3) - ((self.remaining as usize >> 3) & 7);

        // Update bit count to reflect full buffer.
        self.remaining |= CONSUMABLE_BITS;
    }

    #[inline]
    fn refill_slow(&mut self) {
        while self.remaining < CONSUMABLE_BITS {
            let Some(&byte) = self.data.get(self.pos) else {
                cold_path();
                break;
            };

            self.lookahead |= (byte as u64) << self.remaining;
            self.pos += 1;

            self.remaining += u8::BITS;
        }
    }

    /// Refills the bit lookahead buffer and returns the number of
    /// available bits for consumption.
    ///
    /// When this buffer is exhausted, another refill must be done.
    pub fn refill_bits(&mut self) -> u32 {
        debug_assert!(self.pos <= self.data.len());
        debug_assert!(self.remaining <= BUFFER_SIZE);

        if self.can_read_in_fast_path() {
            self.refill_branchless();
        } else {
            cold_path();
            self.refill_slow();
        }

        self.remaining
    }

    #[inline]
    fn underrun(&self, requested: usize) -> Error {
        cold_path();
        Error::BufferUnderrun {
            requested,
            remaining: self.remaining_bits(),
        }
    }

    /// Returns the next `count` bits from the internal buffer without removing
    /// them, if available.
    #[inline]
    pub fn peek(&self, count: u32) -> Result<u64, Error> {
        if count <= CONSUMABLE_BITS && count <= self.remaining {
            Ok(self.lookahead & mask(count))
        } else {
            Err(Error::BufferUnderrun {
                requested: count as usize,
                remaining: self.remaining as usize,
            })
        }
    }

    /// Removes `count` bits from the internal buffer, if available.
    #[inline]
    pub fn consume(&mut self, count: u32) -> Result<(), Error> {
        if count <= self.remaining {
            self.lookahead >>= count;
            self.remaining -= count;

            Ok(())
        } else {
            Err(Error::BufferUnderrun {
                requested: count as usize,
                remaining: self.remaining as usize,
            })
        }
    }

    /// Reads an `nbits` wide unsigned value, refilling the lookahead
    /// as needed.
    ///
    /// `nbits` must be in `1..=64`. Nothing is consumed when fewer
    /// than `nbits` bits are left in the input.
    pub fn read_bits(&mut self, nbits: u32) -> Result<u64, Error> {
        check_width(nbits)?;
        if nbits as usize > self.remaining_bits() {
            return Err(self.underrun(nbits as usize));
        }

        let mut value = 0;
        let mut shift = 0;
        let mut left = nbits;
        while left > 0 {
            if self.remaining < left {
                self.refill_bits();
            }

            let chunk = left.min(self.remaining).min(CONSUMABLE_BITS);
            let part = self.peek(chunk)?;
            self.consume(chunk)?;

            value |= part << shift;
            shift += chunk;
            left -= chunk;
        }

        Ok(value)
    }

    /// Reads a single bit as a [`bool`].
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool, Error> {
        self.read_bits(1).map(|v| v != 0)
    }

    /// Fills `out` with bytes read from the current bit position.
    ///
    /// When the reader is byte-aligned, the bytes are copied straight
    /// out of the underlying view. Nothing is consumed when the input
    /// holds fewer than `out.len()` bytes.
    pub fn read_bytes_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        let requested = out.len() << 3;
        if requested > self.remaining_bits() {
            return Err(self.underrun(requested));
        }

        if self.is_aligned() {
            self.realign_to_byte();

            let end = self.pos + out.len();
            out.copy_from_slice(&self.data[self.pos..end]);
            self.pos = end;
        } else {
            for byte in out.iter_mut() {
                *byte = self.read_bits(u8::BITS)? as u8;
            }
        }

        Ok(())
    }
}
