use tessera_utils::align::bits_to_bytes;

use crate::{check_width, mask, Error};

// The maximum number of bits that can be buffered before comitting to the
// output sink.
//
// We target to have an amount between 56 and 63 bits in the buffer. Since
// we only commit whole bytes, it means the low 3 bits never change.
const BUFFER_SIZE: u32 = u64::BITS - 1;

// The maximum number of bits that can be committed at once.
//
// Since we write whole bytes only, this is the smallest value where a whole
// byte doesn't fit in anymore.
const WRITABLE_BITS: u32 = BUFFER_SIZE & !7;

/// A buffer which enables bit-based serialization of data.
///
/// Individual bit writing starts at the LSB of the byte, working
/// towards the MSB.
///
/// The writer is append-only: there is no way to seek back and
/// overwrite bits which were already written.
#[derive(Debug, Default)]
pub struct BitWriter {
    // The inner buffer where data is being written to.
    inner: Vec<u8>,

    // A buffer for bits which are not committed to the
    // data buffer yet.
    buf: u64,

    // How many bits in `buf` are currently filled.
    count: u32,
}

impl BitWriter {
    /// Creates an empty [`BitWriter`].
    pub const fn new() -> Self {
        Self {
            inner: Vec::new(),
            buf: 0,
            count: 0,
        }
    }

    /// Creates an empty [`BitWriter`] to a given output vector.
    ///
    /// This is useful if you want to reuse existing buffer allocations.
    /// Any previous contents of `vec` are discarded.
    pub fn from_vec(mut vec: Vec<u8>) -> Self {
        vec.clear();
        Self {
            inner: vec,
            buf: 0,
            count: 0,
        }
    }

    /// Gets the number of bits currently in the buffer.
    #[inline]
    pub fn written_bits(&self) -> usize {
        (self.inner.len() << 3) + self.count as usize
    }

    /// Gets the number of bytes the output will occupy once the
    /// trailing partial byte is flushed.
    #[inline]
    pub fn written_bytes(&self) -> usize {
        bits_to_bytes(self.written_bits())
    }

    /// Indicates how much capacity is still left for writing bits until
    /// [`Self::commit`] must be called.
    #[inline]
    pub fn remaining(&self) -> u32 {
        WRITABLE_BITS.saturating_sub(self.count)
    }

    /// Whether the next bit will be written at a byte boundary.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.count & 7 == 0
    }

    /// Gets a view of the buffer's committed storage as a byte slice.
    ///
    /// Bits which are still staged are not part of this view; call
    /// [`Self::commit`] or [`Self::realign_to_byte`] first.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.inner
    }

    /// Consumes the [`BitWriter`] and returns the committed bytes.
    ///
    /// Staged bits are dropped. Use [`Self::finish`] to flush them.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Flushes all bits with the last partial byte zero-padded and
    /// returns the byte buffer.
    pub fn finish(mut self) -> Vec<u8> {
        self.realign_to_byte();
        self.inner
    }

    /// Discards all written data while keeping the allocation around.
    pub fn reset(&mut self) {
        self.inner.clear();
        self.buf = 0;
        self.count = 0;
    }

    /// Reserves capacity for at least `nbytes` more bytes in the
    /// output buffer.
    ///
    /// When the data format allows making educated guesses about
    /// size consumption, use this to optimize memory allocation.
    #[inline]
    pub fn reserve(&mut self, nbytes: usize) {
        self.inner.reserve(nbytes);
    }

    /// Flushes all currently buffered whole bytes to the data buffer.
    pub fn commit(&mut self) {
        debug_assert!(self.count <= BUFFER_SIZE);

        let whole = self.count as usize >> 3;
        if whole != 0 {
            let buf = self.buf.to_le_bytes();
            self.inner.extend_from_slice(&buf[..whole]);
        }

        // Remove the written bits from the internal state.
        self.buf >>= self.count & WRITABLE_BITS;
        self.count &= 7;
    }

    // Stages `nbits` bits of `value`. Capacity must be checked by the caller.
    #[inline(always)]
    fn put(&mut self, value: u64, nbits: u32) {
        debug_assert!(nbits <= WRITABLE_BITS && nbits <= BUFFER_SIZE - self.count);

        self.buf |= (value & mask(nbits)) << self.count;
        self.count += nbits;
    }

    /// Adds `nbits` bits from `value` to the internal buffer, if capacity
    /// is available in the buffer.
    ///
    /// Bits of `value` above `nbits` are masked off.
    pub fn offer(&mut self, value: u64, nbits: u32) -> Result<(), Error> {
        if nbits <= WRITABLE_BITS && nbits <= (BUFFER_SIZE - self.count) {
            self.put(value, nbits);
            Ok(())
        } else {
            Err(Error::CapacityOverflow {
                requested: nbits,
                available: self.remaining(),
            })
        }
    }

    /// Writes the low `nbits` bits of `value`, committing to the output
    /// vector as often as necessary.
    ///
    /// Bits of `value` above `nbits` are masked off. `nbits` must be in
    /// `1..=64`.
    pub fn write_bits(&mut self, mut value: u64, mut nbits: u32) -> Result<(), Error> {
        check_width(nbits)?;

        while nbits > 0 {
            self.commit();

            let chunk = nbits.min(self.remaining());
            self.put(value, chunk);

            // `chunk` never exceeds `WRITABLE_BITS`, so this can't overflow.
            value >>= chunk;
            nbits -= chunk;
        }

        Ok(())
    }

    /// Flushes remaining bits to the output vector, with partially initialized
    /// bytes being zero-padded.
    pub fn realign_to_byte(&mut self) {
        // Flush whole bytes to the buffer. If no partial byte is left, we're done.
        self.commit();

        // The remainder of our buffer is a partial byte with at most 7 bits set.
        // Everything above `count` is zero, so it serves as its own padding.
        if self.count != 0 {
            self.inner.push(self.buf as u8);

            self.buf = 0;
            self.count = 0;
        }
    }

    /// Writes whole bytes from `buf` at the current bit position.
    ///
    /// When the writer is byte-aligned, the bytes are copied straight
    /// into the output vector.
    pub fn write_bytes(&mut self, buf: &[u8]) {
        self.commit();

        if self.count == 0 {
            self.inner.extend_from_slice(buf);
            return;
        }

        self.reserve(buf.len());
        for &byte in buf {
            if self.remaining() < u8::BITS {
                self.commit();
            }
            self.put(byte as u64, u8::BITS);
        }
    }
}
