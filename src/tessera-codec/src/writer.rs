use tessera_bit_buf::{utils::fits_signed, BitWriter};

use crate::{varint, Encode, Error};

#[inline]
fn check_width(width: u32) -> Result<(), Error> {
    if (1..=u64::BITS).contains(&width) {
        Ok(())
    } else {
        Err(Error::InvalidWidth(width))
    }
}

/// An append-only encoder for wire data.
///
/// Fields are packed at bit granularity in the order they are written.
/// A [`Writer`] is meant to be used for a single value and then turned
/// into bytes with [`Writer::finish`].
///
/// Fixed-width writes reject values which do not fit the declared
/// width with [`Error::OverflowOnWrite`] instead of truncating them;
/// nothing is written in that case.
#[derive(Debug, Default)]
pub struct Writer {
    inner: BitWriter,
}

impl Writer {
    /// Creates an empty [`Writer`].
    pub const fn new() -> Self {
        Self {
            inner: BitWriter::new(),
        }
    }

    /// Creates an empty [`Writer`] that reuses the allocation of `vec`.
    pub fn from_vec(vec: Vec<u8>) -> Self {
        Self {
            inner: BitWriter::from_vec(vec),
        }
    }

    /// Gets the number of bits written so far.
    #[inline]
    pub fn written_bits(&self) -> usize {
        self.inner.written_bits()
    }

    /// Consumes the writer and returns the encoded bytes.
    ///
    /// A trailing partial byte is zero-padded.
    pub fn finish(self) -> Vec<u8> {
        self.inner.finish()
    }

    /// Writes a [`bool`] as a single bit.
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<(), Error> {
        self.inner.write_bits(value as u64, 1).map_err(Into::into)
    }

    /// Writes `value` as an unsigned field of exactly `width` bits.
    pub fn write_bits(&mut self, value: u64, width: u32) -> Result<(), Error> {
        check_width(width)?;
        if width < u64::BITS && value >> width != 0 {
            return Err(Error::OverflowOnWrite {
                value: value as i128,
                width,
            });
        }

        self.inner.write_bits(value, width).map_err(Into::into)
    }

    /// Writes `value` as a two's complement field of exactly `width` bits.
    pub fn write_signed_bits(&mut self, value: i64, width: u32) -> Result<(), Error> {
        check_width(width)?;
        if !fits_signed(value, width) {
            return Err(Error::OverflowOnWrite {
                value: value as i128,
                width,
            });
        }

        // Masking drops the sign extension above `width`.
        self.inner.write_bits(value as u64, width).map_err(Into::into)
    }

    /// Writes an IEEE 754 single precision value as 32 bits.
    #[inline]
    pub fn write_f32(&mut self, value: f32) -> Result<(), Error> {
        self.write_bits(value.to_bits() as u64, u32::BITS)
    }

    /// Writes `value` as a variable-length integer in its minimal
    /// byte count.
    pub fn write_var_int(&mut self, mut value: u64) -> Result<(), Error> {
        loop {
            let mut byte = value as u8 & varint::PAYLOAD_MASK;
            value >>= varint::PAYLOAD_BITS;

            if value != 0 {
                byte |= varint::CONTINUE;
            }
            self.inner.write_bits(byte as u64, u8::BITS)?;

            if value == 0 {
                break Ok(());
            }
        }
    }

    /// Writes a [`u32`] as a variable-length integer.
    #[inline]
    pub fn write_var_u32(&mut self, value: u32) -> Result<(), Error> {
        self.write_var_int(value as u64)
    }

    /// Writes a length-prefixed byte string.
    ///
    /// The bytes are emitted unmodified and without a terminator.
    pub fn write_string<S: AsRef<[u8]> + ?Sized>(&mut self, value: &S) -> Result<(), Error> {
        let bytes = value.as_ref();
        let len = bytes.len() as u64;

        self.inner.reserve(varint::encoded_len(len) + bytes.len());
        self.write_var_int(len)?;
        self.inner.write_bytes(bytes);

        Ok(())
    }

    /// Writes a composite value through its [`Encode`] implementation.
    #[inline]
    pub fn write<T: Encode + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        value.encode(self)
    }
}
