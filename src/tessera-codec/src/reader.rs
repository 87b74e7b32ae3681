use tessera_bit_buf::{utils::sign_extend, BitReader};
use tessera_utils::hints::cold_path;

use crate::{varint, Decode, Error, ReaderOptions};

/// A sequential decoder over a borrowed byte range.
///
/// Mirrors [`Writer`](crate::Writer): every `write_*` operation has a
/// `read_*` counterpart which consumes exactly the bits it produced.
/// All reads check the remaining input before consuming anything, and
/// length prefixes are validated before memory is allocated for them.
#[derive(Debug)]
pub struct Reader<'a> {
    inner: BitReader<'a>,
    options: ReaderOptions,
}

impl<'a> Reader<'a> {
    /// Creates a [`Reader`] over `data` with default limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ReaderOptions::default())
    }

    /// Creates a [`Reader`] over `data` with the given limits.
    pub fn with_options(data: &'a [u8], options: ReaderOptions) -> Self {
        Self {
            inner: BitReader::new(data),
            options,
        }
    }

    /// Gets the options the reader was configured with.
    #[inline]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Gets the number of bits left in the input.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        self.inner.remaining_bits()
    }

    /// Runs `f` one nesting level deeper, failing once the configured
    /// recursion limit is exhausted.
    #[inline]
    pub fn nested<F, T>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        let outer = self.options.recursion_limit;
        self.options.recursion_limit = match outer.checked_sub(1) {
            Some(limit) if limit >= 0 => limit,
            _ => return Err(Error::RecursionLimit),
        };

        let res = f(self);

        self.options.recursion_limit = outer;

        res
    }

    /// Reads a single bit as a [`bool`].
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool, Error> {
        self.inner.read_bit().map_err(Into::into)
    }

    /// Reads an unsigned field of exactly `width` bits.
    #[inline]
    pub fn read_bits(&mut self, width: u32) -> Result<u64, Error> {
        self.inner.read_bits(width).map_err(Into::into)
    }

    /// Reads a two's complement field of exactly `width` bits.
    #[inline]
    pub fn read_signed_bits(&mut self, width: u32) -> Result<i64, Error> {
        let v = self.read_bits(width)?;
        Ok(sign_extend(v, width))
    }

    /// Reads an IEEE 754 single precision value from 32 bits.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32, Error> {
        self.read_bits(u32::BITS).map(|v| f32::from_bits(v as u32))
    }

    /// Reads a variable-length integer.
    ///
    /// Encodings that are longer than necessary or overflow 64 bits
    /// are rejected.
    pub fn read_var_int(&mut self) -> Result<u64, Error> {
        let mut value = 0;
        for idx in 0..varint::MAX_LEN {
            let byte = self.inner.read_bits(u8::BITS)? as u8;
            let payload = (byte & varint::PAYLOAD_MASK) as u64;
            let shift = idx as u32 * varint::PAYLOAD_BITS;

            // The last byte only has room for the topmost bit of a u64,
            // and a zero chunk after the first byte is never minimal.
            if (payload << shift) >> shift != payload || (idx != 0 && byte == 0) {
                cold_path();
                return Err(Error::MalformedVarInt);
            }
            value |= payload << shift;

            if byte & varint::CONTINUE == 0 {
                return Ok(value);
            }
        }

        cold_path();
        Err(Error::MalformedVarInt)
    }

    /// Reads a variable-length integer which must fit a [`u32`].
    ///
    /// Values above [`u32::MAX`] are rejected with
    /// [`Error::MalformedVarInt`] rather than truncated to their low
    /// 32 bits.
    #[inline]
    pub fn read_var_u32(&mut self) -> Result<u32, Error> {
        let v = self.read_var_int()?;
        u32::try_from(v).map_err(|_| Error::MalformedVarInt)
    }

    // Reads a length prefix and validates it against `limit`.
    fn read_length(&mut self, limit: usize) -> Result<usize, Error> {
        let declared = self.read_var_int()?;

        match usize::try_from(declared) {
            Ok(len) if len <= limit => Ok(len),
            _ => {
                cold_path();
                log::debug!("Rejecting length prefix {declared}; at most {limit} allowed");
                Err(Error::MalformedLength {
                    declared,
                    available: limit,
                })
            }
        }
    }

    /// Reads a length-prefixed byte string.
    ///
    /// The length is validated against the remaining input and
    /// [`ReaderOptions::max_string_len`] before any allocation.
    pub fn read_string(&mut self) -> Result<Vec<u8>, Error> {
        let len = self.read_length(self.options.max_string_len)?;

        // Checked after the prefix so its own bytes aren't counted.
        let available = self.inner.remaining_bytes();
        if len > available {
            cold_path();
            log::debug!("Rejecting string of {len} bytes; {available} bytes left");
            return Err(Error::MalformedLength {
                declared: len as u64,
                available,
            });
        }

        let mut out = vec![0; len];
        self.inner.read_bytes_into(&mut out)?;

        Ok(out)
    }

    /// Reads a length-prefixed string which must be valid UTF-8.
    pub fn read_utf8(&mut self) -> Result<String, Error> {
        let bytes = self.read_string()?;
        String::from_utf8(bytes).map_err(|e| e.utf8_error().into())
    }

    /// Reads a sequence element count, validated against
    /// [`ReaderOptions::max_sequence_len`].
    #[inline]
    pub fn read_sequence_len(&mut self) -> Result<usize, Error> {
        self.read_length(self.options.max_sequence_len)
    }

    /// Reads a composite value through its [`Decode`] implementation.
    #[inline]
    pub fn read<T: Decode>(&mut self) -> Result<T, Error> {
        T::decode(self)
    }

    /// Consumes the reader and checks that all input was used.
    ///
    /// Up to 7 zero bits of final byte padding are accepted.
    pub fn finish(mut self) -> Result<(), Error> {
        let bits = self.remaining_bits();
        if bits == 0 {
            return Ok(());
        }

        if bits < u8::BITS as usize && self.read_bits(bits as u32)? == 0 {
            Ok(())
        } else {
            Err(Error::TrailingData { bits })
        }
    }
}
