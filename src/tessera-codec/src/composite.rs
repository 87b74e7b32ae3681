//! The contract for structured values on the wire.
//!
//! A composite type encodes as the plain concatenation of its fields
//! in declaration order, with no framing of its own. Decoding must
//! visit the very same fields in the very same order.

use crate::{Error, Reader, Writer};

/// A value which knows how to serialize itself into a [`Writer`].
pub trait Encode {
    /// Writes all fields of `self` in their declared order.
    fn encode(&self, writer: &mut Writer) -> Result<(), Error>;
}

/// A value which knows how to deserialize itself from a [`Reader`].
pub trait Decode: Sized {
    /// Reads all fields in the order [`Encode::encode`] wrote them.
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error>;
}

impl<T: Encode + ?Sized> Encode for &T {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        (**self).encode(writer)
    }
}

impl Encode for bool {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_bool(*self)
    }
}

impl Decode for bool {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_bool()
    }
}

impl Encode for str {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_string(self)
    }
}

impl Encode for String {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_string(self)
    }
}

impl Decode for String {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.read_utf8()
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        (**self).encode(writer)
    }
}

impl<T: Decode> Decode for Box<T> {
    #[inline]
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        reader.nested(T::decode).map(Box::new)
    }
}

// Optional values carry a presence bit in front of them.
impl<T: Encode> Encode for Option<T> {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_bool(self.is_some())?;
        match self {
            Some(v) => v.encode(writer),
            None => Ok(()),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        if reader.read_bool()? {
            reader.nested(T::decode).map(Some)
        } else {
            Ok(None)
        }
    }
}

// Sequences carry their element count as a varint in front of them.
impl<T: Encode> Encode for [T] {
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_var_int(self.len() as u64)?;
        self.iter().try_for_each(|v| v.encode(writer))
    }
}

impl<T: Encode> Encode for Vec<T> {
    #[inline]
    fn encode(&self, writer: &mut Writer) -> Result<(), Error> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, Error> {
        let len = reader.read_sequence_len()?;

        // Don't let the declared count alone drive the allocation.
        let mut out = Vec::with_capacity(len.min(reader.remaining_bits()));
        reader.nested(|reader| {
            for _ in 0..len {
                out.push(T::decode(reader)?);
            }
            Ok(())
        })?;

        Ok(out)
    }
}
