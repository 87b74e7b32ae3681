//! Encoders and decoders for the Tessera wire format.
//!
//! The format is a private contract between a sender and a receiver
//! built from the same definitions. It carries no type tags, no field
//! names and no version information: every value is the ordered
//! concatenation of its fields, packed at bit granularity.
//!
//! | Field kind      | Encoding                                                 |
//! |-----------------|----------------------------------------------------------|
//! | bool            | 1 bit                                                    |
//! | varint          | 7 payload bits per byte, MSB continues, low chunk first  |
//! | fixed-bits(N)   | exactly N bits, LSB first                                |
//! | string          | varint byte length, then the raw bytes                   |
//! | composite       | the fields of the value, in declared order               |
//!
//! Values implement [`Encode`] and [`Decode`] to describe their
//! layout in terms of [`Writer`] and [`Reader`] operations.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod composite;
pub use composite::{Decode, Encode};

mod error;
pub use error::Error;

mod options;
pub use options::ReaderOptions;

mod reader;
pub use reader::Reader;

pub mod varint;

mod writer;
pub use writer::Writer;

/// Encodes `value` into a freshly allocated byte vector.
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    let mut writer = Writer::new();
    value.encode(&mut writer)?;

    Ok(writer.finish())
}

/// Decodes a `T` spanning all of `data` with default limits.
pub fn from_bytes<T: Decode>(data: &[u8]) -> Result<T, Error> {
    from_bytes_with(ReaderOptions::default(), data)
}

/// Decodes a `T` spanning all of `data` with the given limits.
///
/// Fails with [`Error::TrailingData`] if anything besides final byte
/// padding is left after the value.
pub fn from_bytes_with<T: Decode>(options: ReaderOptions, data: &[u8]) -> Result<T, Error> {
    let mut reader = Reader::with_options(data, options);
    let value = T::decode(&mut reader)?;
    reader.finish()?;

    Ok(value)
}
