//! Provides bit level manipulation of data.
//!
//! Tessera's wire format packs fields at bit granularity: a boolean
//! costs one bit and a fixed-width field starts exactly where the
//! previous one ended. This crate implements the buffers underneath,
//! [`BitWriter`] for producing such data and [`BitReader`] for
//! consuming it.
//!
//! # Bit order
//!
//! Bits are written starting at the LSB of a byte, working towards
//! the MSB. Multi-bit values are emitted least significant bit first,
//! so a byte-aligned 32-bit value appears in little endian order.
//!
//! # Implementation
//!
//! The implementation is based on Fabian Giesen's [writeups],
//! specifically variant 4: both directions keep a 64-bit staging
//! buffer and move whole bytes between it and the byte storage.
//!
//! [writeups]: https://fgiesen.wordpress.com/2018/02/20/reading-bits-in-far-too-many-ways-part-2/

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use thiserror::Error;

mod reader;
pub use reader::BitReader;

mod writer;
pub use writer::BitWriter;

pub mod utils;

/// Errors produced by bit buffer operations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A read requested more bits than are left in the input.
    #[error("attempted to read {requested} bits with only {remaining} remaining")]
    BufferUnderrun { requested: usize, remaining: usize },

    /// The staging buffer cannot take the requested amount of bits
    /// before a commit.
    #[error("buffer capacity overflow: {requested} bits offered, {available} available")]
    CapacityOverflow { requested: u32, available: u32 },

    /// A bit width outside of `1..=64` was requested.
    #[error("bit width {0} is outside of 1..=64")]
    InvalidWidth(u32),
}

#[inline(always)]
pub(crate) const fn mask(nbits: u32) -> u64 {
    if nbits >= u64::BITS {
        u64::MAX
    } else {
        (1 << nbits) - 1
    }
}

#[inline]
pub(crate) fn check_width(nbits: u32) -> Result<(), Error> {
    if (1..=u64::BITS).contains(&nbits) {
        Ok(())
    } else {
        tessera_utils::hints::cold_path();
        Err(Error::InvalidWidth(nbits))
    }
}
