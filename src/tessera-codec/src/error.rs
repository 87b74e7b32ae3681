use std::str::Utf8Error;

use thiserror::Error;

/// Errors that may occur while encoding or decoding wire data.
///
/// A decode error invalidates only the value being decoded; the
/// [`Reader`](crate::Reader) it came from should be discarded.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A read requested more bits than are left in the input.
    #[error("buffer underrun: {requested} bits requested, {remaining} remaining")]
    BufferUnderrun { requested: usize, remaining: usize },

    /// A decoded length or count prefix exceeds the remaining input
    /// or the configured ceiling for it.
    #[error("malformed length prefix: declared {declared}, at most {available} allowed")]
    MalformedLength { declared: u64, available: usize },

    /// A value does not fit into the bit width declared for it.
    #[error("value {value} does not fit into {width} bits")]
    OverflowOnWrite { value: i128, width: u32 },

    /// A fixed-width field was declared with a width outside of `1..=64`.
    #[error("bit width {0} is outside of 1..=64")]
    InvalidWidth(u32),

    /// A variable-length integer was overlong, not minimally encoded
    /// or out of range for its target type.
    #[error("malformed variable-length integer")]
    MalformedVarInt,

    /// Failed to decode an UTF-8 string where one was expected.
    #[error("{0}")]
    InvalidUtf8(#[from] Utf8Error),

    /// Configured recursion limit was exceeded during decoding.
    #[error("recursion limit exceeded")]
    RecursionLimit,

    /// A write did not fit into the bit buffer's staging capacity.
    #[error("bit buffer capacity overflow: {requested} bits requested, {available} available")]
    CapacityOverflow { requested: u32, available: u32 },

    /// Data was left over after decoding a complete value.
    #[error("{bits} bits of trailing data after decoded value")]
    TrailingData { bits: usize },
}

impl From<tessera_bit_buf::Error> for Error {
    fn from(e: tessera_bit_buf::Error) -> Self {
        use tessera_bit_buf::Error as E;

        match e {
            E::BufferUnderrun {
                requested,
                remaining,
            } => Self::BufferUnderrun {
                requested,
                remaining,
            },
            E::InvalidWidth(width) => Self::InvalidWidth(width),
            E::CapacityOverflow {
                requested,
                available,
            } => Self::CapacityOverflow {
                requested,
                available,
            },
        }
    }
}
