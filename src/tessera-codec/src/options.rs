/// Limits applied by a [`Reader`](crate::Reader) to untrusted input.
///
/// Every length prefix is checked against the remaining input first;
/// these ceilings are applied on top of that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReaderOptions {
    /// The largest string, in bytes, that will be accepted.
    pub max_string_len: usize,
    /// The largest number of elements a sequence may declare.
    pub max_sequence_len: usize,
    /// A recursion limit for nested data to avoid stack
    /// overflows during deserialization.
    pub recursion_limit: i8,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_string_len: 1 << 20,
            max_sequence_len: 1 << 16,
            recursion_limit: i8::MAX,
        }
    }
}
