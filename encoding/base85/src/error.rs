use std::io;

/// Errors of the encoder and the decoders.
///
/// Positions are zero-based offsets into the encoded input. For a
/// [`DecodeContext`](crate::DecodeContext) they count every byte fed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Neither whitespace, an alphabet symbol, nor a `z` at a group boundary.
    #[error("invalid character {byte:#04x} at position {pos}")]
    InvalidCharacter { pos: usize, byte: u8 },

    /// A group whose value does not fit in 32 bits; `pos` is its last symbol.
    #[error("group ending at position {pos} overflows 32 bits")]
    Overflow { pos: usize },

    #[error("failed to grow output buffer to {requested} bytes")]
    AllocationFailure { requested: usize },

    #[error("output buffer too small: {required} bytes required, {capacity} available")]
    BufferTooSmall { required: usize, capacity: usize },

    /// The decode context was already finalized.
    #[error("decode context already finalized")]
    Finished,

    /// A previous error left the decode context unusable.
    #[error("decode context unusable after an earlier error")]
    Poisoned,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::AllocationFailure { .. } => io::ErrorKind::OutOfMemory,
            Error::Finished | Error::Poisoned => io::ErrorKind::Other,
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}
