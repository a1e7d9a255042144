//! Incremental decoding for input whose total length is not known up front.

use std::io;

use crate::decode::GroupAccumulator;
use crate::size::decode_output_size;
use crate::{Error, Result};

/// Initial output capacity of [`DecodeContext::new`].
pub const INITIAL_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Open,
    Finished,
    Poisoned,
}

/// Decodes Ascii85 text fed in arbitrary chunks into a buffer it owns.
///
/// A group split across two [`feed`](Self::feed) calls is held back until its
/// last symbol arrives. Call [`finalize`](Self::finalize) once at the end to
/// flush a short trailing group.
///
/// ```
/// use base85::DecodeContext;
///
/// let mut ctx = DecodeContext::new();
/// ctx.feed(b"9jq")?;
/// ctx.feed(b"o^=9")?;
/// ctx.finalize()?;
/// assert_eq!(ctx.output(), b"Man X");
/// # Ok::<(), base85::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DecodeContext {
    acc: GroupAccumulator,
    out: Vec<u8>,
    consumed: usize,
    state: State,
}

impl DecodeContext {
    pub fn new() -> Self {
        DecodeContext::from_buffer(Vec::with_capacity(INITIAL_CAPACITY))
    }

    /// Starts with room for `capacity` decoded bytes.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut out = Vec::new();
        out.try_reserve_exact(capacity).map_err(|err| {
            log::debug!("allocating {} bytes of output failed: {}", capacity, err);
            Error::AllocationFailure {
                requested: capacity,
            }
        })?;
        Ok(DecodeContext::from_buffer(out))
    }

    /// Sized for `encoded_len` bytes of input, so decoding that much never grows
    /// the buffer.
    pub fn for_encoded_len(encoded_len: usize) -> Result<Self> {
        Self::try_with_capacity(decode_output_size(encoded_len))
    }

    fn from_buffer(out: Vec<u8>) -> Self {
        DecodeContext {
            acc: GroupAccumulator::default(),
            out,
            consumed: 0,
            state: State::Open,
        }
    }

    fn check_open(&self) -> Result<()> {
        match self.state {
            State::Open => Ok(()),
            State::Finished => Err(Error::Finished),
            State::Poisoned => Err(Error::Poisoned),
        }
    }

    /// Decodes the next chunk of input.
    ///
    /// Errors carry positions counted from the first byte ever fed. After any
    /// error the context is unusable and further calls return
    /// [`Error::Poisoned`].
    pub fn feed(&mut self, chunk: &[u8]) -> Result<()> {
        self.check_open()?;

        let out = &mut self.out;
        let res = self
            .acc
            .feed(chunk, self.consumed, |word| append(out, word));
        self.consumed += chunk.len();
        self.poison_on_err(res)
    }

    /// Flushes a pending short group. A context with nothing pending finalizes
    /// without output.
    pub fn finalize(&mut self) -> Result<()> {
        self.check_open()?;

        let out = &mut self.out;
        let res = self.acc.finish(|word| append(out, word));
        self.poison_on_err(res)?;
        self.state = State::Finished;
        Ok(())
    }

    fn poison_on_err(&mut self, res: Result<()>) -> Result<()> {
        if res.is_err() {
            self.state = State::Poisoned;
        }
        res
    }

    /// Bytes decoded so far.
    pub fn output(&self) -> &[u8] {
        &self.out
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.out.capacity()
    }

    /// Symbols of an incomplete group held back for the next call.
    pub fn pending(&self) -> usize {
        self.acc.pending()
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Takes the decoded bytes out of the context.
    pub fn into_inner(self) -> Vec<u8> {
        self.out
    }
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends one word, doubling the capacity when fewer than 4 bytes are free.
fn append(out: &mut Vec<u8>, word: &[u8]) -> Result<()> {
    if out.capacity() - out.len() < 4 {
        let requested = (out.capacity() * 2).max(out.len() + 4);
        out.try_reserve_exact(requested - out.len()).map_err(|err| {
            log::debug!("growing output to {} bytes failed: {}", requested, err);
            Error::AllocationFailure { requested }
        })?;
        log::debug!("grew output buffer to {} bytes", out.capacity());
    }
    out.extend_from_slice(word);
    Ok(())
}

/// Feeds everything written; call [`DecodeContext::finalize`] after the last
/// write.
impl io::Write for DecodeContext {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
