use crate::alphabet::{decode_value, is_whitespace, RADIX, ZERO_GROUP};
use crate::size::required_capacity;
use crate::{Error, Result};

/// Digit value of the padding symbol `u`.
const PAD_DIGIT: u8 = RADIX as u8 - 1;

/// Decodes 5 digits to 4 bytes.
///
/// Assumes that the 5 symbols are already mapped to digits using
/// [`decode_value`]. Returns `None` if the group is larger than `u32::MAX`,
/// which only happens for corrupted input.
pub const fn decode_group([a, b, c, d, e]: [u8; 5]) -> Option<[u8; 4]> {
    // four digits stay below 85^4, no overflow possible yet
    let q = ((a as u32 * RADIX + b as u32) * RADIX + c as u32) * RADIX + d as u32;
    if q > u32::MAX / RADIX {
        return None;
    }
    let q = q * RADIX;
    if q > u32::MAX - e as u32 {
        return None;
    }
    Some((q + e as u32).to_be_bytes())
}

/// Collects digits into groups, shared by the one-shot and the incremental
/// decoder.
#[derive(Debug, Default, Clone)]
pub(crate) struct GroupAccumulator {
    hold: [u8; 5],
    pending: usize,
    /// Position of the last symbol pushed, reported on overflow.
    last: usize,
}

impl GroupAccumulator {
    /// Number of symbols waiting for the rest of their group, always < 5.
    pub(crate) fn pending(&self) -> usize {
        self.pending
    }

    /// Decodes `input`, whose first byte sits at offset `base` of the whole
    /// stream, and hands each completed word to `emit`.
    pub(crate) fn feed<F>(&mut self, input: &[u8], base: usize, mut emit: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        for (i, &byte) in input.iter().enumerate() {
            let pos = base + i;
            if is_whitespace(byte) {
                continue;
            }
            if byte == ZERO_GROUP {
                if self.pending != 0 {
                    return Err(Error::InvalidCharacter { pos, byte });
                }
                emit(&[0; 4])?;
                continue;
            }

            let digit = decode_value(byte).ok_or(Error::InvalidCharacter { pos, byte })?;
            self.hold[self.pending] = digit;
            self.pending += 1;
            self.last = pos;
            if self.pending == self.hold.len() {
                self.pending = 0;
                let word = decode_group(self.hold).ok_or(Error::Overflow { pos })?;
                emit(&word)?;
            }
        }
        Ok(())
    }

    /// Flushes a short trailing group: pads it with `u` and keeps one byte
    /// less than the number of pending symbols.
    pub(crate) fn finish<F>(&mut self, mut emit: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> Result<()>,
    {
        let pending = std::mem::take(&mut self.pending);
        if pending == 0 {
            return Ok(());
        }

        self.hold[pending..].fill(PAD_DIGIT);
        let word = decode_group(self.hold).ok_or(Error::Overflow { pos: self.last })?;
        log::trace!("short group of {} symbols at {}", pending, self.last);
        let keep = &word[..pending - 1];
        if keep.is_empty() {
            return Ok(());
        }
        emit(keep)
    }
}

/// Caller region of [`decode_into`]; counts only when there is none.
struct Output<'a> {
    buf: Option<&'a mut [u8]>,
    written: usize,
    overrun: bool,
}

impl Output<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.written + bytes.len();
        if let Some(buf) = self.buf.as_deref_mut() {
            match buf.get_mut(self.written..end) {
                Some(dst) if !self.overrun => dst.copy_from_slice(bytes),
                _ => self.overrun = true,
            }
        }
        self.written = end;
        Ok(())
    }
}

/// Decodes Ascii85 text into `out`, or only counts the decoded bytes when
/// `out` is `None`.
///
/// Whitespace is skipped anywhere. `z` is only accepted between groups.
/// Returns the number of decoded bytes in both modes, so the usual pattern is
/// to call it once with `None`, allocate, then call it again.
///
/// If `out` is too short nothing is written past its end and
/// [`Error::BufferTooSmall`] reports the full required length.
pub fn decode_into(input: &[u8], out: Option<&mut [u8]>) -> Result<usize> {
    let mut output = Output {
        buf: out,
        written: 0,
        overrun: false,
    };

    let mut acc = GroupAccumulator::default();
    acc.feed(input, 0, |word| output.write(word))?;
    acc.finish(|word| output.write(word))?;

    if output.overrun {
        return Err(Error::BufferTooSmall {
            required: output.written,
            capacity: output.buf.map_or(0, |buf| buf.len()),
        });
    }
    Ok(output.written)
}

/// Number of bytes `input` decodes to.
pub fn decoded_len(input: &[u8]) -> Result<usize> {
    decode_into(input, None)
}

/// Decodes Ascii85 text.
///
/// Delimiters are not accepted here, see [`decode_framed`](crate::decode_framed).
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(required_capacity(input.len()));

    let mut acc = GroupAccumulator::default();
    acc.feed(input, 0, |word| {
        out.extend_from_slice(word);
        Ok(())
    })?;
    acc.finish(|word| {
        out.extend_from_slice(word);
        Ok(())
    })?;

    Ok(out)
}
