//! Buffer sizing helpers.
//!
//! None of these look at the data, so they can be used to pre-allocate before
//! the input is available.

/// Rounds `len` up to a multiple of 4, then reserves one symbol per byte, one
/// extra symbol per group and one trailing slot: `1 + s + s / 4`.
pub const fn required_capacity(len: usize) -> usize {
    let s = len.saturating_add(3) / 4 * 4;
    1usize.saturating_add(s).saturating_add(s / 4)
}

/// Upper bound of [`encode`](crate::encode) output for `input_len` raw bytes.
pub const fn encode_output_size(input_len: usize) -> usize {
    required_capacity(input_len)
}

/// Upper bound of decoded bytes for any valid input of `encoded_len` bytes.
///
/// Every `z` turns one input byte into four output bytes, which
/// [`required_capacity`] alone does not cover, so the larger of the two
/// bounds is returned.
pub const fn decode_output_size(encoded_len: usize) -> usize {
    let shared = required_capacity(encoded_len);
    let zeros = encoded_len.saturating_mul(4);
    if shared > zeros {
        shared
    } else {
        zeros
    }
}
