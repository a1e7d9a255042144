//! Adobe style `<~ ... ~>` delimiters around the encoded text.

use crate::{decode, encode, Result, END_SEQUENCE, START_SEQUENCE};

/// Encodes `data` and wraps it in `<~` and `~>`.
pub fn encode_framed(data: &[u8]) -> String {
    let body = encode(data);
    let mut framed = String::with_capacity(body.len() + START_SEQUENCE.len() + END_SEQUENCE.len());
    framed.push_str("<~");
    framed.push_str(&body);
    framed.push_str("~>");
    framed
}

/// Removes an optional leading `<~` and an optional trailing `~>`.
///
/// Whitespace around the delimiters is ignored.
pub fn strip_frame(data: &[u8]) -> &[u8] {
    let mut data = data.trim_ascii();
    if let Some(stripped) = data.strip_prefix(START_SEQUENCE) {
        data = stripped;
    }
    if let Some(stripped) = data.strip_suffix(END_SEQUENCE) {
        data = stripped;
    }
    data
}

/// Decodes text that may be wrapped in `<~` and `~>`.
pub fn decode_framed(data: &[u8]) -> Result<Vec<u8>> {
    decode(strip_frame(data))
}
