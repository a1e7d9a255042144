use crate::alphabet::{encode_symbol, RADIX, ZERO_GROUP};
use crate::{Error, Result};

fn divmod(n: u32, m: u32) -> (u32, u32) {
    (n / m, n % m)
}

/// Encodes 4 bytes to 5 symbols, most significant symbol first.
fn encode_word(c: [u8; 4]) -> [u8; 5] {
    let n = u32::from_be_bytes(c);
    let (n, e) = divmod(n, RADIX);
    let (n, d) = divmod(n, RADIX);
    let (n, c) = divmod(n, RADIX);
    let (a, b) = divmod(n, RADIX);

    [a, b, c, d, e].map(|digit| encode_symbol(digit as u8))
}

/// One encoded group: `z`, 5 symbols, or a truncated trailing group.
struct Group {
    symbols: [u8; 5],
    len: usize,
}

impl Group {
    fn as_bytes(&self) -> &[u8] {
        &self.symbols[..self.len]
    }
}

/// Encoded groups of `data`, in order.
///
/// Full zero groups become `z`. A trailing group of `n` bytes is zero padded
/// and truncated to `n + 1` symbols, never `z`.
fn groups(data: &[u8]) -> impl Iterator<Item = Group> + '_ {
    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();
    let tail = (!remainder.is_empty()).then(|| {
        let mut c = [0; 4];
        c[..remainder.len()].copy_from_slice(remainder);
        Group {
            symbols: encode_word(c),
            len: remainder.len() + 1,
        }
    });

    chunks
        .map(|chunk| {
            let mut c = [0; 4];
            c.copy_from_slice(chunk);
            if c == [0; 4] {
                Group {
                    symbols: [ZERO_GROUP, 0, 0, 0, 0],
                    len: 1,
                }
            } else {
                Group {
                    symbols: encode_word(c),
                    len: 5,
                }
            }
        })
        .chain(tail)
}

/// Encodes `data` as Ascii85 text, without `<~`/`~>` delimiters.
pub fn encode(data: &[u8]) -> String {
    let mut buf = Vec::with_capacity(encoded_len(data));
    for group in groups(data) {
        buf.extend_from_slice(group.as_bytes());
    }
    // every emitted byte is in `b'!'..=b'z'`
    buf.into_iter().map(char::from).collect()
}

/// Encodes `data` into `out`, returning the number of bytes written.
///
/// A region of [`encode_output_size`](crate::encode_output_size) bytes is
/// always large enough. A region shorter than [`encoded_len`] fails with [`Error::BufferTooSmall`] before
/// anything is written.
pub fn encode_into(data: &[u8], out: &mut [u8]) -> Result<usize> {
    let required = encoded_len(data);
    if out.len() < required {
        return Err(Error::BufferTooSmall {
            required,
            capacity: out.len(),
        });
    }

    let mut written = 0;
    for group in groups(data) {
        let bytes = group.as_bytes();
        out[written..written + bytes.len()].copy_from_slice(bytes);
        written += bytes.len();
    }
    Ok(written)
}

/// Exact length of [`encode`] output.
pub fn encoded_len(data: &[u8]) -> usize {
    let chunks = data.chunks_exact(4);
    let tail = match chunks.remainder().len() {
        0 => 0,
        n => n + 1,
    };
    chunks
        .map(|chunk| if chunk == [0u8; 4] { 1 } else { 5 })
        .sum::<usize>()
        + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::encode_output_size;
    use test_case::test_case;

    #[test]
    fn successfull_encode() {
        let tests = crate::tests::encode_samples();

        for (i, (plain, codec)) in tests.into_iter().enumerate() {
            let encoded = encode(plain);
            assert_eq!(
                encoded, codec,
                "Couldn't encode test case #{} ({})",
                i, codec
            );
            assert_eq!(encoded_len(plain), codec.len());
        }
    }

    #[test]
    fn zero_group_shorthand() {
        assert_eq!(encode(&[0; 4]), "z");
        assert_eq!(encode(&[0; 8]), "zz");
        assert_eq!(encode(&[0, 0, 0, 0, 1, 0, 0, 0]), "z!<<*\"");
    }

    #[test_case(&[0] => "!!")]
    #[test_case(&[0, 0] => "!!!")]
    #[test_case(&[0, 0, 0] => "!!!!")]
    #[test_case(&[0, 0, 0, 0, 0] => "z!!")]
    fn short_zero_group_has_no_shorthand(data: &[u8]) -> String {
        encode(data)
    }

    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    fn short_group_length(n: usize) {
        let data = [0xa5; 3];
        assert_eq!(encode(&data[..n]).len(), n + 1);
    }

    #[test]
    fn max_group() {
        assert_eq!(encode(&[0xff; 4]), "s8W-!");
    }

    #[test]
    fn encode_into_matches_encode() {
        let plain = &crate::tests::EXAMPLE_PLAIN[..];
        let mut out = vec![0; encode_output_size(plain.len())];
        let n = encode_into(plain, &mut out).unwrap();
        assert_eq!(&out[..n], crate::tests::EXAMPLE_CODEC.as_bytes());
    }

    #[test]
    fn encode_into_exact_region() {
        let mut out = [0; 5];
        assert_eq!(encode_into(b"Man ", &mut out), Ok(5));
        assert_eq!(&out, b"9jqo^");
    }

    #[test]
    fn encode_into_rejects_small_region() {
        let mut out = [0xaa; 6];
        assert_eq!(
            encode_into(b"Man X", &mut out),
            Err(Error::BufferTooSmall {
                required: 7,
                capacity: 6,
            })
        );
        assert_eq!(out, [0xaa; 6]);

        let mut out = [0; 7];
        assert_eq!(encode_into(b"Man X", &mut out), Ok(7));
        assert_eq!(&out, b"9jqo^=9");
    }
}
