//! # Base85 Encoding
//!
//! base85 implements Ascii85 encoding. Arbitrary bytes are mapped to the
//! characters in range `b'!'..=b'u'`, 4 bytes to 5 characters. For more details
//! on the encoding scheme refer to [Wikipedia](https://en.wikipedia.org/wiki/Ascii85).
//!
//! The character `z` encodes four zero bytes and whitespace is skipped while
//! decoding. Any other character is rejected, as is a group whose value does
//! not fit in 32 bits. The plain functions neither write nor accept the
//! `<~`/`~>` delimiters; the `*_framed` variants do.
//!
//! ## Decode Example
//!
//! ```
//! use base85::decode;
//! const EXAMPLE_CODEC: &str = r#"9jqo^BlbD-BleB1DJ+*+F(f,q/0JhKF<GL>Cj@.4Gp$d7F!,L7@<6@)/0JDEF<G%<+EV:2F!,O<DJ+*.@<*K0@<6L(Df-\0Ec5e;DffZ(EZee.Bl.9pF"AGXBPCsi+DGm>@3BB/F*&OCAfu2/AKYi(DIb:@FD,*)+C]U=@3BN#EcYf8ATD3s@q?d$AftVqCh[NqF<G:8+EV:.+Cf>-FD5W8ARlolDIal(DId<j@<?3r@:F%a+D58'ATD4$Bl@l3De:,-DJs`8ARoFb/0JMK@qB4^F!,R<AKZ&-DfTqBG%G>uD.RTpAKYo'+CT/5+Cei#DII?(E,9)oF*2M7/c"#;
//!
//! println!("{:?}", decode(EXAMPLE_CODEC.as_bytes()).unwrap());
//! ```
//!
//! ## Encode Example
//!
//! ```
//! use base85::encode;
//! const EXAMPLE_PLAIN: &[u8; 269] = b"Man is distinguished, not only by his reason, but by this singular passion from other animals, which is a lust of the mind, that by a perseverance of delight in the continued and indefatigable generation of knowledge, exceeds the short vehemence of any carnal pleasure.";
//!
//! println!("{}", encode(&EXAMPLE_PLAIN[..]));
//! ```
//!
//! ## Decoding into a caller buffer
//!
//! ```
//! use base85::decode_into;
//!
//! let input = b"9jqo^=9";
//! let n = decode_into(input, None)?;
//! let mut out = vec![0; n];
//! decode_into(input, Some(&mut out[..]))?;
//! assert_eq!(out, b"Man X");
//! # Ok::<(), base85::Error>(())
//! ```
//!
//! Input of unknown length is decoded with a [`DecodeContext`].

pub mod alphabet;
mod decode;
mod encode;
mod error;
mod frame;
mod size;
mod stream;

pub use alphabet::{PAD_SYMBOL, ZERO_GROUP};
pub use decode::{decode, decode_group, decode_into, decoded_len};
pub use encode::{encode, encode_into, encoded_len};
pub use error::{Error, Result};
pub use frame::{decode_framed, encode_framed, strip_frame};
pub use size::{decode_output_size, encode_output_size, required_capacity};
pub use stream::{DecodeContext, INITIAL_CAPACITY};

pub const START_SEQUENCE: &[u8; 2] = b"<~";

pub const END_SEQUENCE: &[u8; 2] = b"~>";

#[cfg(test)]
mod tests {
    use test_case::test_case;

    pub(crate) const EXAMPLE_CODEC: &str = r#"9jqo^BlbD-BleB1DJ+*+F(f,q/0JhKF<GL>Cj@.4Gp$d7F!,L7@<6@)/0JDEF<G%<+EV:2F!,O<DJ+*.@<*K0@<6L(Df-\0Ec5e;DffZ(EZee.Bl.9pF"AGXBPCsi+DGm>@3BB/F*&OCAfu2/AKYi(DIb:@FD,*)+C]U=@3BN#EcYf8ATD3s@q?d$AftVqCh[NqF<G:8+EV:.+Cf>-FD5W8ARlolDIal(DId<j@<?3r@:F%a+D58'ATD4$Bl@l3De:,-DJs`8ARoFb/0JMK@qB4^F!,R<AKZ&-DfTqBG%G>uD.RTpAKYo'+CT/5+Cei#DII?(E,9)oF*2M7/c"#;
    pub(crate) const EXAMPLE_PLAIN: &[u8; 269] = b"Man is distinguished, not only by his reason, but by this singular passion from other animals, which is a lust of the mind, that by a perseverance of delight in the continued and indefatigable generation of knowledge, exceeds the short vehemence of any carnal pleasure.";

    pub(crate) fn decode_samples() -> Vec<(&'static [u8], &'static str)> {
        vec![
            (&b""[..], ""),
            (&b""[..], " \r\n\t"),
            (&b""[..], "9"),
            (&b"M"[..], "9`"),
            (&b"Ma"[..], "9jn"),
            (&b"Man"[..], "9jqo"),
            (&b"Man "[..], "9jqo^"),
            (&b"Man X"[..], "9jqo^=9"),
            (&b"Man X"[..], "9j qo\n^=\t9\r\n"),
            (&[0; 4], "z"),
            (&[0; 4], " z "),
            (&[0; 16], "zzzz"),
            (&[0; 8], "!!!!!z"),
            (&[0xff; 4], "s8W-!"),
            (&[0xff; 3], "s8W*"),
            (EXAMPLE_PLAIN, EXAMPLE_CODEC),
        ]
    }

    pub(crate) fn encode_samples() -> Vec<(&'static [u8], &'static str)> {
        vec![
            (&b""[..], ""),
            (&b"M"[..], "9`"),
            (&b"Ma"[..], "9jn"),
            (&b"Man"[..], "9jqo"),
            (&b"Man "[..], "9jqo^"),
            (&b"Man X"[..], "9jqo^=9"),
            (&[0; 4], "z"),
            (&[0; 16], "zzzz"),
            (&[0xff; 4], "s8W-!"),
            (&[0xff; 3], "s8W*"),
            (EXAMPLE_PLAIN, EXAMPLE_CODEC),
        ]
    }

    fn pseudo_random(len: usize) -> Vec<u8> {
        let mut state = 0x2545_f491_u32;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect()
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    #[test_case(7)]
    #[test_case(64)]
    #[test_case(100_003)]
    fn round_trip(len: usize) {
        let plain = pseudo_random(len);
        let encoded = crate::encode(&plain);
        assert_eq!(encoded.len(), crate::encoded_len(&plain));
        assert!(encoded.len() <= crate::encode_output_size(len));

        let decoded = crate::decode(encoded.as_bytes()).unwrap();
        assert_eq!(decoded, plain);
        assert!(decoded.len() <= crate::decode_output_size(encoded.len()));

        let mut ctx = crate::DecodeContext::new();
        for chunk in encoded.as_bytes().chunks(997) {
            ctx.feed(chunk).unwrap();
        }
        ctx.finalize().unwrap();
        assert_eq!(ctx.into_inner(), plain);
    }

    #[test]
    fn round_trip_with_zero_groups() {
        let mut plain = pseudo_random(4096);
        for chunk in plain.chunks_mut(12) {
            chunk[..4].fill(0);
        }
        let encoded = crate::encode(&plain);
        assert!(encoded.contains('z'));
        assert_eq!(crate::decode(encoded.as_bytes()).unwrap(), plain);
    }

    #[test]
    fn short_groups() {
        for n in 1..=3 {
            let plain = pseudo_random(n);
            let encoded = crate::encode(&plain);
            assert_eq!(encoded.len(), n + 1);
            assert_eq!(crate::decode(encoded.as_bytes()).unwrap(), plain);
        }
    }
}
