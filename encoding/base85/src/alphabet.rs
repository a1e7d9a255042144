//! The fixed Ascii85 alphabet and its inverse.
//!
//! Symbols are the contiguous code points `b'!'..=b'u'`, mapped in increasing
//! order to the digit values `0..=84`. Both tables are built at compile time.

/// Number of symbols, and the radix of every group.
pub const RADIX: u32 = 85;

/// First symbol of the alphabet, digit value 0.
pub const FIRST_SYMBOL: u8 = b'!';

/// The character `u` is the highest digit (84); short groups are padded with it.
pub const PAD_SYMBOL: u8 = b'u';

/// The character `z` encodes 4 null bytes (0x0000_0000).
pub const ZERO_GROUP: u8 = b'z';

/// Marks a byte that is not part of the alphabet in [`DECODE_TABLE`].
pub const INVALID: u8 = 0xff;

/// Digit value to symbol.
pub const ALPHABET: [u8; RADIX as usize] = build_alphabet();

/// Symbol to digit value, [`INVALID`] for everything else.
pub const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_alphabet() -> [u8; RADIX as usize] {
    let mut table = [0; RADIX as usize];
    let mut i = 0;
    while i < table.len() {
        table[i] = FIRST_SYMBOL + i as u8;
        i += 1;
    }
    table
}

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Maps a digit value (`0..=84`) to its symbol.
#[inline]
pub fn encode_symbol(value: u8) -> u8 {
    debug_assert!((value as u32) < RADIX, "digit {} out of range", value);
    ALPHABET[value as usize]
}

/// Maps a symbol back to its digit value.
#[inline]
pub const fn decode_value(symbol: u8) -> Option<u8> {
    match symbol {
        FIRST_SYMBOL..=PAD_SYMBOL => match DECODE_TABLE[symbol as usize] {
            INVALID => None,
            value => Some(value),
        },
        _ => None,
    }
}

/// Whitespace skipped by the decoders: space, `\n`, `\r` and `\t` only.
#[inline]
pub const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\r' | b'\t')
}
