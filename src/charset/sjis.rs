//! Single-byte Shift_JIS (JIS X 0201) codec.
//!
//! Zengin files are exchanged as Shift_JIS. After normalization every character
//! lives in the single-byte half of that encoding: ASCII at 0x20-0x7E and
//! half-width katakana at 0xA1-0xDF. Field widths are counted in these bytes,
//! never in UTF-8 bytes or chars.

use thiserror::Error;

const HALFWIDTH_FIRST: u32 = 0xFF61;
const HALFWIDTH_LAST: u32 = 0xFF9F;
const HALFWIDTH_BYTE_OFFSET: u32 = HALFWIDTH_FIRST - 0xA1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Character outside the single-byte repertoire
    #[error("character {character:?} at position {position} has no single-byte Shift_JIS form")]
    Unmappable { character: char, position: usize },

    /// Byte outside the single-byte repertoire
    #[error("byte {byte:#04x} at offset {offset} is not a single-byte Shift_JIS character")]
    UndecodableByte { byte: u8, offset: usize },
}

/// Width of `c` in Shift_JIS bytes: 1 for ASCII and half-width katakana,
/// 2 for everything else.
pub fn byte_width(c: char) -> usize {
    let cp = c as u32;
    if cp < 0x80 || (HALFWIDTH_FIRST..=HALFWIDTH_LAST).contains(&cp) {
        1
    } else {
        2
    }
}

/// Width of `s` in Shift_JIS bytes.
pub fn str_width(s: &str) -> usize {
    s.chars().map(byte_width).sum()
}

pub fn encode_char(c: char) -> Option<u8> {
    let cp = c as u32;
    match cp {
        0x00..=0x7F => Some(cp as u8),
        HALFWIDTH_FIRST..=HALFWIDTH_LAST => Some((cp - HALFWIDTH_BYTE_OFFSET) as u8),
        _ => None,
    }
}

pub fn decode_byte(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x7F => Some(byte as char),
        0xA1..=0xDF => char::from_u32(byte as u32 + HALFWIDTH_BYTE_OFFSET),
        _ => None,
    }
}

/// Encodes `s` to Shift_JIS bytes. Fails on the first character that would
/// need a double-byte sequence.
pub fn encode(s: &str) -> Result<Vec<u8>, EncodingError> {
    s.chars()
        .enumerate()
        .map(|(position, character)| {
            encode_char(character).ok_or(EncodingError::Unmappable {
                character,
                position,
            })
        })
        .collect()
}

pub fn decode(bytes: &[u8]) -> Result<String, EncodingError> {
    bytes
        .iter()
        .enumerate()
        .map(|(offset, &byte)| decode_byte(byte).ok_or(EncodingError::UndecodableByte { byte, offset }))
        .collect()
}
