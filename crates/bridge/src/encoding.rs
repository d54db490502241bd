//! Text decoding applied by bridge implementations.

use syncfile_base::SharedString;

/// Decodes raw file bytes into text.
///
/// Bytes below `0x80` map through as ASCII; bytes `0x80..=0xFF` decode as
/// Latin-1, each becoming the scalar `U+0080..U+00FF`. Decoding is total,
/// so a text read never fails on malformed input.
pub fn decode_bridge_text(bytes: &[u8]) -> SharedString {
    let mut text = String::with_capacity(bytes.len());
    for &byte in bytes {
        text.push(char::from(byte));
    }
    SharedString::from(text)
}
