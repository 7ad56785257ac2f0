//! String helpers shared by the consumers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use datamock_core::Sampler;

use crate::error::MockResult;

pub use datamock_core::chars::{CHARS_LOWER, CHARS_UPPER, HEX_POOL, NUMBERS};

/// Replace spaces with dashes and drop everything that is not a word
/// character, a dot, a dash or a Japanese character.
pub fn slug(input: &str) -> String {
    input
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|&c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') || is_japanese(c))
        .collect()
}

fn is_japanese(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fa0}'   // CJK ideographs
        | '\u{3041}'..='\u{3094}' // hiragana
        | '\u{30a1}'..='\u{30f4}' // katakana
        | '\u{30fc}')
}

/// Bytes of the characters of `text`, one byte per char.
///
/// Characters above U+00FF are truncated to their low byte.
pub fn str_to_buffer(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u32 as u8).collect()
}

/// Standard base64 with padding.
pub fn buffer_to_base64(buffer: &[u8]) -> String {
    STANDARD.encode(buffer)
}

/// Decode standard base64.
pub fn base64_to_buffer(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}

/// Owned copy of one element of `pool`.
pub(crate) fn pick_owned(sampler: &Sampler, pool: &[String]) -> MockResult<String> {
    Ok(sampler.pick_one(pool)?.clone())
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
