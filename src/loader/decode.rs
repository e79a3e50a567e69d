use encoding_rs::{UTF_8, WINDOWS_1252};
use std::borrow::Cow;
use std::fmt;

/// Bytes with no assigned character in the cp1252 code page. The WHATWG table
/// in encoding_rs maps them to C1 controls, so they are rejected up front.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8d, 0x8f, 0x90, 0x9d];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252,
    Ascii,
}

impl TextEncoding {
    /// Strict decode: `None` when `bytes` is not valid in this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            TextEncoding::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
            // ISO-8859-1 maps every byte to the code point of the same value.
            TextEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
            TextEncoding::Windows1252 => {
                if bytes.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    std::str::from_utf8(bytes).ok().map(Cow::Borrowed)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252",
            TextEncoding::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

enum DecodeState<'a> {
    Pending(usize),
    Decoded(Cow<'a, str>, TextEncoding),
    Exhausted,
}

/// Try `encodings` in order and return the first successful decode.
/// A failed encoding is never retried.
pub fn decode_with_fallback<'a>(
    bytes: &'a [u8],
    encodings: &[TextEncoding],
) -> Option<(Cow<'a, str>, TextEncoding)> {
    let mut state = DecodeState::Pending(0);
    loop {
        state = match state {
            DecodeState::Pending(i) => match encodings.get(i) {
                Some(encoding) => match encoding.decode(bytes) {
                    Some(text) => DecodeState::Decoded(text, *encoding),
                    None => DecodeState::Pending(i + 1),
                },
                None => DecodeState::Exhausted,
            },
            DecodeState::Decoded(text, encoding) => return Some((text, encoding)),
            DecodeState::Exhausted => return None,
        };
    }
}
