//! UTF-7 (RFC 2152) codec.
//!
//! Windows stores non-ASCII internet shortcut URLs in the `[InternetShortcut.W]` section using
//! this encoding. Characters from RFC 2152's "direct" and "optional direct" sets are written as
//! themselves; everything else is written as modified base64 of its UTF-16 code units, in a run
//! opened by `+` and closed by `-`.

use thiserror::Error;

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Utf7Error {
    #[error("byte 0x{byte:02x} at offset {offset} is not ASCII")]
    NonAscii { byte: u8, offset: usize },
    #[error("shifted sequence ending at offset {offset} has leftover bits")]
    DanglingBits { offset: usize },
    #[error("shifted sequence ending at offset {offset} contains an unpaired surrogate")]
    UnpairedSurrogate { offset: usize },
    #[error("empty shifted sequence at offset {offset}")]
    EmptyShift { offset: usize },
}

fn base64_value(byte: u8) -> Option<u32> {
    let value = match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => return None,
    };
    Some(u32::from(value))
}

/// Characters that are written unencoded. `+` is handled separately, and `\` and `~` are
/// excluded as RFC 2152 recommends.
fn is_direct(c: char) -> bool {
    matches!(c,
        'A'..='Z' | 'a'..='z' | '0'..='9'
        | '\'' | '(' | ')' | ',' | '-' | '.' | '/' | ':' | '?'
        | ' ' | '\t' | '\r' | '\n'
        | '!' | '"' | '#' | '$' | '%' | '&' | '*' | ';' | '<' | '=' | '>' | '@'
        | '[' | ']' | '^' | '_' | '`' | '{' | '|' | '}'
    )
}

/// Encode `text` as UTF-7. The result only contains ASCII characters.
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut shifted = false;
    let mut bits: u32 = 0;
    let mut nbits: u32 = 0;

    for c in text.chars() {
        if is_direct(c) || c == '+' {
            if shifted {
                flush_run(&mut out, bits, nbits);
                shifted = false;
                bits = 0;
                nbits = 0;
            }
            if c == '+' {
                out.push_str("+-");
            } else {
                out.push(c);
            }
            continue;
        }

        if !shifted {
            out.push('+');
            shifted = true;
        }

        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            bits = (bits << 16) | u32::from(*unit);
            nbits += 16;
            while nbits >= 6 {
                nbits -= 6;
                out.push(BASE64[((bits >> nbits) & 0x3f) as usize] as char);
            }
            bits &= (1 << nbits) - 1;
        }
    }

    if shifted {
        flush_run(&mut out, bits, nbits);
    }

    out
}

fn flush_run(out: &mut String, bits: u32, nbits: u32) {
    if nbits > 0 {
        out.push(BASE64[((bits << (6 - nbits)) & 0x3f) as usize] as char);
    }
    out.push('-');
}

/// Decode UTF-7 `bytes`. Malformed shifted sequences are errors, never replaced.
pub fn decode(bytes: &[u8]) -> Result<String, Utf7Error> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];
        if !byte.is_ascii() {
            return Err(Utf7Error::NonAscii { byte, offset: i });
        }

        if byte != b'+' {
            out.push(char::from(byte));
            i += 1;
            continue;
        }

        // `+-` is a literal plus sign
        let start = i;
        i += 1;
        if bytes.get(i) == Some(&b'-') {
            out.push('+');
            i += 1;
            continue;
        }

        let mut units = Vec::new();
        let mut bits: u32 = 0;
        let mut nbits: u32 = 0;
        while let Some(value) = bytes.get(i).copied().and_then(base64_value) {
            bits = (bits << 6) | value;
            nbits += 6;
            if nbits >= 16 {
                nbits -= 16;
                units.push(((bits >> nbits) & 0xffff) as u16);
            }
            bits &= (1 << nbits) - 1;
            i += 1;
        }

        if i == start + 1 {
            return Err(Utf7Error::EmptyShift { offset: start });
        }
        if nbits >= 6 || bits != 0 {
            return Err(Utf7Error::DanglingBits { offset: i });
        }
        for decoded in char::decode_utf16(units) {
            let c = decoded.map_err(|_| Utf7Error::UnpairedSurrogate { offset: i })?;
            out.push(c);
        }

        // The terminating `-` is absorbed; any other character is decoded normally.
        if bytes.get(i) == Some(&b'-') {
            i += 1;
        }
    }

    Ok(out)
}
