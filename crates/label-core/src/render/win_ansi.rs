//! WinAnsi (Windows-1252) text encoding for the standard Type1 fonts

/// Byte written for characters the encoding has no glyph for
pub const REPLACEMENT: u8 = b'?';

/// Encode `text` for a font with `/Encoding /WinAnsiEncoding`
///
/// Characters outside the encoding are replaced with `?`, one byte each.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_char(c).unwrap_or(REPLACEMENT))
        .collect()
}

/// Whether every character of `text` has a WinAnsi glyph
pub fn is_encodable(text: &str) -> bool {
    text.chars().all(|c| encode_char(c).is_some())
}

fn encode_char(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => special_byte(c),
    }
}

/// Printable characters that Windows-1252 places in 0x80-0x9F
fn special_byte(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}
