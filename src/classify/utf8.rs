//! UTF-8 byte pattern classifier

/// Expected sequence length for a UTF-8 lead byte, `None` for a stray continuation byte
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0xFC..=0xFD => Some(6),
        0xF8..=0xFF => Some(5),
        0xF0..=0xF7 => Some(4),
        0xE0..=0xEF => Some(3),
        0xC0..=0xDF => Some(2),
        _ => None,
    }
}

/// Check whether `ssid` is well-formed, non-ASCII UTF-8
///
/// Pure ASCII input (including the empty string) is rejected: it is valid
/// UTF-8 but cannot be told apart from GBK, which shares the ASCII range.
/// Lead bytes for the historical 5- and 6-byte forms are accepted.
pub fn is_utf8(ssid: &[u8]) -> bool {
    let mut remaining = 0usize;
    let mut all_ascii = true;

    for &byte in ssid {
        if byte & 0x80 != 0 {
            all_ascii = false;
        }

        if remaining == 0 {
            if byte >= 0x80 {
                match sequence_len(byte) {
                    Some(len) => remaining = len - 1,
                    None => return false,
                }
            }
        } else {
            if byte & 0xC0 != 0x80 {
                return false;
            }
            remaining -= 1;
        }
    }

    remaining == 0 && !all_ascii
}
