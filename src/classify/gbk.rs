//! GBK byte pattern classifier
//!
//! GBK encodes a character as one or two bytes:
//! - a single byte in 0x00-0x7F is ASCII
//! - a lead byte in 0x81-0xFE starts a double-byte character whose trail
//!   byte lies in 0x40-0xFE, except 0x7F

fn is_lead(byte: u8) -> bool {
    (0x81..=0xFE).contains(&byte)
}

fn is_trail(byte: u8) -> bool {
    (0x40..=0xFE).contains(&byte) && byte != 0x7F
}

/// Check whether `ssid` follows the GBK lead/trail pattern with at least one
/// double-byte character
pub fn is_gbk(ssid: &[u8]) -> bool {
    let mut all_ascii = true;
    let mut i = 0;

    while i < ssid.len() {
        let byte = ssid[i];

        if is_lead(byte) && i + 1 < ssid.len() {
            if !is_trail(ssid[i + 1]) {
                return false;
            }
            all_ascii = false;
            i += 2;
        } else if byte < 0x80 {
            i += 1;
        } else {
            // 0x80, 0xFF, or a lead byte with nothing after it
            return false;
        }
    }

    !all_ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbk_chinese() {
        assert!(is_gbk(&[0xD6, 0xD0, 0xB9, 0xFA]));
        // mixed with ASCII: "AP-中国"
        assert!(is_gbk(&[0x41, 0x50, 0x2D, 0xD6, 0xD0, 0xB9, 0xFA]));
    }

    #[test]
    fn test_ascii_is_not_gbk() {
        assert!(!is_gbk(b"HomeNetwork"));
        assert!(!is_gbk(b""));
    }

    #[test]
    fn test_lone_lead_at_end() {
        assert!(!is_gbk(&[0xD6, 0xD0, 0xB9]));
        assert!(!is_gbk(&[0x41, 0x81]));
        assert!(!is_gbk(&[0xFE]));
    }

    #[test]
    fn test_bad_trail() {
        assert!(!is_gbk(&[0xD6, 0x7F]));
        assert!(!is_gbk(&[0xD6, 0x3F]));
        assert!(!is_gbk(&[0xD6, 0xFF]));
    }

    #[test]
    fn test_out_of_range_bytes() {
        assert!(!is_gbk(&[0x80, 0x41]));
        assert!(!is_gbk(&[0xFF, 0x41]));
    }

    #[test]
    fn test_trail_range_bounds() {
        assert!(is_gbk(&[0x81, 0x40]));
        assert!(is_gbk(&[0xFE, 0xFE]));
        assert!(is_gbk(&[0x81, 0x80]));
    }
}
