//! Entity parser - extracts escaped SSIDs from scan output

use crate::entity::types::{Entities, Entity};
use crate::regex::{find_escaped_ssids, find_scan_result_ssid};

/// Decode printf-style escapes into raw SSID bytes
///
/// Handles `\\`, `\"`, `\n`, `\r`, `\t`, `\e` and `\xHH` (one or two hex
/// digits). Other escaped characters are taken literally and unescaped text is
/// kept as its UTF-8 bytes.
pub fn unescape_ssid(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        match bytes[i + 1] {
            b'\\' => out.push(b'\\'),
            b'"' => out.push(b'"'),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'e' => out.push(0x1b),
            b'x' => {
                let digits = bytes[i + 2..]
                    .iter()
                    .take(2)
                    .take_while(|b| b.is_ascii_hexdigit())
                    .count();
                if digits == 0 {
                    out.push(b'x');
                } else {
                    let hex = &text[i + 2..i + 2 + digits];
                    out.push(u8::from_str_radix(hex, 16).unwrap_or(0));
                    i += digits;
                }
            }
            other => out.push(other),
        }
        i += 2;
    }

    out
}

/// Parse a line of text and extract all escaped SSID tokens
///
/// For tab-separated `scan_results` lines the whole last field is the SSID,
/// so literal spaces stay part of it. Other text falls back to
/// whitespace-delimited tokens.
///
/// # Example
///
/// ```
/// use ssid_gbk::entity::parser::parse_line;
///
/// let entities = parse_line("bssid\t2437\t\\xd6\\xd0\\xb9\\xfa");
/// assert_eq!(entities.len(), 1);
/// ```
pub fn parse_line(text: &str) -> Entities {
    let mut entities = Entities::new();

    if let Some((start, end, token)) = find_scan_result_ssid(text) {
        let bytes = unescape_ssid(&token);
        entities.push(Entity::ssid(start, end, token, bytes));
        return entities;
    }

    for (start, end, token) in find_escaped_ssids(text) {
        let bytes = unescape_ssid(&token);
        entities.push(Entity::ssid(start, end, token, bytes));
    }

    entities.sort_by_position();
    entities
}

/// Build a complete entity list with plain text segments
///
/// This fills in the gaps between extracted entities with plain text segments,
/// so that the original text can be reconstructed with annotations.
pub fn build_complete_entities(text: &str, mut entities: Entities) -> Entities {
    if entities.is_empty() {
        let mut result = Entities::new();
        result.push(Entity::plain(0, text.len(), text.to_string()));
        return result;
    }

    entities.sort_by_position();

    let mut complete = Entities::new();
    let mut last_pos = 0;

    for entity in entities.entities {
        let (start, end) = entity.location;

        if start > last_pos {
            complete.push(Entity::plain(last_pos, start, text[last_pos..start].to_string()));
        }

        complete.push(entity);
        last_pos = end;
    }

    if last_pos < text.len() {
        complete.push(Entity::plain(last_pos, text.len(), text[last_pos..].to_string()));
    }

    complete
}
