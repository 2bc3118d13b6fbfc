//! Small shared helpers: permissive JSON field extraction, URL encoding,
//! HTML tag stripping for Naver titles, and CJK-aware text truncation.

use serde_json::Value;
use unicode_width::UnicodeWidthChar;

/// Percent-encode `input` for use in a URL path or query component.
///
/// Unreserved characters pass through; everything else is emitted as
/// `%XX` bytes so Korean query text survives the round trip.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// Extract a string field from a JSON object, defaulting to empty.
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Extract the first present string field among `keys`.
pub fn ss(v: &Value, keys: &[&str]) -> Option<String> {
    for k in keys {
        if let Some(s) = v.get(*k).and_then(|x| x.as_str()) {
            return Some(s.to_owned());
        }
    }
    None
}

/// Parse a numeric field that may arrive as a JSON number or a numeric
/// string (Naver sends prices as strings like `"12900"`).
pub fn u64_of(v: &Value, key: &str) -> Option<u64> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(txt) = n.as_str() {
        let t = txt.trim();
        if t.is_empty() {
            return None;
        }
        if let Ok(p) = t.parse::<u64>() {
            return Some(p);
        }
    }
    None
}

/// Strip HTML tags and decode the handful of entities Naver emits in
/// item titles (`<b>검색어</b>` markup, `&amp;` and friends).
pub fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    decode_entities(&out)
}

/// Decode the common named/numeric entities seen in shopping titles.
fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let Some(end) = rest.find(';') else {
            break;
        };
        let entity = &rest[..=end];
        match entity {
            "&amp;" => out.push('&'),
            "&lt;" => out.push('<'),
            "&gt;" => out.push('>'),
            "&quot;" => out.push('"'),
            "&#39;" | "&apos;" => out.push('\''),
            "&nbsp;" => out.push(' '),
            other => out.push_str(other),
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Split a raw ingredient string into individual entries.
///
/// The recipe API packs everything into one field separated by commas,
/// middle dots, slashes, or newlines.
pub fn split_ingredients(parts: &str) -> Vec<String> {
    parts
        .split(['\n', ',', '·', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Truncate `text` to at most `max_width` terminal columns, appending an
/// ellipsis when cut. Width-aware so Hangul (double-width) never overflows
/// a list row.
pub fn truncate_width(text: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
