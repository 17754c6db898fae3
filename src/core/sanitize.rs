// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove every `( … )` segment, non-greedy, all occurrences.
/// "Lovelace, Ada (she/her) (aud)" → "Lovelace, Ada"
pub fn strip_parens(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut depth = 0usize;
    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// First `( … )` group's contents, verbatim, or empty.
pub fn first_paren_group(s: &str) -> String {
    if let Some(open) = s.find('(') {
        if let Some(close_rel) = s[open + 1..].find(')') {
            return s[open + 1..open + 1 + close_rel].to_string();
        }
    }
    s!()
}

/// Percent-encode a search query for use in a URL query component.
pub fn encode_query(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", b));
            }
        }
    }
    out
}

/// Class name → safe file stem.
pub fn sanitize_class_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("roster") } else { out }
}
