// src/core/html.rs
//
// Hand-rolled, case-insensitive HTML scanning. Tolerant of attribute order,
// whitespace and harmless markup noise; no full-document regexes.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner content between the first `open_pat` tag and the next `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);
    let o = lc.find(&open)?;
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Next `<o …>…</c>` block at or after `from`, as byte offsets into `s`.
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let start = lc.get(from..)?.find(&ol)? + from;
    let open_end = s[start..].find('>')? + start + 1;
    let end_rel = lc[open_end..].find(&cl)?;
    let end = open_end + end_rel + c.len();
    Some((start, end))
}

/// The open tag of a block returned by `next_tag_block_ci`, `>` excluded.
pub fn open_tag(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    super::sanitize::normalize_ws(&out)
}

/// Value of `name="…"` (or `'…'`, or unquoted) inside one open tag.
pub fn attr_value_ci(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = join!(to_lower(name).as_str(), "=");

    let mut from = 0usize;
    loop {
        let rel = lc[from..].find(needle.as_str())?;
        let at = from + rel;
        // Must sit on an attribute boundary, not inside another name.
        let boundary = at == 0
            || lc.as_bytes()[at - 1].is_ascii_whitespace()
            || lc.as_bytes()[at - 1] == b'<';
        if !boundary {
            from = at + needle.len();
            continue;
        }

        let val = &tag[at + needle.len()..];
        let mut chars = val.chars();
        return Some(match chars.next() {
            Some(q @ ('"' | '\'')) => {
                let rest = &val[1..];
                match rest.find(q) {
                    Some(end) => rest[..end].to_string(),
                    None => rest.to_string(),
                }
            }
            Some(_) => val
                .split(|c: char| c.is_ascii_whitespace() || c == '>')
                .next()
                .unwrap_or("")
                .to_string(),
            None => s!(),
        });
    }
}

/// Whitespace-split class attribute of one open tag.
pub fn class_list_ci(tag: &str) -> Vec<String> {
    attr_value_ci(tag, "class")
        .map(|v| v.split_ascii_whitespace().map(|c| s!(c)).collect())
        .unwrap_or_default()
}

/// Case-sensitive on the class name itself; the site's signatures are.
pub fn has_class(tag: &str, class: &str) -> bool {
    class_list_ci(tag).iter().any(|c| c == class)
}

pub fn has_classes(tag: &str, classes: &[&str]) -> bool {
    let list = class_list_ci(tag);
    classes.iter().all(|want| list.iter().any(|c| c == want))
}
