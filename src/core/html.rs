// src/core/html.rs
//
// Minimal tag scanning. No DOM, no selectors: find a tag block, look at its
// opener attributes, take its inner text. Tolerant of attribute order,
// whitespace and mixed case.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Next `<o ...> ... </c>` block at or after `from`.
/// Returns byte offsets spanning opener through closer.
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

/// Attribute text of a block's opening tag, lowercased.
/// `<table class="wikitable" …>…` → `table class="wikitable" …`
pub fn open_tag_attrs(block: &str) -> String {
    match block.find('>') {
        Some(gt) => to_lower(block[1..gt].trim_end_matches('/')),
        None => s!(),
    }
}

/// Inner text of a block: after the opener's `>`, before the closer's `<`.
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

/// Drop every `<…>` tag, keep the text, collapse whitespace.
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
