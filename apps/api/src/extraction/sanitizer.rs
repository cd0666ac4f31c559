//! Reply Sanitizer: strips the code fences a generator may wrap around JSON.

const FENCE: &str = "```";

/// Trims the reply, then removes a leading fence opener (three backticks, an
/// optional language tag and a line break) and a trailing fence marker.
///
/// A pass is repeated only while it still changes the text, which makes the
/// function idempotent. Content between the fences is never touched.
pub fn sanitize(raw: &str) -> &str {
    let mut current = raw.trim();
    loop {
        let next = strip_fences(current);
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn strip_fences(text: &str) -> &str {
    let mut text = text;
    if let Some(rest) = text.strip_prefix(FENCE) {
        let tag_len = rest
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        let after_tag = &rest[tag_len..];
        if let Some(body) = after_tag
            .strip_prefix("\r\n")
            .or_else(|| after_tag.strip_prefix('\n'))
        {
            text = body;
        }
    }
    if let Some(body) = text.strip_suffix(FENCE) {
        text = body;
    }
    text.trim()
}
