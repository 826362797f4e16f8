// src/ingest/normalize.rs
use once_cell::sync::OnceCell;
use regex::Regex;

/// Strip `<...>` tags, collapse whitespace runs into one space, trim.
///
/// Idempotent: the output contains no `<...>` span and no whitespace run
/// longer than one character.
pub fn clean_text(s: &str) -> String {
    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"<[^>]+>").unwrap());
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());

    let out = re_tags.replace_all(s, "");
    let out = re_ws.replace_all(&out, " ");
    out.trim().to_string()
}
