//! Low-level tag lookups over a raw comment entry.
//!
//! Every lookup is a stateless match against the entry text. Tag lines look
//! like ` * @tag value`; the leading ` * ` is the comment gutter.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The end of a multi-line tag value: the next tag line or the comment close.
static RE_BLOCK_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\s+@[a-z]|\*/").unwrap());

static RE_DESCRIPTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*/\*\*(?:[ \t]*\n[ \t]*\*[ \t]*)?").unwrap());

/// Gutter at the start of the text or of any line, for inline values.
static RE_GUTTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)[\t ]*\*[\t ]*").unwrap());

/// Gutter for block values; keeps indentation past the first space.
static RE_BLOCK_GUTTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)[\t ]*\*[\t ]?").unwrap());

/// Every tag the entry model looks up; their patterns are compiled once.
const VOCABULARY: &[&str] = &[
    "*",
    "alias",
    "category",
    "constructor",
    "example",
    "function",
    "license",
    "member",
    "memberOf",
    "name",
    "param",
    "private",
    "returns",
    "since",
    "static",
    "type",
];

/// Compiled patterns for one tag.
struct TagPatterns {
    /// The `* @tag` line itself.
    line: Regex,
    /// The `* @tag value` line, capturing the value.
    inline: Regex,
}

impl TagPatterns {
    fn compile(tag: &str) -> Option<Self> {
        let name = match tag {
            "*" => r"\w+".to_string(),
            _ => regex::escape(tag),
        };
        let inline_name = match tag {
            "member" => "member(?:Of)?".to_string(),
            _ => name.clone(),
        };
        Some(Self {
            line: Regex::new(&format!(r"(?m)^[ \t]*\*[\t ]*@{}\b", name)).ok()?,
            inline: Regex::new(&format!(r"(?m)^[ \t]*\*[\t ]*@{}\s+(.+)", inline_name)).ok()?,
        })
    }
}

static PATTERNS: LazyLock<HashMap<&'static str, TagPatterns>> = LazyLock::new(|| {
    VOCABULARY
        .iter()
        .filter_map(|&tag| Some((tag, TagPatterns::compile(tag)?)))
        .collect()
});

/// Run `f` with the patterns for `tag`. Tags outside the vocabulary are
/// compiled on the spot.
fn with_patterns<T>(tag: &str, f: impl FnOnce(&TagPatterns) -> T) -> Option<T> {
    match PATTERNS.get(tag) {
        Some(patterns) => Some(f(patterns)),
        None => TagPatterns::compile(tag).map(|patterns| f(&patterns)),
    }
}

/// Check whether `text` has a `* @tag` line. `"*"` matches any tag.
pub fn has_tag(text: &str, tag: &str) -> bool {
    with_patterns(tag, |p| p.line.is_match(text)).unwrap_or(false)
}

/// Get the single-line value of the first `@tag` line, or an empty string.
///
/// A lookup for `member` also matches `memberOf`.
pub fn inline_value(text: &str, tag: &str) -> String {
    with_patterns(tag, |p| {
        p.inline
            .captures(text)
            .map(|caps| clean_inline(&caps[1]))
            .unwrap_or_default()
    })
    .unwrap_or_default()
}

/// Get the multi-line value following `@tag`, or an empty string.
///
/// The synthetic tag `description` reads from the opening `/**` instead.
/// The value stops before the next tag line or the comment close.
pub fn block_value(text: &str, tag: &str) -> String {
    // (where to look for the end, where the value starts)
    let bounds = if tag == "description" {
        RE_DESCRIPTION_START
            .find(text)
            .map(|m| (m.start() + m.as_str().find("/**").unwrap_or(0) + 3, m.end()))
    } else {
        with_patterns(tag, |p| p.line.find(text).map(|m| (m.end(), m.end()))).flatten()
    };
    let Some((scan_from, start)) = bounds else {
        return String::new();
    };
    let end = RE_BLOCK_END
        .find_at(text, scan_from)
        .map_or(text.len(), |m| m.start());
    if end <= start {
        return String::new();
    }
    clean_block(&text[start..end])
}

/// Collapse gutters to single spaces and trim.
pub fn clean_inline(value: &str) -> String {
    RE_GUTTER.replace_all(value, " ").trim().to_string()
}

/// Strip per-line gutters, keeping line structure, and trim.
pub fn clean_block(value: &str) -> String {
    RE_BLOCK_GUTTER
        .replace_all(value, "\n")
        .trim()
        .to_string()
}
