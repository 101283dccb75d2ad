//! Markdown rendering of entry blocks and TOC lines.
//!
//! Inline code spans are never touched: both [`escape`] and [`format`] swap
//! them for a placeholder token first and restore them afterwards.

use crate::anchor;
use crate::config::HashStyle;
use crate::member::DocumentedMember;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const TOKEN: &str = "@@token@@";

static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`\n]*`").unwrap());

static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@@token@@").unwrap());

// `*`, `[` or `]`, optionally already backslash-escaped
static RE_SPECIAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\\?)([*\[\]])").unwrap());

static RE_COLON_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\n([\t ]*\S)").unwrap());

// `-` or `*` list markers; `*` may already be escaped
static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n( *)(?:[-*]|&#42;)([\t ]+\S)").unwrap());

static RE_BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[\t ]*\n").unwrap());

static RE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n +").unwrap());

static RE_PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)(\([^)]+\))").unwrap());

static RE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t ](-?\d+(?:\.\d+)?)").unwrap());

/// Replace code spans with placeholders, apply `f`, then restore them.
fn protect_code(text: &str, f: impl FnOnce(&str) -> String) -> String {
    let mut snippets: Vec<String> = Vec::new();
    let masked = RE_CODE.replace_all(text, |caps: &Captures| {
        snippets.push(caps[0].to_string());
        TOKEN
    });
    let transformed = f(&masked);
    let mut snippets = snippets.into_iter();
    RE_TOKEN
        .replace_all(&transformed, |_: &Captures| snippets.next().unwrap_or_default())
        .into_owned()
}

/// Escape `*`, `[` and `]` as HTML entities outside inline code spans.
///
/// Characters already escaped with a backslash are left alone.
pub fn escape(text: &str) -> String {
    protect_code(text, |masked| {
        RE_SPECIAL
            .replace_all(masked, |caps: &Captures| {
                if !caps[1].is_empty() {
                    return caps[0].to_string();
                }
                match &caps[2] {
                    "*" => "&#42;",
                    "[" => "&#91;",
                    _ => "&#93;",
                }
                .to_string()
            })
            .into_owned()
    })
}

/// Add line breaks, italicize parenthesized phrases and mark free-standing
/// numbers as code.
pub fn format(text: &str) -> String {
    protect_code(text, |masked| {
        let text = RE_COLON_BREAK.replace_all(masked, ":<br>\n$1");
        let text = RE_LIST_ITEM.replace_all(&text, "\n<br>\n$1*$2");
        let text = RE_BLANK_LINE.replace_all(&text, "<br>\n<br>\n");
        let text = RE_INDENT.replace_all(&text, " ");
        let italic = RE_PARENTHESES.replace_all(&text, "$1*$2*");
        RE_NUMBER
            .replace_all(&italic, |caps: &Captures| {
                let m = caps.get(0).map_or(0..0, |m| m.range());
                // leave version-like runs such as `1.2.3` alone
                let rest = &italic[m.end..];
                let mut chars = rest.chars();
                if chars.next() == Some('.') && chars.next().is_some_and(|c| c != '\n') {
                    return caps[0].to_string();
                }
                format!(" `{}`", &caps[1])
            })
            .trim()
            .to_string()
    })
}

fn inline(text: &str) -> String {
    format(&escape(text))
}

/// Render the documentation block for one entry.
pub fn render_entry(member: &dyn DocumentedMember<'_>, url: &str, style: HashStyle) -> String {
    let mut lines: Vec<String> = Vec::new();
    let hash = member.hash(style);
    let prefix = match member.member() {
        "" => String::new(),
        m => format!("{}{}", m, member.separator()),
    };

    lines.push("<!-- div -->".to_string());
    lines.push(String::new());

    // Heading with permalink, source link and TOC backlink
    lines.push(format!(
        "### <a id=\"{}\"></a>`{}{}`",
        hash,
        prefix,
        member.call()
    ));
    lines.push(format!(
        "<a href=\"#{}\">#</a> [&#x24C8;]({}#L{} \"View in source\") [&#x24C9;][1]",
        hash,
        url,
        member.line_number()
    ));
    lines.push(String::new());

    let desc = member.description();
    if !desc.is_empty() {
        lines.push(inline(desc));
        lines.push(String::new());
    }

    let params = member.params();
    if !params.is_empty() {
        lines.push("#### Arguments".to_string());
        for (i, param) in params.iter().enumerate() {
            lines.push(format(&format!(
                "{}. `{}` ({}): {}",
                i + 1,
                param.name,
                escape(&param.ty),
                escape(&param.desc)
            )));
        }
        lines.push(String::new());
    }

    if let Some(returns) = member.returns() {
        lines.push("#### Returns".to_string());
        lines.push(format(&format!(
            "({}): {}",
            escape(&returns.ty),
            escape(&returns.desc)
        )));
        lines.push(String::new());
    }

    if let Some(since) = member.since() {
        lines.push("#### Since".to_string());
        lines.push(escape(since));
        lines.push(String::new());
    }

    let aliases = member.entry().alias_names();
    if !aliases.is_empty() {
        lines.push("#### Aliases".to_string());
        let names: Vec<String> = aliases
            .iter()
            .map(|alias| escape(&format!("{}{}", prefix, alias)))
            .collect();
        lines.push(format!("*{}*", names.join(", ")));
        lines.push(String::new());
    }

    if let Some(example) = member.example() {
        lines.push("#### Example".to_string());
        lines.push(example.to_string());
        lines.push(String::new());
    }

    lines.push("* * *".to_string());
    lines.push(String::new());
    lines.push("<!-- /div -->".to_string());

    let mut block = lines.join("\n");
    block.push('\n');
    block
}

/// Render one TOC list line. Aliases link to their owner's block.
pub fn render_toc_line(member: &dyn DocumentedMember<'_>, style: HashStyle) -> String {
    let hash = member.hash(style);
    match member.owner() {
        Some(owner) => format!(
            "* <a href=\"#{}\" class=\"alias\">{} -> {}</a>",
            hash,
            escape(&member.qualified_name()),
            owner.name()
        ),
        None => format!(
            "* <a href=\"#{}\">{}</a>",
            hash,
            escape(&member.qualified_name())
        ),
    }
}

/// Render a group heading with its anchor.
pub fn render_group_heading(group: &str) -> String {
    format!("## <a id=\"{}\"></a>`{}`", anchor::group_anchor(group), group)
}
