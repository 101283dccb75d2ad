//! Permalink fragment generation for entries and TOC groups.

use regex::Regex;
use std::sync::LazyLock;

static RE_GITHUB_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\.=|'"(){}\[\]\t ]"#).unwrap());

static RE_GITHUB_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#,]+").unwrap());

/// Default-style fragment: `member_prototype_name` with dots as underscores.
///
/// A leading run of underscores is dropped, so `_.chunk` becomes `chunk`.
pub fn default_hash(member: Option<&str>, plugin: bool, name: &str) -> String {
    let mut hash = String::new();
    if let Some(member) = member {
        hash.push_str(member);
        hash.push('_');
    }
    if plugin {
        hash.push_str("prototype_");
    }
    hash.push_str(name);
    let hash = hash.replace('.', "_");
    match hash.trim_start_matches('_') {
        "" => hash,
        trimmed => trimmed.to_string(),
    }
}

/// GitHub-style fragment: `memberprototypecall`, punctuation stripped,
/// `#`/`,` runs turned into `-`, lowercased.
pub fn github_hash(member: Option<&str>, plugin: bool, call: &str) -> String {
    let mut hash = String::new();
    if let Some(member) = member {
        hash.push_str(member);
        if plugin {
            hash.push_str("prototype");
        }
    }
    hash.push_str(call);
    let hash = RE_GITHUB_STRIP.replace_all(&hash, "");
    RE_GITHUB_DASH.replace_all(&hash, "-").to_lowercase()
}

/// Anchor id for a TOC group heading.
///
/// The `toc-` prefix keeps group ids apart from entry ids, so the `_` group
/// and a `_` constructor get different anchors.
pub fn group_anchor(group: &str) -> String {
    let slug = group
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("toc-{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_static_member() {
        assert_eq!(default_hash(Some("_"), false, "chunk"), "chunk");
    }

    #[test]
    fn default_plugin_member() {
        assert_eq!(
            default_hash(Some("_"), true, "chain"),
            "prototype_chain"
        );
        assert_eq!(
            default_hash(Some("Foo"), true, "bar"),
            "Foo_prototype_bar"
        );
    }

    #[test]
    fn default_dots_become_underscores() {
        assert_eq!(
            default_hash(Some("_.templateSettings"), false, "imports"),
            "templateSettings_imports"
        );
    }

    #[test]
    fn default_top_level() {
        assert_eq!(default_hash(None, false, "Foo"), "Foo");
        assert_eq!(default_hash(None, false, "_"), "_");
    }

    #[test]
    fn github_strips_punctuation() {
        assert_eq!(
            github_hash(Some("_"), false, "chunk(array, [size=1])"),
            "_chunkarray-size1"
        );
    }

    #[test]
    fn github_plugin() {
        assert_eq!(
            github_hash(Some("Foo"), true, "bar(a)"),
            "fooprototypebara"
        );
    }

    #[test]
    fn group_anchor_lowercases() {
        assert_eq!(group_anchor("_.prototype"), "toc-_.prototype");
        assert_eq!(group_anchor("Array"), "toc-array");
        assert_eq!(group_anchor("Util Methods"), "toc-util-methods");
    }

    #[test]
    fn group_anchor_differs_from_entry_hash() {
        assert_ne!(group_anchor("_"), default_hash(None, false, "_"));
    }
}
