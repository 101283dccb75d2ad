//! The entry model: one documentation comment and the code line after it.
//!
//! Every attribute is derived from the raw comment text (and, for the line
//! number, the full source) on first use and cached in an explicit
//! [`EntryCache`]. Attributes depend on each other, so they are always read
//! through their getters, never computed ahead of their dependencies:
//!
//! - `name` ← `call` ← `is_function` ← `params`, `returns`, `is_ctor`
//! - `category`, `description` ← `type_label` ← `is_function`
//! - `is_plugin` ← `is_ctor`, `is_private`, `is_static` ← `is_private`, `members`

use crate::alias::Alias;
use crate::anchor;
use crate::config::HashStyle;
use crate::model::{Param, RawComment, Returns};
use crate::natural;
use crate::tags;
use regex::Regex;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

// `/**` not followed by `-` or `!`, through the first non-blank line after `*/`
static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(?:[^-!].*?)?\*/\s*[^\n]+").unwrap());

static RE_CALL_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^function\s+([^\s(]+)\s*\(").unwrap());

static RE_CALL_LHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)(?:[:=,]|\breturn\b)").unwrap());

static RE_CALL_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"\w$.]+"#).unwrap());

static RE_FUNCTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^function\b").unwrap());

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*\*[\t ]*@param\s+\{\(?([^})]+)\)?\}\s+(\[.+?\]|[\w$.|]+(?:\[.+?\])?)")
        .unwrap()
});

static RE_PARAM_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\s+@[a-z]|\*/").unwrap());

static RE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\{\(?([^})]*)\)?\}\s*(.*)$").unwrap());

static RE_LIST_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",\s*").unwrap());

static RE_CANONICAL_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:array|function|object|regexp)$").unwrap());

// -- Extraction ---------------------------------------------------------------

/// Find every documentation comment in `source`, in source order.
pub fn extract(source: &str) -> Vec<RawComment<'_>> {
    RE_ENTRY
        .find_iter(source)
        .map(|m| RawComment {
            text: m.as_str(),
            offset: m.start(),
        })
        .collect()
}

/// Extract and model every entry of `source`, resolving static-ness against
/// the other entries of the same source.
pub fn parse<'a>(source: &'a str, lang: &str) -> Vec<Entry<'a>> {
    let entries: Vec<Entry<'a>> = extract(source)
        .into_iter()
        .map(|raw| Entry::new(raw, source, lang))
        .collect();

    let index = CtorIndex::build(&entries);
    for entry in &entries {
        entry.resolve_static(&index);
    }
    tracing::debug!(entries = entries.len(), "extracted documentation entries");
    entries
}

/// Constructor-ness of entries, keyed by resolved name.
///
/// The first entry with a given name wins, matching a front-to-back scan.
#[derive(Debug, Default)]
pub struct CtorIndex {
    ctors: HashMap<String, bool>,
}

impl CtorIndex {
    pub fn build(entries: &[Entry<'_>]) -> Self {
        let mut ctors = HashMap::new();
        for entry in entries {
            let name = entry.name();
            if !name.is_empty() {
                ctors
                    .entry(name.to_string())
                    .or_insert_with(|| entry.is_ctor());
            }
        }
        Self { ctors }
    }

    /// `Some(is_ctor)` if an entry named `name` exists.
    pub fn lookup(&self, name: &str) -> Option<bool> {
        self.ctors.get(name).copied()
    }
}

// -- Entry --------------------------------------------------------------------

/// Compute-once storage for every derived attribute of an [`Entry`].
#[derive(Debug, Default)]
pub struct EntryCache {
    name: OnceCell<String>,
    call: OnceCell<String>,
    type_label: OnceCell<String>,
    category: OnceCell<String>,
    description: OnceCell<String>,
    params: OnceCell<Vec<Param>>,
    returns: OnceCell<Option<Returns>>,
    since: OnceCell<Option<String>>,
    example: OnceCell<Option<String>>,
    members: OnceCell<Vec<String>>,
    aliases: OnceCell<Vec<String>>,
    is_ctor: OnceCell<bool>,
    is_license: OnceCell<bool>,
    is_private: OnceCell<bool>,
    is_static: OnceCell<bool>,
    is_plugin: OnceCell<bool>,
    is_function: OnceCell<bool>,
    line_number: OnceCell<usize>,
    // indexed by `HashStyle as usize`
    hash: [OnceCell<String>; 2],
}

/// A documentation entry derived from one raw comment.
#[derive(Debug)]
pub struct Entry<'a> {
    raw: RawComment<'a>,
    source: &'a str,
    lang: String,
    cache: EntryCache,
}

impl<'a> Entry<'a> {
    pub fn new(raw: RawComment<'a>, source: &'a str, lang: &str) -> Self {
        Self {
            raw,
            source,
            lang: lang.to_string(),
            cache: EntryCache::default(),
        }
    }

    /// The raw entry text: the comment plus its trailing code line.
    pub fn text(&self) -> &'a str {
        self.raw.text
    }

    /// The code line following the comment, trimmed.
    pub fn code_line(&self) -> &'a str {
        let text = self.raw.text;
        let close = text
            .get(3..)
            .and_then(|rest| rest.find("*/"))
            .map_or(text.len(), |i| i + 5);
        text.get(close..).unwrap_or_default().trim()
    }

    fn has_tag(&self, tag: &str) -> bool {
        tags::has_tag(self.raw.text, tag)
    }

    fn inline(&self, tag: &str) -> String {
        tags::inline_value(self.raw.text, tag)
    }

    /// `@name`, else the call signature up to its parenthesis.
    pub fn name(&self) -> &str {
        self.cache.name.get_or_init(|| {
            if self.has_tag("name") {
                return self.inline("name");
            }
            self.call().split('(').next().unwrap_or_default().to_string()
        })
    }

    /// Function-call syntax for function-like entries, else the bare identifier.
    pub fn call(&self) -> &str {
        self.cache.call.get_or_init(|| {
            let name = match self.inline("name") {
                n if n.is_empty() => self.code_identifier(),
                n => n,
            };
            if !self.is_function() {
                return name;
            }
            let mut args: Vec<&str> = Vec::new();
            let mut seen: Vec<&str> = Vec::new();
            for param in self.params() {
                let bare = param.bare_name();
                // skip properties of other params, e.g. `options.leading`
                let is_child = bare
                    .split_once('.')
                    .is_some_and(|(parent, _)| seen.contains(&parent));
                if !is_child {
                    args.push(&param.name);
                }
                seen.push(bare);
            }
            format!("{}({})", name, args.join(", "))
        })
    }

    /// The identifier named by the code line after the comment.
    fn code_identifier(&self) -> String {
        let line = self.code_line();
        if let Some(caps) = RE_CALL_FUNCTION.captures(line) {
            return reduce_identifier(&caps[1]);
        }
        if let Some(caps) = RE_CALL_LHS.captures(line) {
            return reduce_identifier(&caps[1]);
        }
        RE_CALL_BARE
            .find(line)
            .map(|m| reduce_identifier(m.as_str()))
            .unwrap_or_default()
    }

    /// `@type` (canonically capitalized), else `Function` or `unknown`.
    pub fn type_label(&self) -> &str {
        self.cache.type_label.get_or_init(|| {
            let value = self.inline("type");
            let value = value.trim_matches(|c| c == '{' || c == '}').trim();
            if value.is_empty() {
                let inferred = if self.is_function() { "Function" } else { "unknown" };
                return inferred.to_string();
            }
            if RE_CANONICAL_TYPE.is_match(value) {
                capitalize(value)
            } else {
                value.to_string()
            }
        })
    }

    /// `@category`, else `Methods` for functions and `Properties` otherwise.
    pub fn category(&self) -> &str {
        self.cache.category.get_or_init(|| match self.inline("category") {
            c if c.is_empty() && self.type_label() == "Function" => "Methods".to_string(),
            c if c.is_empty() => "Properties".to_string(),
            c => c,
        })
    }

    /// Body text, prefixed with `(Type): ` for typed non-function entries.
    pub fn description(&self) -> &str {
        self.cache.description.get_or_init(|| {
            let desc = tags::block_value(self.raw.text, "description");
            let ty = self.type_label();
            if desc.is_empty() || ty == "Function" || ty == "unknown" {
                return desc;
            }
            let ty = ty.trim_matches(|c| c == '(' || c == ')').replace('|', ", ");
            format!("({}): {}", ty, desc)
        })
    }

    /// Every well-formed `@param` tag, in declaration order.
    pub fn params(&self) -> &[Param] {
        self.cache.params.get_or_init(|| {
            let text = self.raw.text;
            RE_PARAM
                .captures_iter(text)
                .filter_map(|caps| {
                    let whole = caps.get(0)?;
                    let rest = &text[whole.end()..];
                    let end = RE_PARAM_END.find(rest).map_or(rest.len(), |m| m.start());
                    let mut ty = caps[1].trim().to_string();
                    let mut name = caps[2].to_string();
                    // `{Type=}` marks an optional param
                    if let Some(stripped) = ty.strip_suffix('=') {
                        ty = stripped.to_string();
                        if !name.starts_with('[') {
                            name = format!("[{}]", name);
                        }
                    }
                    Some(Param {
                        ty,
                        name,
                        desc: tags::clean_inline(&rest[..end]),
                    })
                })
                .collect()
        })
    }

    /// `@returns {Type} desc`; absent when the tag is missing or malformed.
    pub fn returns(&self) -> Option<&Returns> {
        self.cache
            .returns
            .get_or_init(|| {
                if !self.has_tag("returns") {
                    return None;
                }
                let value = tags::block_value(self.raw.text, "returns");
                let caps = RE_RETURNS.captures(&value)?;
                Some(Returns {
                    ty: caps[1].trim().replace('|', ", "),
                    desc: tags::clean_inline(&caps[2]),
                })
            })
            .as_ref()
    }

    pub fn since(&self) -> Option<&str> {
        self.cache
            .since
            .get_or_init(|| Some(self.inline("since")).filter(|s| !s.is_empty()))
            .as_deref()
    }

    /// The `@example` block as a fenced code block in the entry's language.
    pub fn example(&self) -> Option<&str> {
        self.cache
            .example
            .get_or_init(|| {
                let value = tags::block_value(self.raw.text, "example");
                if value.is_empty() {
                    None
                } else {
                    Some(format!("```{}\n{}\n```", self.lang, value))
                }
            })
            .as_deref()
    }

    /// `@member`/`@memberOf` paths, naturally sorted.
    pub fn members(&self) -> &[String] {
        self.cache
            .members
            .get_or_init(|| split_list(&self.inline("member")))
    }

    /// `@alias` names, naturally sorted.
    pub fn alias_names(&self) -> &[String] {
        self.cache
            .aliases
            .get_or_init(|| split_list(&self.inline("alias")))
    }

    /// One [`Alias`] view per `@alias` name.
    pub fn aliases(&self) -> Vec<Alias<'_, 'a>> {
        self.alias_names()
            .iter()
            .map(|name| Alias::new(name, self))
            .collect()
    }

    pub fn is_ctor(&self) -> bool {
        *self.cache.is_ctor.get_or_init(|| self.has_tag("constructor"))
    }

    pub fn is_license(&self) -> bool {
        *self.cache.is_license.get_or_init(|| self.has_tag("license"))
    }

    /// Licenses, `@private` entries and entries without any tag.
    pub fn is_private(&self) -> bool {
        *self.cache.is_private.get_or_init(|| {
            self.is_license() || self.has_tag("private") || !self.has_tag("*")
        })
    }

    /// Whether the entry is not assigned to a prototype.
    ///
    /// Entries outside a [`parse`] pass have no sibling entries to consult:
    /// a member of any parent resolves as not static.
    pub fn is_static(&self) -> bool {
        *self
            .cache
            .is_static
            .get_or_init(|| self.infer_static(&CtorIndex::default()))
    }

    /// Resolve static-ness against the entries of the whole source.
    pub fn resolve_static(&self, index: &CtorIndex) -> bool {
        *self.cache.is_static.get_or_init(|| self.infer_static(index))
    }

    fn infer_static(&self, index: &CtorIndex) -> bool {
        if self.is_private() {
            return false;
        }
        if self.has_tag("static") {
            return true;
        }
        let member = self.members().first().map(String::as_str).unwrap_or_default();
        let parent = member.rsplit(['#', '.']).next().unwrap_or_default();
        if parent.is_empty() {
            return true;
        }
        match index.lookup(parent) {
            Some(parent_is_ctor) => !parent_is_ctor,
            None => false,
        }
    }

    /// Whether the entry is assigned to a prototype.
    pub fn is_plugin(&self) -> bool {
        *self
            .cache
            .is_plugin
            .get_or_init(|| !self.is_ctor() && !self.is_private() && !self.is_static())
    }

    pub fn is_function(&self) -> bool {
        *self.cache.is_function.get_or_init(|| {
            self.is_ctor()
                || !self.params().is_empty()
                || self.returns().is_some()
                || self.has_tag("function")
                || RE_FUNCTION_LINE.is_match(self.code_line())
        })
    }

    /// 1-based line of the comment start within the source.
    pub fn line_number(&self) -> usize {
        *self.cache.line_number.get_or_init(|| {
            let end = self.raw.offset.min(self.source.len());
            self.source.as_bytes()[..end]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1
        })
    }

    /// Permalink fragment (without `#`) in the given style.
    pub fn hash(&self, style: HashStyle) -> &str {
        self.cache.hash[style as usize].get_or_init(|| {
            let member = self.members().first().map(String::as_str);
            match style {
                HashStyle::Default => anchor::default_hash(member, self.is_plugin(), self.name()),
                HashStyle::Github => anchor::github_hash(member, self.is_plugin(), self.call()),
            }
        })
    }
}

/// Reduce a code-line fragment to an identifier: last dotted segment, one
/// layer of quotes stripped, `var`/`let`/`const` dropped.
fn reduce_identifier(fragment: &str) -> String {
    let last = fragment.rsplit('.').next().unwrap_or(fragment).trim();
    let last = last
        .strip_prefix(['\'', '"'])
        .unwrap_or(last);
    let last = last.strip_suffix(['\'', '"']).unwrap_or(last);
    ["var ", "let ", "const "]
        .iter()
        .find_map(|kw| last.strip_prefix(kw))
        .unwrap_or(last)
        .trim()
        .to_string()
}

/// Comma-split, drop empties, sort naturally.
fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = RE_LIST_SPLIT
        .split(value)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    items.sort_by(|a, b| natural::compare(a, b));
    items
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
