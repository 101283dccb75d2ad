//! Document assembly: grouping, ordering and the final Markdown layout.

use crate::alias::Alias;
use crate::anchor;
use crate::config::{Options, TocMode};
use crate::entry::{self, Entry};
use crate::error::ConfigError;
use crate::markdown;
use crate::member::DocumentedMember;
use crate::natural;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

// Object properties initialised to `null`/`undefined` are not namespaces
static RE_NULLABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[=:]\s*(?:null|undefined)\s*[,;]?$").unwrap());

type Groups<'e, 'a> = IndexMap<String, Vec<&'e dyn DocumentedMember<'a>>>;

/// Generate the Markdown API reference for `source`.
///
/// Required options are checked before anything is parsed.
pub fn generate(source: &str, options: &Options) -> Result<String, ConfigError> {
    let (_, url) = options.validate()?;
    let source = source.replace("\r\n", "\n");

    let entries = entry::parse(&source, &options.lang);
    let aliases: Vec<Vec<Alias<'_, '_>>> = entries.iter().map(Entry::aliases).collect();
    let api = documented(&entries, &aliases);

    let mut groups = group(&api, options.toc);
    tracing::debug!(groups = groups.len(), toc = ?options.toc, "grouped entries");

    if options.sort {
        sort_groups(&mut groups, options.toc);
    }

    Ok(render(&groups, options, url))
}

/// Every entry followed by its aliases, in source order.
fn documented<'e, 'a>(
    entries: &'e [Entry<'a>],
    aliases: &'e [Vec<Alias<'e, 'a>>],
) -> Vec<&'e dyn DocumentedMember<'a>> {
    let mut api: Vec<&'e dyn DocumentedMember<'a>> = Vec::new();
    for (entry, entry_aliases) in entries.iter().zip(aliases) {
        api.push(entry);
        api.extend(entry_aliases.iter().map(|a| a as &dyn DocumentedMember<'a>));
    }
    api
}

/// Bucket the documented members, skipping private and unnamed ones.
fn group<'e, 'a>(api: &[&'e dyn DocumentedMember<'a>], toc: TocMode) -> Groups<'e, 'a> {
    let mut groups: Groups<'e, 'a> = IndexMap::new();
    for &member in api {
        let name = member.name();
        if member.is_private() || name.is_empty() {
            tracing::trace!(name, line = member.line_number(), "skipping entry");
            continue;
        }

        let key = match toc {
            TocMode::Categories => member.category().to_string(),
            TocMode::Properties => {
                // an existing `member<sep>name` group absorbs its children
                let own = format!("{}{}{}", member.member(), member.separator(), name);
                if !member.member().is_empty() && groups.contains_key(&own) {
                    own
                } else {
                    member_group(member)
                }
            }
        };
        groups.entry(key).or_default().push(member);
    }
    groups
}

/// The membership group key of one member.
fn member_group(member: &dyn DocumentedMember<'_>) -> String {
    let parent = member.member();
    let sep = member.separator();
    if parent.is_empty() || member.is_ctor() || is_namespace(member) {
        return member.qualified_name();
    }
    if member.is_static() {
        return parent.to_string();
    }
    format!("{}{}", parent, sep.trim_end_matches('.'))
}

/// Object-typed properties with a real value act as their own namespace.
fn is_namespace(member: &dyn DocumentedMember<'_>) -> bool {
    member.type_label() == "Object" && !RE_NULLABLE.is_match(member.entry().text())
}

fn sort_groups(groups: &mut Groups<'_, '_>, toc: TocMode) {
    match toc {
        TocMode::Categories => groups.sort_by(|a, _, b, _| {
            category_rank(a)
                .cmp(&category_rank(b))
                .then_with(|| natural::compare(a, b))
        }),
        TocMode::Properties => groups.sort_by(|a, _, b, _| natural::compare_member_path(a, b)),
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| natural::compare(&sort_title(*a, toc), &sort_title(*b, toc)));
    }
}

/// `Methods` and `Properties` trail the named categories, in that order.
fn category_rank(category: &str) -> u8 {
    match category {
        "Methods" => 1,
        "Properties" => 2,
        _ => 0,
    }
}

fn sort_title(member: &dyn DocumentedMember<'_>, toc: TocMode) -> String {
    match toc {
        TocMode::Properties => member.qualified_name(),
        TocMode::Categories if member.is_alias() => member.name().to_string(),
        TocMode::Categories => member.call().to_string(),
    }
}

fn render(groups: &Groups<'_, '_>, options: &Options, url: &str) -> String {
    let mut output = format!("# {}\n\n", options.resolved_title());

    // -- Table of contents --
    for (group, members) in groups {
        output.push_str("<!-- div -->\n\n");
        output.push_str(&markdown::render_group_heading(group));
        output.push('\n');
        for member in members {
            output.push_str(&markdown::render_toc_line(*member, options.style));
            output.push('\n');
        }
        output.push_str("\n<!-- /div -->\n\n");
    }

    // -- Sections --
    for (group, members) in groups {
        output.push_str("<!-- div -->\n\n");
        output.push_str(&format!("## `{}`\n\n", group));
        for member in members.iter().filter(|m| !m.is_alias()) {
            output.push_str(&markdown::render_entry(*member, url, options.style));
            output.push('\n');
        }
        output.push_str("<!-- /div -->\n\n");
    }

    if let Some(first) = groups.keys().next() {
        output.push_str(&format!(
            " [1]: #{} \"Jump back to the TOC.\"\n",
            anchor::group_anchor(first)
        ));
    }
    output
}
