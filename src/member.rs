//! The attribute surface shared by entries and their aliases.

use crate::config::HashStyle;
use crate::entry::Entry;
use crate::model::{Param, Returns};

/// A documented member: either an [`Entry`] or an alias of one.
///
/// Implementors supply their own name and the entry holding the content;
/// every other attribute is read from that entry.
pub trait DocumentedMember<'a> {
    /// The entry that owns this member's documentation.
    fn entry(&self) -> &Entry<'a>;

    fn name(&self) -> &str;

    fn is_alias(&self) -> bool;

    /// The aliased entry, for aliases.
    fn owner(&self) -> Option<&Entry<'a>> {
        None
    }

    fn call<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.entry().call()
    }

    fn type_label<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.entry().type_label()
    }

    fn category<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.entry().category()
    }

    fn description<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.entry().description()
    }

    fn params<'s>(&'s self) -> &'s [Param]
    where
        'a: 's,
    {
        self.entry().params()
    }

    fn returns<'s>(&'s self) -> Option<&'s Returns>
    where
        'a: 's,
    {
        self.entry().returns()
    }

    fn since<'s>(&'s self) -> Option<&'s str>
    where
        'a: 's,
    {
        self.entry().since()
    }

    fn example<'s>(&'s self) -> Option<&'s str>
    where
        'a: 's,
    {
        self.entry().example()
    }

    fn members<'s>(&'s self) -> &'s [String]
    where
        'a: 's,
    {
        self.entry().members()
    }

    /// The first member path, or `""` for top-level members.
    fn member<'s>(&'s self) -> &'s str
    where
        'a: 's,
    {
        self.members().first().map(String::as_str).unwrap_or_default()
    }

    fn is_ctor(&self) -> bool {
        self.entry().is_ctor()
    }

    fn is_license(&self) -> bool {
        self.entry().is_license()
    }

    fn is_private(&self) -> bool {
        self.entry().is_private()
    }

    fn is_static(&self) -> bool {
        self.entry().is_static()
    }

    fn is_plugin(&self) -> bool {
        self.entry().is_plugin()
    }

    fn is_function(&self) -> bool {
        self.entry().is_function()
    }

    fn line_number(&self) -> usize {
        self.entry().line_number()
    }

    fn hash<'s>(&'s self, style: HashStyle) -> &'s str
    where
        'a: 's,
    {
        self.entry().hash(style)
    }

    /// `.prototype.` for prototype members, `.` otherwise.
    fn separator(&self) -> &'static str {
        if self.is_plugin() {
            ".prototype."
        } else {
            "."
        }
    }

    /// `member<sep>name`, or just the name for top-level members.
    fn qualified_name(&self) -> String {
        match self.member() {
            "" => self.name().to_string(),
            member => format!("{}{}{}", member, self.separator(), self.name()),
        }
    }
}

impl<'a> DocumentedMember<'a> for Entry<'a> {
    fn entry(&self) -> &Entry<'a> {
        self
    }

    fn name(&self) -> &str {
        Entry::name(self)
    }

    fn is_alias(&self) -> bool {
        false
    }
}
