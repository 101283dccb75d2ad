//! Alias views: a second name for an entry's documentation.

use crate::entry::Entry;
use crate::member::DocumentedMember;

/// A named view of an [`Entry`]. Everything but the name comes from the owner.
#[derive(Debug, Clone, Copy)]
pub struct Alias<'e, 'a> {
    name: &'e str,
    owner: &'e Entry<'a>,
}

impl<'e, 'a> Alias<'e, 'a> {
    pub fn new(name: &'e str, owner: &'e Entry<'a>) -> Self {
        Self { name, owner }
    }
}

impl<'e, 'a> DocumentedMember<'a> for Alias<'e, 'a> {
    fn entry(&self) -> &Entry<'a> {
        self.owner
    }

    fn name(&self) -> &str {
        self.name
    }

    fn is_alias(&self) -> bool {
        true
    }

    fn owner(&self) -> Option<&Entry<'a>> {
        Some(self.owner)
    }
}
