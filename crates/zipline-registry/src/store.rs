use std::collections::HashMap;

use zipline_core::{Link, LinkId};

/// Insertion-ordered table of every link the registry has ever created.
///
/// Entries are never removed: an expired link keeps occupying its short
/// code for the lifetime of the table, so codes are never reissued.
#[derive(Debug, Default)]
pub(crate) struct LinkTable {
    links: Vec<Link>,
    by_code: HashMap<String, usize>,
    next_id: u64,
}

impl LinkTable {
    pub(crate) fn new() -> Self {
        Self {
            links: Vec::new(),
            by_code: HashMap::new(),
            next_id: 1,
        }
    }

    /// True if the code is occupied, by a live or an expired link.
    pub(crate) fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Mints the id for the next stored link. Ids are sequential and
    /// never reused.
    pub(crate) fn mint_id(&mut self) -> LinkId {
        let id = LinkId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Stores a link under its code. The code must be free.
    pub(crate) fn insert(&mut self, link: Link) {
        debug_assert!(!self.contains(link.shortcode.as_str()));
        self.by_code
            .insert(link.shortcode.as_str().to_owned(), self.links.len());
        self.links.push(link);
    }

    pub(crate) fn get_mut(&mut self, code: &str) -> Option<&mut Link> {
        let index = *self.by_code.get(code)?;
        Some(&mut self.links[index])
    }

    /// Links in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use zipline_core::ShortCode;

    use super::*;

    fn link(id: LinkId, code: &str) -> Link {
        let now = Timestamp::now();
        Link {
            id,
            original_url: format!("https://example.com/{code}"),
            shortcode: ShortCode::new_unchecked(code),
            created_at: now,
            expiry_at: now + SignedDuration::from_mins(30),
            clicks: 0,
            click_log: Vec::new(),
        }
    }

    #[test]
    fn minted_ids_are_sequential() {
        let mut table = LinkTable::new();
        assert_eq!(table.mint_id(), LinkId::new(1));
        assert_eq!(table.mint_id(), LinkId::new(2));
        assert_eq!(table.mint_id(), LinkId::new(3));
    }

    #[test]
    fn lookup_by_code_after_insert() {
        let mut table = LinkTable::new();
        let id = table.mint_id();
        table.insert(link(id, "abc123"));

        assert!(table.contains("abc123"));
        assert!(!table.contains("zzz999"));
        assert_eq!(table.get_mut("abc123").unwrap().id, id);
        assert!(table.get_mut("zzz999").is_none());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut table = LinkTable::new();
        for code in ["first1", "second2", "third3"] {
            let id = table.mint_id();
            table.insert(link(id, code));
        }

        let codes: Vec<&str> = table.iter().map(|l| l.shortcode.as_str()).collect();
        assert_eq!(codes, vec!["first1", "second2", "third3"]);
        assert_eq!(table.len(), 3);
    }
}
