//! Page list store
//!
//! Ordered collection of page records. Order is display order; ids are
//! allocated from a monotonic counter and never handed out twice, even after
//! the page that held one is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::pages::{new_page_name, COPY_SUFFIX};
use crate::error::{PageError, Result};

/// Stable page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(u64);

impl PageId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(PageId)
            .map_err(|_| PageError::InvalidPayload(s.to_string()))
    }
}

/// A named entry in the toolbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub name: String,
}

/// Ordered page store
#[derive(Debug, Clone)]
pub struct PageList {
    pages: Vec<Page>,
    next_id: u64,
}

impl Default for PageList {
    fn default() -> Self {
        Self::new()
    }
}

impl PageList {
    /// Create an empty store; the first allocated id is `1`
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding one page per name, numbered from `1`
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for name in names {
            let id = list.allocate_id();
            list.pages.push(Page {
                id,
                name: name.into(),
            });
        }
        list
    }

    fn allocate_id(&mut self) -> PageId {
        let id = PageId(self.next_id);
        self.next_id += 1;
        id
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    /// Ids in display order
    pub fn ids(&self) -> Vec<PageId> {
        self.pages.iter().map(|p| p.id).collect()
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.get(id).is_some()
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn first_id(&self) -> Option<PageId> {
        self.pages.first().map(|p| p.id)
    }

    pub fn id_at(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).map(|p| p.id)
    }

    fn require_index(&self, id: PageId) -> Result<usize> {
        self.index_of(id).ok_or(PageError::NotFound(id))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a fresh page at `at`, or append when `at` is omitted or past the end
    pub fn insert_page(&mut self, at: Option<usize>) -> PageId {
        let id = self.allocate_id();
        let page = Page {
            id,
            name: new_page_name(id),
        };
        match at {
            Some(index) if index <= self.pages.len() => self.pages.insert(index, page),
            _ => self.pages.push(page),
        }
        id
    }

    /// Move a page into the gap at `to_gap`, returning its new index
    ///
    /// Gap `i` sits before the page at index `i`. When the page starts left
    /// of the gap its own removal shifts the gap one slot left.
    pub fn move_page(&mut self, id: PageId, to_gap: usize) -> Result<usize> {
        let from = self.require_index(id)?;
        let to_gap = to_gap.min(self.pages.len());
        let target = if from < to_gap { to_gap - 1 } else { to_gap };

        let page = self.pages.remove(from);
        self.pages.insert(target, page);
        Ok(target)
    }

    /// Remove a page and reinsert it at `to_index` with no shift compensation
    pub fn relocate(&mut self, id: PageId, to_index: usize) -> Result<usize> {
        let from = self.require_index(id)?;
        let page = self.pages.remove(from);
        let target = to_index.min(self.pages.len());
        self.pages.insert(target, page);
        Ok(target)
    }

    /// Clone a page right after itself under a fresh id
    pub fn duplicate_page(&mut self, id: PageId) -> Result<PageId> {
        let index = self.require_index(id)?;
        let name = format!("{}{}", self.pages[index].name, COPY_SUFFIX);
        let copy_id = self.allocate_id();
        self.pages.insert(index + 1, Page { id: copy_id, name });
        Ok(copy_id)
    }

    /// Remove a page, returning the index it occupied
    pub fn delete_page(&mut self, id: PageId) -> Result<usize> {
        let index = self.require_index(id)?;
        self.pages.remove(index);
        Ok(index)
    }

    pub fn rename_page(&mut self, id: PageId, name: impl Into<String>) -> Result<()> {
        let index = self.require_index(id)?;
        self.pages[index].name = name.into();
        Ok(())
    }

    /// Move a page to the front, keeping the others in order
    pub fn set_as_first(&mut self, id: PageId) -> Result<()> {
        let index = self.require_index(id)?;
        let page = self.pages.remove(index);
        self.pages.insert(0, page);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::pages::SEED_NAMES;
    use proptest::prelude::*;

    fn seeded() -> PageList {
        PageList::from_names(SEED_NAMES)
    }

    fn names(list: &PageList) -> Vec<&str> {
        list.iter().map(|p| p.name.as_str()).collect()
    }

    fn id(raw: u64) -> PageId {
        PageId::new(raw)
    }

    #[test]
    fn test_seed_ids_start_at_one() {
        let list = seeded();
        assert_eq!(list.ids(), vec![id(1), id(2), id(3), id(4)]);
    }

    #[test]
    fn test_insert_appends_with_next_id() {
        let mut list = seeded();
        let new_id = list.insert_page(None);
        assert_eq!(new_id.to_string(), "5");
        assert_eq!(list.as_slice().last().unwrap().name, "New Page 5");
    }

    #[test]
    fn test_insert_at_index_and_out_of_range() {
        let mut list = seeded();
        let a = list.insert_page(Some(0));
        assert_eq!(list.id_at(0), Some(a));

        let b = list.insert_page(Some(99));
        assert_eq!(list.id_at(list.len() - 1), Some(b));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut list = seeded();
        let five = list.insert_page(None);
        list.delete_page(five).unwrap();
        let six = list.insert_page(None);
        assert_eq!(six, id(6));
    }

    #[test]
    fn test_move_forward_compensates_for_removal() {
        let mut list = seeded();
        list.move_page(id(1), 3).unwrap();
        assert_eq!(names(&list), vec!["Details", "Other", "Info", "Ending"]);
    }

    #[test]
    fn test_move_backward_keeps_gap() {
        let mut list = seeded();
        list.move_page(id(4), 1).unwrap();
        assert_eq!(names(&list), vec!["Info", "Ending", "Details", "Other"]);
    }

    #[test]
    fn test_move_to_trailing_gap() {
        let mut list = seeded();
        let index = list.move_page(id(2), 4).unwrap();
        assert_eq!(index, 3);
        assert_eq!(names(&list), vec!["Info", "Other", "Ending", "Details"]);
    }

    #[test]
    fn test_relocate_uses_raw_index() {
        let mut list = seeded();
        // Target index taken before removal, as a page drop does
        list.relocate(id(1), 2).unwrap();
        assert_eq!(names(&list), vec!["Details", "Other", "Info", "Ending"]);

        list.relocate(id(4), 0).unwrap();
        assert_eq!(names(&list), vec!["Ending", "Details", "Other", "Info"]);
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut list = seeded();
        let copy = list.duplicate_page(id(2)).unwrap();
        assert_eq!(copy, id(5));
        assert_eq!(list.index_of(copy), Some(2));
        assert_eq!(list.get(copy).unwrap().name, "Details (Copy)");
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_set_as_first_preserves_rest() {
        let mut list = seeded();
        list.set_as_first(id(3)).unwrap();
        assert_eq!(names(&list), vec!["Other", "Info", "Details", "Ending"]);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut list = seeded();
        assert_eq!(list.delete_page(id(42)), Err(PageError::NotFound(id(42))));
        assert!(list.rename_page(id(42), "x").is_err());
        assert!(list.move_page(id(42), 0).is_err());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_page_id_parsing() {
        assert_eq!("3".parse::<PageId>(), Ok(id(3)));
        assert!("abc".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(Option<usize>),
        Delete(usize),
        Duplicate(usize),
        Move(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            proptest::option::of(0usize..8).prop_map(Op::Insert),
            (0usize..8).prop_map(Op::Delete),
            (0usize..8).prop_map(Op::Duplicate),
            (0usize..8, 0usize..9).prop_map(|(a, b)| Op::Move(a, b)),
        ]
    }

    proptest! {
        #[test]
        fn prop_ids_stay_unique(ops in proptest::collection::vec(op_strategy(), 0..40)) {
            let mut list = seeded();
            for op in ops {
                match op {
                    Op::Insert(at) => { list.insert_page(at); }
                    Op::Delete(i) => {
                        if let Some(id) = list.id_at(i) { list.delete_page(id).unwrap(); }
                    }
                    Op::Duplicate(i) => {
                        if let Some(id) = list.id_at(i) { list.duplicate_page(id).unwrap(); }
                    }
                    Op::Move(i, gap) => {
                        if let Some(id) = list.id_at(i) { list.move_page(id, gap).unwrap(); }
                    }
                }
                let mut ids = list.ids();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), list.len());
            }
        }

        #[test]
        fn prop_move_is_a_permutation(from in 0usize..4, gap in 0usize..5) {
            let mut list = seeded();
            let mut before = list.ids();
            let moved = list.id_at(from).unwrap();
            list.move_page(moved, gap).unwrap();
            let mut after = list.ids();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
