use super::contact::ContactDetails;

use log::debug;
use std::{collections::BTreeMap, ops::Bound};

/// In-memory contact store keyed by contact name.
///
/// Adding a contact whose name is already in use replaces the old entry.
/// Nothing here ever fails: a missing name is reported through `Option`
/// or ignored.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    book: BTreeMap<String, ContactDetails>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            book: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, details: ContactDetails) {
        let name = details.name().to_string();

        if let Some(old) = self.book.insert(name, details) {
            debug!("replaced contact {:?}", old.name());
        } else {
            debug!("added contact, {} in book", self.book.len());
        }
    }

    pub fn get_by_name(&self, name: &str) -> Option<&ContactDetails> {
        self.book.get(name)
    }

    pub fn key_in_use(&self, name: &str) -> bool {
        self.book.contains_key(name)
    }

    /// Replace the entry stored under `old_name` with `details`, which may
    /// carry a different name. Library API; no interactive command uses it.
    pub fn change_details(&mut self, old_name: &str, details: ContactDetails) {
        if self.book.remove(old_name).is_some() {
            debug!("changing contact {:?}", old_name);
        }
        self.add(details);
    }

    pub fn remove(&mut self, name: &str) {
        if self.book.remove(name).is_some() {
            debug!("removed contact {:?}", name);
        }
    }

    /// Every contact whose name starts with `prefix` (case-sensitive).
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<&ContactDetails> {
        // Keys sharing a prefix are contiguous in the ordered map.
        self.book
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(_, details)| details)
            .collect()
    }

    pub fn list_all(&self) -> String {
        let mut all_entries = String::new();

        for details in self.book.values() {
            all_entries.push_str(&details.to_string());
            all_entries.push_str("\n\n");
        }
        all_entries
    }

    /// All contacts in name order. Library API for callers outside the text loop.
    pub fn iter(&self) -> impl Iterator<Item = &ContactDetails> {
        self.book.values()
    }

    pub fn len(&self) -> usize {
        self.book.len()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}
