use std::collections::BTreeMap;

use crate::discovery::{check_reports, Discovery};
use crate::entry::DesktopEntry;
use crate::error::Result;

/// Desktop entries indexed by their picker label.
///
/// Labels are unique: inserting an entry whose label is already taken
/// replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<String, DesktopEntry>,
}

/// What a picker choice refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A catalog entry.
    Entry(&'a DesktopEntry),
    /// Text that matches no label, to be run as a program name.
    Program(&'a str),
    /// The picker was dismissed.
    Nothing,
}

impl Catalog {
    /// Drain `discovery` into a new catalog, then apply the failure policy
    /// to the per-root reports.
    pub fn collect(discovery: Discovery, keep_going: bool) -> Result<Self> {
        let mut catalog = Self::default();
        for entry in discovery.entries() {
            catalog.insert(entry);
        }
        check_reports(discovery.finish(), keep_going)?;
        Ok(catalog)
    }

    /// Add `entry` under its display key, returning the entry it displaced.
    pub fn insert(&mut self, entry: DesktopEntry) -> Option<DesktopEntry> {
        self.entries.insert(entry.display_key(), entry)
    }

    /// Entry shown under `key`.
    pub fn get(&self, key: &str) -> Option<&DesktopEntry> {
        self.entries.get(key)
    }

    /// All labels in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interpret a line returned by the picker.
    pub fn resolve<'a>(&'a self, choice: &'a str) -> Selection<'a> {
        if let Some(entry) = self.get(choice) {
            Selection::Entry(entry)
        } else if choice.is_empty() {
            Selection::Nothing
        } else {
            Selection::Program(choice)
        }
    }
}
