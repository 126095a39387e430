//! Insertion-ordered mapping from canonical path to [`CovariantEntry`].

use indexmap::IndexMap;

use crate::entry::{ArchiveEntry, CovariantEntry, EntryType};

/// Insertion-ordered `path -> CovariantEntry` table.
///
/// Reproducible iteration order is load-bearing: drivers that stream
/// entries back out rely on seeing them in the order the filesystem last
/// touched them, not hash order.
#[derive(Debug, Clone)]
pub struct EntryTable<E: ArchiveEntry + Clone> {
    entries: IndexMap<String, CovariantEntry<E>>,
}

impl<E: ArchiveEntry + Clone> Default for EntryTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ArchiveEntry + Clone> EntryTable<E> {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Finds or creates the covariant wrapper at `path` and stores `entry`
    /// under its own type.
    pub fn add(&mut self, path: impl Into<String>, entry: E) {
        let path = path.into();
        self.entries.entry(path.clone()).or_insert_with(|| CovariantEntry::new(path)).put(entry);
    }

    pub fn get(&self, path: &str) -> Option<&CovariantEntry<E>> {
        self.entries.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut CovariantEntry<E>> {
        self.entries.get_mut(path)
    }

    /// Removes and returns the covariant wrapper at `path`, if present.
    pub fn remove(&mut self, path: &str) -> Option<CovariantEntry<E>> {
        self.entries.shift_remove(path)
    }

    /// Inserts a bare, empty covariant wrapper at `path` if none exists yet
    /// (used to synthesize ghost directories). Returns a mutable reference
    /// to the (possibly pre-existing) wrapper.
    pub fn entry_or_insert(&mut self, path: &str) -> &mut CovariantEntry<E> {
        self.entries.entry(path.to_owned()).or_insert_with(|| CovariantEntry::new(path))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// True iff `path` names a covariant entry that has a DIRECTORY
    /// variant.
    pub fn is_directory(&self, path: &str) -> bool {
        self.entries.get(path).map(|e| e.is_type(EntryType::Directory)).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CovariantEntry<E>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'a, E: ArchiveEntry + Clone> IntoIterator for &'a EntryTable<E> {
    type Item = (&'a str, &'a CovariantEntry<E>);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a CovariantEntry<E>)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
