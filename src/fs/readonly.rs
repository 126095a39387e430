//! Read-only wrapper: rejects every mutator on the filesystem it wraps.

use super::{ArchiveFileSystem, ArchiveFsError, MknodOptions, Result};
use crate::driver::{ArchiveDriver, TouchListener};
use crate::entry::{AccessKind, ArchiveEntry, CovariantEntry, EntryType};

/// Wraps an [`ArchiveFileSystem`] and reports it as read-only, rejecting
/// every call that would mutate the tree.
///
/// Composition over inheritance: rather than a boolean flag threaded
/// through every mutator, the read-only behavior lives entirely in this
/// wrapper's own method bodies, delegating reads straight through.
pub struct ReadOnlyArchiveFileSystem<D: ArchiveDriver<E>, E: ArchiveEntry + Clone>(
    ArchiveFileSystem<D, E>,
);

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> ReadOnlyArchiveFileSystem<D, E> {
    pub fn new(inner: ArchiveFileSystem<D, E>) -> Self {
        Self(inner)
    }

    pub fn entry(&self, name: &str) -> Option<CovariantEntry<E>> {
        self.0.entry(name)
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CovariantEntry<E>)> {
        self.0.iter()
    }

    /// Always `true`.
    pub fn is_read_only(&self) -> bool {
        true
    }

    pub fn is_writable(&self, _name: &str) -> bool {
        false
    }

    /// Succeeds unconditionally: the filesystem is already read-only, so
    /// this is the one call this wrapper does not intercept (matches the
    /// source, which lets redundant `set_read_only` calls through rather
    /// than erroring on an already-satisfied request).
    pub fn set_read_only(&self, name: &str) -> Result<()> {
        self.0.set_read_only(name)
    }

    pub fn set_touch_listener(&mut self, listener: Option<Box<dyn TouchListener>>) -> Result<()> {
        self.0.set_touch_listener(listener)
    }

    pub fn mknod(
        &mut self,
        name: &str,
        _entry_type: EntryType,
        _options: MknodOptions,
        _template: Option<&CovariantEntry<E>>,
    ) -> Result<()> {
        Err(ArchiveFsError::ReadOnlyFileSystem(name.to_owned()))
    }

    pub fn unlink(&mut self, name: &str) -> Result<()> {
        Err(ArchiveFsError::ReadOnlyFileSystem(name.to_owned()))
    }

    pub fn set_time(
        &mut self,
        name: &str,
        _access_kinds: &[AccessKind],
        _value: i64,
    ) -> Result<bool> {
        Err(ArchiveFsError::ReadOnlyFileSystem(name.to_owned()))
    }

    pub fn set_times(&mut self, name: &str, _times: &[(AccessKind, i64)]) -> Result<bool> {
        Err(ArchiveFsError::ReadOnlyFileSystem(name.to_owned()))
    }
}
