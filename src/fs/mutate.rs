//! Removal and attribute mutation: `unlink`, `set_time`, `set_times`.

use super::{ArchiveFileSystem, ArchiveFsError, Result};
use crate::driver::ArchiveDriver;
use crate::entry::{AccessKind, ArchiveEntry, UNKNOWN};
use crate::path;

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> ArchiveFileSystem<D, E> {
    /// Removes the entry at `name`.
    ///
    /// A no-op on the root (it always exists, per invariant I1). Fails with
    /// [`ArchiveFsError::NotFound`] if `name` is absent, or
    /// [`ArchiveFsError::DirectoryNotEmpty`] if it is a non-empty directory.
    /// On success, every time and size on the removed entry's variants is
    /// reset to [`UNKNOWN`] before it is dropped, its base name is
    /// unlinked from its parent's member set, and the parent's WRITE time
    /// is touched if it was not already [`UNKNOWN`].
    pub fn unlink(&mut self, name: &str) -> Result<()> {
        if path::is_root(name) {
            return Ok(());
        }

        if !self.table().contains(name) {
            return Err(ArchiveFsError::NotFound(name.to_owned()));
        }
        let member_count = self.table().get(name).map(|e| e.member_count()).unwrap_or(0);
        if self.table().is_directory(name) && member_count > 0 {
            return Err(ArchiveFsError::DirectoryNotEmpty(name.to_owned(), member_count));
        }

        self.touch()?;

        let mut removed = self.table_mut().remove(name).expect("checked present above");
        for kind in AccessKind::ALL {
            for ty in crate::entry::EntryType::ALL {
                if let Some(entry) = removed.get_mut(ty) {
                    entry.set_time(kind, UNKNOWN);
                }
            }
        }
        for kind in crate::entry::SizeKind::ALL {
            for ty in crate::entry::EntryType::ALL {
                if let Some(entry) = removed.get_mut(ty) {
                    entry.set_size(kind, UNKNOWN);
                }
            }
        }

        let (parent_path, base) = path::split(name);
        if let Some(parent) = self.table_mut().get_mut(parent_path) {
            parent.remove_member(base);
            if let Some(parent_entry) = parent.any_mut() {
                if parent_entry.time(AccessKind::Write) != UNKNOWN {
                    let now = Self::now();
                    parent_entry.set_time(AccessKind::Write, now);
                }
            }
        }

        tracing::debug!(path = name, "unlinked");
        Ok(())
    }

    /// Sets `value` on every kind in `access_kinds` for the entry at `name`.
    ///
    /// Fails with [`ArchiveFsError::InvalidArgument`] if `value` is
    /// negative and not exactly [`UNKNOWN`]; fails with
    /// [`ArchiveFsError::NotFound`] if `name` is absent (checked before any
    /// touch, so a miss never marks the filesystem dirty). Otherwise
    /// touches, then for every requested kind and every variant present at
    /// `name` calls [`ArchiveEntry::set_time`] and ANDs the result into a
    /// running conjunction, which is the return value — this call never
    /// fails merely because a variant couldn't represent the time.
    pub fn set_time(
        &mut self,
        name: &str,
        access_kinds: &[AccessKind],
        value: i64,
    ) -> Result<bool> {
        if value < 0 && value != UNKNOWN {
            return Err(ArchiveFsError::InvalidArgument(format!(
                "negative time {value} for {name}"
            )));
        }
        if !self.table().contains(name) {
            return Err(ArchiveFsError::NotFound(name.to_owned()));
        }
        self.touch()?;

        let entry = self.table_mut().get_mut(name).expect("checked present above");

        let mut conjunction = true;
        for kind in access_kinds {
            for ty in crate::entry::EntryType::ALL {
                if let Some(variant) = entry.get_mut(ty) {
                    conjunction &= variant.set_time(*kind, value);
                }
            }
        }
        Ok(conjunction)
    }

    /// Sets every `(kind, value)` pair on the entry at `name`.
    ///
    /// Fails with [`ArchiveFsError::NotFound`] if `name` is absent;
    /// otherwise touches unconditionally before processing any pair, then
    /// applies every pair in turn: a pair whose `value` is negative is
    /// skipped (not applied, and not an error) and counts as a partial
    /// failure; every other pair is applied to every variant present at
    /// `name`, ORing across variants into that pair's own success flag.
    /// Every pair's success flag is ANDed into the return value — one
    /// negative or unrepresentable pair turns the result `false` without
    /// preventing the remaining pairs from being applied.
    pub fn set_times(&mut self, name: &str, times: &[(AccessKind, i64)]) -> Result<bool> {
        if !self.table().contains(name) {
            return Err(ArchiveFsError::NotFound(name.to_owned()));
        }
        self.touch()?;

        let entry = self.table_mut().get_mut(name).expect("checked present above");

        let mut conjunction = true;
        for (kind, value) in times {
            if *value < 0 {
                conjunction = false;
                continue;
            }
            let mut applied = false;
            for ty in crate::entry::EntryType::ALL {
                if let Some(variant) = entry.get_mut(ty) {
                    applied |= variant.set_time(*kind, *value);
                }
            }
            conjunction &= applied;
        }
        Ok(conjunction)
    }
}
