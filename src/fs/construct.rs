//! Construction and integrity fix-up: turning a flat entry list into a
//! consistent tree.

use super::{ArchiveFileSystem, ArchiveFsError, Result};
use crate::driver::{ArchiveDriver, EntryContainer};
use crate::entry::{AccessKind, ArchiveEntry, EntryType, UNKNOWN};
use crate::path::{self, ROOT};

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> ArchiveFileSystem<D, E> {
    /// Creates an empty filesystem: just a root directory, timestamped
    /// now, already touched (an empty archive is conceptually dirty from
    /// the moment it exists).
    pub fn new(driver: D) -> Self {
        let mut root = Self::mint(&driver, ROOT, EntryType::Directory, None);
        let now = Self::now();
        for kind in AccessKind::ALL {
            root.set_time(kind, now);
        }

        let mut table = crate::table::EntryTable::new();
        table.add(ROOT, root);

        Self { driver, table, touched: true, touch_listener: None }
    }

    /// Builds a filesystem from a driver-provided container of entries.
    ///
    /// Each entry's name is rewritten to `/`-separated form, normalized,
    /// and trimmed of trailing separators to get its canonical path, under
    /// which it is inserted verbatim (driver-assigned times/sizes are
    /// preserved). The root is then overwritten with a fresh directory
    /// built from `root_template` (if any), and every entry whose
    /// canonical path does not escape the tree is fixed up: missing
    /// ancestor directories are synthesized as "ghost" directories with
    /// every time UNKNOWN, and directory membership is reconstructed.
    pub fn from_container<C: EntryContainer<E>>(
        driver: D,
        container: &C,
        root_template: Option<&E>,
    ) -> Self {
        let mut table = crate::table::EntryTable::new();
        let mut to_fix = Vec::with_capacity(container.size());

        for entry in container.iter() {
            let canonical = canonicalize(entry.name());
            table.add(canonical.clone(), entry.clone());
            if !canonical.starts_with('/') && !canonical.starts_with("../") {
                to_fix.push(canonical);
            }
        }

        let root = Self::mint(&driver, ROOT, EntryType::Directory, root_template);
        table.entry_or_insert(ROOT).put(root);

        let mut fs = Self { driver, table, touched: false, touch_listener: None };
        for path in to_fix {
            fs.fix(&path);
        }
        fs
    }

    /// Synthesizes any missing ancestor directories of `path` (as ghost
    /// directories, every time UNKNOWN) and links `path`'s base name into
    /// its parent's member set, recursing up to the root.
    fn fix(&mut self, path: &str) {
        if path::is_root(path) {
            return;
        }
        let (parent, base) = path::split(path);

        if !self.table.is_directory(parent) {
            tracing::trace!(parent, "synthesizing ghost directory");
            let mut ghost = Self::mint(&self.driver, parent, EntryType::Directory, None);
            for kind in AccessKind::ALL {
                ghost.set_time(kind, UNKNOWN);
            }
            self.table.add(parent, ghost);
        }
        self.table.entry_or_insert(parent).add_member(base);

        let parent = parent.to_owned();
        self.fix(&parent);
    }

    /// Mints a new entry, treating any encoding failure as a programmer
    /// error: the caller is expected to have validated the name already
    /// (see [`ArchiveFileSystem::new_checked_entry`] for the checked path).
    pub(super) fn mint(driver: &D, name: &str, ty: EntryType, template: Option<&E>) -> E {
        driver
            .new_entry(name, ty, template)
            .unwrap_or_else(|e| panic!("internal entry construction rejected {name:?}: {e}"))
    }

    /// Mints a new entry, surfacing a driver encoding failure as
    /// [`ArchiveFsError::InvalidName`] instead of panicking.
    pub(super) fn new_checked_entry(
        &self,
        name: &str,
        ty: EntryType,
        template: Option<&E>,
    ) -> Result<E> {
        self.driver
            .new_entry(name, ty, template)
            .map_err(|_| ArchiveFsError::InvalidName(name.to_owned()))
    }
}

/// Rewrites backslashes to `/`, normalizes, and cuts trailing separators.
fn canonicalize(name: &str) -> String {
    let normalized = path::normalize(name);
    path::cut_trailing_separators(&normalized).to_owned()
}
