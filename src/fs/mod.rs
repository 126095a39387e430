//! Tree assembler and mutator: the virtual, in-memory filesystem view over
//! a flat archive entry list.
//!
//! [`ArchiveFileSystem`] is constructed from either emptiness or an
//! [`EntryContainer`](crate::driver::EntryContainer), reconstructing a
//! consistent tree by synthesizing "ghost" parent directories for any
//! missing ancestor (see [`construct`]). Structural mutation goes through
//! [`ArchiveFileSystem::mknod`] (staged, committed via [`Operation`]) and
//! [`ArchiveFileSystem::unlink`]; attribute mutation through
//! [`ArchiveFileSystem::set_time`]. [`ReadOnlyArchiveFileSystem`] wraps an
//! instance to reject every mutator.

mod construct;
mod error;
mod mknod;
mod mutate;
mod readonly;
#[cfg(test)]
pub(crate) mod test_support;

pub use error::{ArchiveFsError, Result};
pub use mknod::{MknodOptions, Operation};
pub use readonly::ReadOnlyArchiveFileSystem;

use std::time::{SystemTime, UNIX_EPOCH};

use crate::driver::{ArchiveDriver, TouchListener};
use crate::entry::{ArchiveEntry, CovariantEntry};
use crate::table::EntryTable;

/// The virtual, in-memory filesystem view over one driver's entries.
///
/// Not internally thread-safe: the owning controller is expected to
/// serialize all calls. `D` is the archive driver used to mint entries;
/// `E` is the driver's concrete entry type.
pub struct ArchiveFileSystem<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> {
    driver: D,
    table: EntryTable<E>,
    touched: bool,
    touch_listener: Option<Box<dyn TouchListener>>,
}

impl<D: ArchiveDriver<E>, E: ArchiveEntry + Clone> ArchiveFileSystem<D, E> {
    pub(crate) fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }

    /// The entry at `name`, if present. Returns a defensive clone: the
    /// caller cannot mutate the live tree through it.
    pub fn entry(&self, name: &str) -> Option<CovariantEntry<E>> {
        self.table.get(name).cloned()
    }

    /// Number of entries (covariant paths) in the filesystem, including the
    /// root.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CovariantEntry<E>)> {
        self.table.iter()
    }

    /// Always `false` for the base filesystem; [`ReadOnlyArchiveFileSystem`]
    /// overrides this to `true`.
    pub fn is_read_only(&self) -> bool {
        false
    }

    /// `!self.is_read_only()`. Ignores `_name`: this crate has no
    /// per-entry write protection, only the whole-filesystem flag.
    pub fn is_writable(&self, _name: &str) -> bool {
        !self.is_read_only()
    }

    /// Succeeds iff the filesystem is already read-only; this base type
    /// never is, so this always fails. See [`ReadOnlyArchiveFileSystem`].
    pub fn set_read_only(&self, name: &str) -> Result<()> {
        if self.is_read_only() {
            Ok(())
        } else {
            Err(ArchiveFsError::ReadOnlyFileSystem(name.to_owned()))
        }
    }

    /// Registers a touch listener. Fails if one is already set and
    /// `listener` is `Some`; passing `None` clears any existing listener.
    pub fn set_touch_listener(
        &mut self,
        listener: Option<Box<dyn TouchListener>>,
    ) -> Result<()> {
        if self.touch_listener.is_some() && listener.is_some() {
            return Err(ArchiveFsError::ListenerAlreadySet);
        }
        self.touch_listener = listener;
        Ok(())
    }

    /// First mutation of this touch epoch fires the listener; subsequent
    /// calls before the epoch resets are no-ops. A vetoing listener leaves
    /// `touched` false so the next mutator retries it.
    pub(crate) fn touch(&mut self) -> Result<()> {
        if self.touched {
            return Ok(());
        }
        if let Some(listener) = &self.touch_listener {
            listener.pre_touch().map_err(ArchiveFsError::Io)?;
        }
        tracing::debug!("filesystem touched");
        self.touched = true;
        Ok(())
    }

    pub(crate) fn driver(&self) -> &D {
        &self.driver
    }

    pub(crate) fn table(&self) -> &EntryTable<E> {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut EntryTable<E> {
        &mut self.table
    }
}
